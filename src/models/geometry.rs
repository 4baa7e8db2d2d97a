//! Disk geometry.
//!
//! The simulated disk is a flat range of cylinders `[0, cylinders)`.
//! Geometry is validated once at construction; every other component
//! can then rely on `cylinders >= 1`.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// The simulated disk: a positive number of cylinders.
///
/// Cylinder indices run from `0` to [`DiskGeometry::max_cylinder`]
/// inclusive. A zero-cylinder disk is rejected at construction with
/// [`SimulationError::InvalidDiskSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskGeometry {
    cylinders: u32,
}

impl DiskGeometry {
    /// Creates a geometry with the given cylinder count.
    pub fn new(cylinders: u32) -> Result<Self, SimulationError> {
        if cylinders == 0 {
            return Err(SimulationError::InvalidDiskSize(cylinders));
        }
        Ok(Self { cylinders })
    }

    /// Total number of cylinders.
    pub fn cylinders(&self) -> u32 {
        self.cylinders
    }

    /// Highest valid cylinder index.
    pub fn max_cylinder(&self) -> u32 {
        self.cylinders - 1
    }

    /// Whether the cylinder index lies on this disk.
    pub fn contains(&self, cylinder: u32) -> bool {
        cylinder < self.cylinders
    }

    /// Clamps a cylinder index into the valid range.
    pub fn clamp(&self, cylinder: u32) -> u32 {
        cylinder.min(self.max_cylinder())
    }
}
