//! Aggregate simulation state.

use serde::{Deserialize, Serialize};

use super::{DiskGeometry, Direction, RequestQueue};
use crate::policies::SchedulingAlgorithm;

/// The full observable state of a simulation.
///
/// Owned exclusively by the engine and mutated only through engine
/// operations; consumers see it as a read-only snapshot. The policy
/// queries in [`crate::policies`] evaluate over this type without
/// touching it.
///
/// Invariants maintained by the engine: `head` lies in
/// `[0, geometry.cylinders())`, and so does every queued request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Disk geometry.
    pub geometry: DiskGeometry,
    /// Current head position.
    pub head: u32,
    /// Current sweep direction.
    pub direction: Direction,
    /// Pending requests in arrival order.
    pub queue: RequestQueue,
    /// The active scheduling policy.
    pub algorithm: SchedulingAlgorithm,
}

impl SimulationState {
    /// Creates a fresh state: clamped head, direction `Up`, empty queue.
    pub fn new(geometry: DiskGeometry, head: u32, algorithm: SchedulingAlgorithm) -> Self {
        Self {
            geometry,
            head: geometry.clamp(head),
            direction: Direction::Up,
            queue: RequestQueue::new(),
            algorithm,
        }
    }
}
