//! Simulation data types.
//!
//! Provides the core state carried by the engine and read by policies
//! and presentation layers:
//!
//! - [`DiskGeometry`]: validated cylinder count
//! - [`Direction`]: head sweep direction (`Up` / `Down`)
//! - [`RequestQueue`]: ordered multiset of pending cylinder requests
//! - [`SeekStatistics`]: cumulative travel and service counters
//! - [`SimulationState`]: the aggregate snapshot
//!
//! All types serialize with serde so snapshots can be handed across a
//! presentation boundary as-is.

mod direction;
mod geometry;
mod queue;
mod state;
mod statistics;

pub use direction::Direction;
pub use geometry::DiskGeometry;
pub use queue::RequestQueue;
pub use state::SimulationState;
pub use statistics::SeekStatistics;
