//! Disk-head scheduling simulator.
//!
//! Simulates a moving disk arm servicing a queue of cylinder requests
//! under the classic scheduling policies, for teaching and for
//! comparing policy behavior. The engine applies exactly one scheduling
//! step per call and notifies subscribers after each mutation, so a
//! presentation layer can animate the head path and live statistics
//! without owning any simulation logic.
//!
//! # Modules
//!
//! - **`models`**: simulation data — `DiskGeometry`, `Direction`,
//!   `RequestQueue`, `SeekStatistics`, `SimulationState`
//! - **`policies`**: the six scheduling policies (FCFS, SSTF, SCAN,
//!   C-SCAN, LOOK, C-LOOK) and whole-queue projections
//! - **`engine`**: the step-wise `SimulationEngine` and its
//!   change-notification subscriptions
//! - **`workload`**: seeded random request generators
//! - **`error`**: the `SimulationError` taxonomy
//!
//! # Example
//!
//! ```
//! use seeksim::engine::SimulationEngine;
//! use seeksim::policies::SchedulingAlgorithm;
//!
//! let mut engine = SimulationEngine::new(200, 50, SchedulingAlgorithm::Scan)?;
//! engine.enqueue_all([10, 190])?;
//!
//! // Preview the whole sweep without consuming the queue: the head
//! // climbs to 190, reverses, and comes back down to 10.
//! let projection = engine.projection()?;
//! assert_eq!(projection.visit_order, vec![190, 10]);
//!
//! while engine.step()? {}
//! assert_eq!(engine.statistics()?.total_seek_distance, projection.total_distance);
//! # Ok::<(), seeksim::error::SimulationError>(())
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts",
//!   Ch. 11: Mass-Storage Structure
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

pub mod engine;
pub mod error;
pub mod models;
pub mod policies;
pub mod workload;
