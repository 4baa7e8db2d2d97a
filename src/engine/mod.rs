//! Simulation engine and change notifications.
//!
//! [`SimulationEngine`] owns the state and statistics, applies one
//! scheduling step per call, and notifies subscribers after each
//! mutation. [`SubscriptionId`] identifies a registered handler for
//! later removal.

mod events;
mod simulation;

pub use events::SubscriptionId;
pub use simulation::SimulationEngine;
