//! Error taxonomy for the simulation engine.
//!
//! Configuration errors surface synchronously to the caller; there is no
//! I/O in this crate and therefore no retry machinery. Out-of-range
//! enqueue values are not errors — they are silently dropped by the
//! engine — and stepping an empty queue is an ordinary `Ok(false)`.

use thiserror::Error;

/// Errors produced by [`crate::engine::SimulationEngine`] operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    /// The requested disk size cannot hold a single cylinder.
    ///
    /// Raised at construction and on resize; the engine state is left
    /// unchanged.
    #[error("disk must have at least one cylinder (got {0})")]
    InvalidDiskSize(u32),

    /// The engine was shut down; the operation performed no mutation.
    #[error("simulation engine has been shut down")]
    Disposed,
}
