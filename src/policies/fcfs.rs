//! First Come, First Served.
//!
//! Services requests strictly in arrival order, ignoring head position.
//! Fair and starvation-free, but the head may swing wildly across the
//! disk.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2.1

use crate::models::SimulationState;

/// The oldest pending request.
pub(super) fn choose_next(state: &SimulationState) -> Option<u32> {
    state.queue.front()
}
