//! LOOK scheduling.
//!
//! Sweeps like SCAN but never travels to a physical edge that carries
//! no request: once nothing remains ahead, it reverses immediately and
//! services back down from the largest pending request below the head
//! (mirrored for a downward sweep).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2.5

use crate::models::{Direction, SimulationState};

/// The next LOOK target.
///
/// Sweeping `Up`: the smallest pending request at or above the head;
/// failing that, the largest pending request below it. Mirrored for
/// `Down`.
pub(super) fn choose_next(state: &SimulationState) -> Option<u32> {
    let queue = &state.queue;
    let head = state.head;
    match state.direction {
        Direction::Up => queue
            .min_at_or_above(head)
            .or_else(|| queue.max_at_or_below(head)),
        Direction::Down => queue
            .max_at_or_below(head)
            .or_else(|| queue.min_at_or_above(head)),
    }
}
