//! C-LOOK (circular LOOK) scheduling.
//!
//! Sweeps like LOOK but wraps to the opposite extreme pending request
//! instead of reversing: with nothing ahead of an upward sweep the head
//! jumps straight to the minimum pending request (the maximum for a
//! downward sweep). The physical edges are never visited without a
//! request there, and the wrap jump is charged as ordinary seek
//! distance.
//!
//! The sweep direction is preserved across the wrap ([`super::advance`]
//! never updates it for the circular policies), so servicing stays
//! one-directional: after the jump the head keeps sweeping the same way
//! it did before.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2.5

use crate::models::{Direction, SimulationState};

/// The next C-LOOK target.
///
/// Sweeping `Up`: the smallest pending request at or above the head;
/// failing that, the minimum pending request (the wrap). Mirrored for
/// `Down`, wrapping to the maximum pending request.
pub(super) fn choose_next(state: &SimulationState) -> Option<u32> {
    let queue = &state.queue;
    let head = state.head;
    match state.direction {
        Direction::Up => queue.min_at_or_above(head).or_else(|| queue.min()),
        Direction::Down => queue.max_at_or_below(head).or_else(|| queue.max()),
    }
}
