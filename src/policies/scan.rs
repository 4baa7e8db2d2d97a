//! SCAN (elevator) scheduling.
//!
//! Services requests in the current sweep direction and reverses as
//! soon as a serviced step leaves nothing ahead of the head. When the
//! sweep already faces an empty side at choice time (right after
//! construction, a reset, or a direction-stale enqueue), the head
//! travels all the way to the physical edge first, accumulating seek
//! distance without retiring a request. Both reversals, the serviced
//! one and the edge landing, are applied by the step transition in
//! [`super::advance`].
//!
//! # Reference
//! Denning (1967), "Effects of Scheduling on File Memory Operations"

use crate::models::{Direction, SimulationState};

/// The next SCAN target.
///
/// Sweeping `Up`: the smallest pending request at or above the head;
/// failing that, the high edge (unless already there); failing that,
/// the largest pending request below the head. Mirrored for `Down`.
pub(super) fn choose_next(state: &SimulationState) -> Option<u32> {
    let queue = &state.queue;
    let head = state.head;
    match state.direction {
        Direction::Up => queue.min_at_or_above(head).or_else(|| {
            if head != state.geometry.max_cylinder() {
                Some(state.geometry.max_cylinder())
            } else {
                queue.max_at_or_below(head)
            }
        }),
        Direction::Down => queue.max_at_or_below(head).or_else(|| {
            if head != 0 {
                Some(0)
            } else {
                queue.min_at_or_above(head)
            }
        }),
    }
}
