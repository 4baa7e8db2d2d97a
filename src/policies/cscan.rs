//! C-SCAN (circular SCAN) scheduling.
//!
//! Sweeps like SCAN, including the trip to the physical edge, but at
//! the edge it wraps to the opposite extreme pending request instead of
//! reversing into a servicing sweep back. The wrap jump is charged as
//! ordinary seek distance — summed as a plain absolute difference like
//! any other move — which inflates totals relative to cost models that
//! treat the return as free. That accounting is deliberate and matches
//! the projections consumers animate.
//!
//! The sweep direction is preserved across the wrap ([`super::advance`]
//! never updates it for the circular policies), so servicing stays
//! one-directional: after the jump the head keeps sweeping the same way
//! it did before.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2.4

use crate::models::{Direction, SimulationState};

/// The next C-SCAN target.
///
/// Sweeping `Up`: the smallest pending request at or above the head;
/// failing that, the high edge (unless already there); at the edge, the
/// minimum pending request (the wrap). Mirrored for `Down`, wrapping to
/// the maximum pending request from cylinder `0`.
pub(super) fn choose_next(state: &SimulationState) -> Option<u32> {
    let queue = &state.queue;
    let head = state.head;
    match state.direction {
        Direction::Up => queue.min_at_or_above(head).or_else(|| {
            if head != state.geometry.max_cylinder() {
                Some(state.geometry.max_cylinder())
            } else {
                queue.min()
            }
        }),
        Direction::Down => queue.max_at_or_below(head).or_else(|| {
            if head != 0 {
                Some(0)
            } else {
                queue.max()
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Direction, DiskGeometry, SimulationState};
    use crate::policies::{advance, SchedulingAlgorithm};

    fn make_state(head: u32, direction: Direction, pending: &[u32]) -> SimulationState {
        let geometry = DiskGeometry::new(200).unwrap();
        let mut state = SimulationState::new(geometry, head, SchedulingAlgorithm::CScan);
        state.direction = direction;
        for &cylinder in pending {
            state.queue.push(cylinder);
        }
        state
    }

    #[test]
    fn test_services_ahead_like_scan() {
        let state = make_state(50, Direction::Up, &[10, 190]);
        assert_eq!(SchedulingAlgorithm::CScan.choose_next(&state), Some(190));
    }

    #[test]
    fn test_travels_to_edge_when_nothing_ahead() {
        let state = make_state(50, Direction::Up, &[10]);
        assert_eq!(SchedulingAlgorithm::CScan.choose_next(&state), Some(199));
    }

    #[test]
    fn test_wraps_to_minimum_at_high_edge() {
        let state = make_state(199, Direction::Up, &[10, 30]);
        assert_eq!(SchedulingAlgorithm::CScan.choose_next(&state), Some(10));
    }

    #[test]
    fn test_wraps_to_maximum_at_low_edge() {
        let state = make_state(0, Direction::Down, &[10, 30]);
        assert_eq!(SchedulingAlgorithm::CScan.choose_next(&state), Some(30));
    }

    #[test]
    fn test_edge_landing_keeps_direction() {
        // Edge forcing is scoped to plain SCAN; C-SCAN keeps its sweep
        // direction and wraps on the following choice instead.
        let mut state = make_state(50, Direction::Up, &[10]);
        let outcome = advance(&mut state).unwrap();
        assert_eq!(outcome.target, 199);
        assert!(!outcome.serviced);
        assert_eq!(state.direction, Direction::Up);
        assert_eq!(SchedulingAlgorithm::CScan.choose_next(&state), Some(10));
    }

    #[test]
    fn test_simulate_charges_wrap_as_plain_distance() {
        let state = make_state(50, Direction::Up, &[10, 190]);
        let projection = SchedulingAlgorithm::CScan.simulate(&state);
        assert_eq!(projection.visit_order, vec![190, 199, 10]);
        // |50-190| + |190-199| + |199-10|: the wrap leg costs 189.
        assert_eq!(projection.total_distance, 338);
    }

    #[test]
    fn test_simulate_multi_request_trajectory() {
        // The wrap does not reverse the sweep: after jumping to 10 the
        // head keeps climbing, so 30 is serviced on the way up and
        // cylinder 0 is never visited.
        let state = make_state(50, Direction::Up, &[10, 30, 190]);
        let projection = SchedulingAlgorithm::CScan.simulate(&state);
        assert_eq!(projection.visit_order, vec![190, 199, 10, 30]);
        // 140 + 9 + 189 + 20
        assert_eq!(projection.total_distance, 358);
    }

    #[test]
    fn test_simulate_services_one_directionally_across_wrap() {
        let state = make_state(150, Direction::Up, &[190, 10, 20, 100]);
        let projection = SchedulingAlgorithm::CScan.simulate(&state);
        // Only the edge stop at 199 interrupts the ascending service
        // order: 190, then (after the wrap) 10, 20, 100.
        assert_eq!(projection.visit_order, vec![190, 199, 10, 20, 100]);
        // 40 + 9 + 189 + 10 + 80
        assert_eq!(projection.total_distance, 328);
    }

    #[test]
    fn test_simulate_textbook_workload() {
        let state = make_state(53, Direction::Up, &[98, 183, 37, 122, 14, 124, 65, 67]);
        let projection = SchedulingAlgorithm::CScan.simulate(&state);
        assert_eq!(
            projection.visit_order,
            vec![65, 67, 98, 122, 124, 183, 199, 14, 37]
        );
        // 146 up to the edge, 185 wrap, 23 back up to 37.
        assert_eq!(projection.total_distance, 354);
    }
}
