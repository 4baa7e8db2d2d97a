//! Shortest Seek Time First.
//!
//! Greedily services the pending request nearest to the head. Minimizes
//! per-step seek at the cost of possible starvation of far-away
//! requests. Equal-distance candidates resolve to the earliest-arrived
//! entry, keeping the selection stable and deterministic.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 11.2.2

use crate::models::SimulationState;

/// The pending request minimizing `|value - head|`, arrival order
/// breaking ties.
pub(super) fn choose_next(state: &SimulationState) -> Option<u32> {
    state.queue.nearest_to(state.head)
}

#[cfg(test)]
mod tests {
    use crate::models::{DiskGeometry, SimulationState};
    use crate::policies::SchedulingAlgorithm;

    fn make_state(head: u32, pending: &[u32]) -> SimulationState {
        let geometry = DiskGeometry::new(200).unwrap();
        let mut state = SimulationState::new(geometry, head, SchedulingAlgorithm::Sstf);
        for &cylinder in pending {
            state.queue.push(cylinder);
        }
        state
    }

    #[test]
    fn test_picks_nearest() {
        let state = make_state(50, &[10, 190, 30]);
        assert_eq!(SchedulingAlgorithm::Sstf.choose_next(&state), Some(30));
    }

    #[test]
    fn test_head_on_pending_value_is_nearest() {
        let state = make_state(30, &[10, 190, 30]);
        assert_eq!(SchedulingAlgorithm::Sstf.choose_next(&state), Some(30));
    }

    #[test]
    fn test_tie_breaks_by_arrival_order() {
        // 40 and 60 are equidistant from 50; 60 arrived first here.
        let state = make_state(50, &[60, 40]);
        assert_eq!(SchedulingAlgorithm::Sstf.choose_next(&state), Some(60));
    }

    #[test]
    fn test_simulate_greedy_walk() {
        let state = make_state(50, &[10, 190, 30]);
        let projection = SchedulingAlgorithm::Sstf.simulate(&state);
        // Nearest to 50 is 30, then 10, leaving 190.
        assert_eq!(projection.visit_order, vec![30, 10, 190]);
        assert_eq!(projection.total_distance, 220);
    }

    #[test]
    fn test_simulate_textbook_workload() {
        let state = make_state(53, &[98, 183, 37, 122, 14, 124, 65, 67]);
        let projection = SchedulingAlgorithm::Sstf.simulate(&state);
        assert_eq!(
            projection.visit_order,
            vec![65, 67, 37, 14, 98, 122, 124, 183]
        );
        assert_eq!(projection.total_distance, 236);
    }
}
