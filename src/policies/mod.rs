//! Disk-scheduling policies.
//!
//! # Policies
//!
//! - **FCFS**: first come, first served (arrival order)
//! - **SSTF**: shortest seek time first (greedy nearest request)
//! - **SCAN**: elevator sweep, riding to the edge when facing an empty side
//! - **C-SCAN**: circular SCAN, wrapping to the opposite extreme request
//! - **LOOK**: SCAN without the edge trip, reversing at the last request
//! - **C-LOOK**: LOOK with a wrap instead of a reversal
//!
//! Every policy is a pure query over a [`SimulationState`] snapshot:
//! `choose_next` picks a single target cylinder, and `simulate` projects
//! the whole queue to completion without touching the caller's state.
//! The per-step transition ([`advance`]) is shared between the engine's
//! `step()` and the projection loop, so a projection always equals the
//! trajectory of repeated steps from the same state.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts",
//!   Ch. 11.2: Disk Scheduling
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

mod clook;
mod cscan;
mod fcfs;
mod look;
mod scan;
mod sstf;

use serde::{Deserialize, Serialize};

use crate::models::{Direction, SimulationState};

/// The closed set of scheduling policies.
///
/// Each variant carries its selection rule behind exhaustive pattern
/// matching, so adding a policy is a localized, compiler-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchedulingAlgorithm {
    /// First come, first served.
    Fcfs,
    /// Shortest seek time first.
    Sstf,
    /// Elevator sweep with edge travel.
    Scan,
    /// Circular SCAN.
    CScan,
    /// Elevator sweep without edge travel.
    Look,
    /// Circular LOOK.
    CLook,
}

impl SchedulingAlgorithm {
    /// Every policy, in presentation order.
    pub const ALL: [SchedulingAlgorithm; 6] = [
        SchedulingAlgorithm::Fcfs,
        SchedulingAlgorithm::Sstf,
        SchedulingAlgorithm::Scan,
        SchedulingAlgorithm::CScan,
        SchedulingAlgorithm::Look,
        SchedulingAlgorithm::CLook,
    ];

    /// Short policy name (e.g., "SSTF").
    pub fn name(&self) -> &'static str {
        match self {
            SchedulingAlgorithm::Fcfs => "FCFS",
            SchedulingAlgorithm::Sstf => "SSTF",
            SchedulingAlgorithm::Scan => "SCAN",
            SchedulingAlgorithm::CScan => "C-SCAN",
            SchedulingAlgorithm::Look => "LOOK",
            SchedulingAlgorithm::CLook => "C-LOOK",
        }
    }

    /// Policy description.
    pub fn description(&self) -> &'static str {
        match self {
            SchedulingAlgorithm::Fcfs => "First Come, First Served",
            SchedulingAlgorithm::Sstf => "Shortest Seek Time First",
            SchedulingAlgorithm::Scan => "Elevator sweep with edge travel",
            SchedulingAlgorithm::CScan => "Circular SCAN",
            SchedulingAlgorithm::Look => "Elevator sweep without edge travel",
            SchedulingAlgorithm::CLook => "Circular LOOK",
        }
    }

    /// The next target cylinder under this policy, or `None` when the
    /// queue is empty.
    ///
    /// Pure: evaluates over the snapshot without mutating it. SCAN and
    /// C-SCAN may target a physical edge that carries no request.
    pub fn choose_next(&self, state: &SimulationState) -> Option<u32> {
        if state.queue.is_empty() {
            return None;
        }
        match self {
            SchedulingAlgorithm::Fcfs => fcfs::choose_next(state),
            SchedulingAlgorithm::Sstf => sstf::choose_next(state),
            SchedulingAlgorithm::Scan => scan::choose_next(state),
            SchedulingAlgorithm::CScan => cscan::choose_next(state),
            SchedulingAlgorithm::Look => look::choose_next(state),
            SchedulingAlgorithm::CLook => clook::choose_next(state),
        }
    }

    /// Projects servicing the entire pending queue under this policy.
    ///
    /// Works on a scratch copy; the caller's queue is never consumed.
    /// Deterministic: identical inputs yield identical projections.
    pub fn simulate(&self, state: &SimulationState) -> SweepProjection {
        let mut scratch = state.clone();
        scratch.algorithm = *self;

        let mut projection = SweepProjection::default();
        while !scratch.queue.is_empty() {
            let Some(outcome) = advance(&mut scratch) else {
                break;
            };
            projection.total_distance += outcome.distance;
            projection.visit_order.push(outcome.target);
        }
        projection
    }
}

impl std::fmt::Display for SchedulingAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ahead-of-time projection of servicing the whole queue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepProjection {
    /// Sum of absolute head movements over the full run.
    pub total_distance: u64,
    /// Every cylinder the head stops at, in order. Includes SCAN/C-SCAN
    /// edge stops that carry no request, since the consumer animates
    /// the head path.
    pub visit_order: Vec<u32>,
}

/// Result of applying one scheduling step to a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StepOutcome {
    /// Cylinder the head moved to.
    pub target: u32,
    /// Absolute distance traveled.
    pub distance: u64,
    /// Whether a pending request was retired at the target.
    pub serviced: bool,
}

/// Applies one step of the active policy to the state.
///
/// Moves the head to the policy's chosen target and removes the first
/// matching queue entry. Direction updates follow the sign of the move
/// (zero-distance moves keep the old direction), with two per-policy
/// carve-outs:
///
/// - C-SCAN and C-LOOK keep their sweep direction unchanged: the wrap
///   jump travels against the sweep without reversing it, so servicing
///   stays one-directional.
/// - Plain SCAN turns inward on landing exactly on a physical edge,
///   and reverses immediately when a serviced step leaves no request
///   in the current sweep direction, so a subsequent peek already
///   reflects the reversal.
///
/// Returns `None` when the queue is empty.
pub(crate) fn advance(state: &mut SimulationState) -> Option<StepOutcome> {
    let target = state.algorithm.choose_next(state)?;
    let previous = state.head;
    let distance = u64::from(previous.abs_diff(target));

    state.head = target;
    let wraps = matches!(
        state.algorithm,
        SchedulingAlgorithm::CScan | SchedulingAlgorithm::CLook
    );
    if !wraps {
        if let Some(direction) = Direction::of_travel(previous, target) {
            state.direction = direction;
        }
    }

    let serviced = state.queue.remove_first(target);

    if state.algorithm == SchedulingAlgorithm::Scan && state.geometry.cylinders() > 1 {
        if target == 0 {
            state.direction = Direction::Up;
        } else if target == state.geometry.max_cylinder() {
            state.direction = Direction::Down;
        } else if serviced && !state.queue.is_empty() {
            let ahead_exhausted = match state.direction {
                Direction::Up => state.queue.min_at_or_above(target).is_none(),
                Direction::Down => state.queue.max_at_or_below(target).is_none(),
            };
            if ahead_exhausted {
                state.direction = state.direction.reversed();
            }
        }
    }

    Some(StepOutcome {
        target,
        distance,
        serviced,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DiskGeometry;

    fn state_with(
        algorithm: SchedulingAlgorithm,
        head: u32,
        direction: Direction,
        pending: &[u32],
    ) -> SimulationState {
        let geometry = DiskGeometry::new(200).unwrap();
        let mut state = SimulationState::new(geometry, head, algorithm);
        state.direction = direction;
        for &cylinder in pending {
            state.queue.push(cylinder);
        }
        state
    }

    #[test]
    fn test_empty_queue_chooses_nothing() {
        for algorithm in SchedulingAlgorithm::ALL {
            let state = state_with(algorithm, 50, Direction::Up, &[]);
            assert_eq!(algorithm.choose_next(&state), None, "{algorithm}");
        }
    }

    #[test]
    fn test_empty_queue_projects_nothing() {
        for algorithm in SchedulingAlgorithm::ALL {
            let state = state_with(algorithm, 50, Direction::Up, &[]);
            let projection = algorithm.simulate(&state);
            assert_eq!(projection.total_distance, 0, "{algorithm}");
            assert!(projection.visit_order.is_empty(), "{algorithm}");
        }
    }

    #[test]
    fn test_single_cylinder_disk_never_fails() {
        let geometry = DiskGeometry::new(1).unwrap();
        for algorithm in SchedulingAlgorithm::ALL {
            let mut state = SimulationState::new(geometry, 0, algorithm);
            state.queue.push(0);
            assert_eq!(algorithm.choose_next(&state), Some(0), "{algorithm}");

            let projection = algorithm.simulate(&state);
            assert_eq!(projection.total_distance, 0, "{algorithm}");
            assert_eq!(projection.visit_order, vec![0], "{algorithm}");
        }
    }

    #[test]
    fn test_single_pending_request() {
        for algorithm in SchedulingAlgorithm::ALL {
            let state = state_with(algorithm, 50, Direction::Up, &[120]);
            assert_eq!(algorithm.choose_next(&state), Some(120), "{algorithm}");
        }
    }

    #[test]
    fn test_simulate_never_mutates_input() {
        for algorithm in SchedulingAlgorithm::ALL {
            let state = state_with(algorithm, 50, Direction::Up, &[10, 190, 30, 30]);
            let before = state.clone();
            let first = algorithm.simulate(&state);
            let second = algorithm.simulate(&state);
            assert_eq!(state, before, "{algorithm}");
            assert_eq!(first, second, "{algorithm}");
        }
    }

    #[test]
    fn test_simulate_ignores_snapshot_algorithm() {
        // The variant being asked wins over whatever the snapshot says.
        let state = state_with(SchedulingAlgorithm::Fcfs, 50, Direction::Up, &[10, 190, 30]);
        let projection = SchedulingAlgorithm::Sstf.simulate(&state);
        assert_eq!(projection.visit_order, vec![30, 10, 190]);
        assert_eq!(projection.total_distance, 220);
    }

    #[test]
    fn test_advance_retires_one_duplicate_per_step() {
        let mut state = state_with(SchedulingAlgorithm::Fcfs, 50, Direction::Up, &[30, 30]);
        let outcome = advance(&mut state).unwrap();
        assert!(outcome.serviced);
        assert_eq!(state.queue.as_slice(), &[30]);
        let outcome = advance(&mut state).unwrap();
        assert!(outcome.serviced);
        assert_eq!(outcome.distance, 0);
        assert!(state.queue.is_empty());
    }

    #[test]
    fn test_advance_keeps_direction_on_zero_distance_move() {
        let mut state = state_with(SchedulingAlgorithm::Sstf, 30, Direction::Down, &[30]);
        let outcome = advance(&mut state).unwrap();
        assert_eq!(outcome.distance, 0);
        assert_eq!(state.direction, Direction::Down);
    }

    #[test]
    fn test_names_are_distinct() {
        let mut names: Vec<_> = SchedulingAlgorithm::ALL.iter().map(|a| a.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_algorithm_json_round_trip() {
        for algorithm in SchedulingAlgorithm::ALL {
            let json = serde_json::to_string(&algorithm).unwrap();
            let restored: SchedulingAlgorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, algorithm);
        }
    }
}
