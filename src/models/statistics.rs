//! Cumulative seek statistics.
//!
//! Tracks total head travel and the number of serviced requests across
//! a simulation run. Head travel accumulates on every step, including
//! SCAN/C-SCAN edge trips that service nothing; the served counter only
//! moves when a pending request is actually retired.

use serde::{Deserialize, Serialize};

/// Cumulative simulation statistics.
///
/// `total_seek_distance` is monotonically non-decreasing across steps;
/// `requests_served` increments by exactly one per serviced request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekStatistics {
    /// Sum of absolute head movements, in cylinders.
    pub total_seek_distance: u64,
    /// Number of pending requests retired so far.
    pub requests_served: u64,
}

impl SeekStatistics {
    /// Records head travel for one step.
    pub fn record_travel(&mut self, distance: u64) {
        self.total_seek_distance += distance;
    }

    /// Records one serviced request.
    pub fn record_serviced(&mut self) {
        self.requests_served += 1;
    }

    /// Mean seek distance per serviced request.
    ///
    /// `0.0` when nothing has been serviced yet.
    pub fn average_seek(&self) -> f64 {
        if self.requests_served == 0 {
            return 0.0;
        }
        self.total_seek_distance as f64 / self.requests_served as f64
    }

    /// Zeroes both accumulators.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
