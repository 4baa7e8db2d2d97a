//! Pending-request queue.
//!
//! An ordered multiset of cylinder indices awaiting service. Duplicates
//! are permitted and insertion order is significant: FCFS services the
//! queue front-to-back, and the other policies break ties by arrival
//! order. Removal always drops the *first* matching occurrence so that
//! duplicate requests retire in arrival order under every policy.

use serde::{Deserialize, Serialize};

/// Ordered queue of pending cylinder requests.
///
/// The engine is responsible for keeping every element inside the disk
/// range; the queue itself is range-agnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestQueue {
    requests: Vec<u32>,
}

impl RequestQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a request, preserving arrival order.
    pub fn push(&mut self, cylinder: u32) {
        self.requests.push(cylinder);
    }

    /// Removes all pending requests.
    pub fn clear(&mut self) {
        self.requests.clear();
    }

    /// Number of pending requests (duplicates counted).
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether no requests are pending.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// The oldest pending request (FCFS order).
    pub fn front(&self) -> Option<u32> {
        self.requests.first().copied()
    }

    /// Pending requests in arrival order.
    pub fn as_slice(&self) -> &[u32] {
        &self.requests
    }

    /// Iterates pending requests in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.requests.iter().copied()
    }

    /// Whether the cylinder has at least one pending request.
    pub fn contains(&self, cylinder: u32) -> bool {
        self.requests.contains(&cylinder)
    }

    /// Smallest pending request at or above the cylinder.
    pub fn min_at_or_above(&self, cylinder: u32) -> Option<u32> {
        self.iter().filter(|&v| v >= cylinder).min()
    }

    /// Largest pending request at or below the cylinder.
    pub fn max_at_or_below(&self, cylinder: u32) -> Option<u32> {
        self.iter().filter(|&v| v <= cylinder).max()
    }

    /// Smallest pending request.
    pub fn min(&self) -> Option<u32> {
        self.iter().min()
    }

    /// Largest pending request.
    pub fn max(&self) -> Option<u32> {
        self.iter().max()
    }

    /// Pending request nearest to the cylinder.
    ///
    /// Equal-distance candidates resolve to the first encountered in
    /// arrival order (strict `<` while scanning front to back), the
    /// stable tie-break SSTF relies on.
    pub fn nearest_to(&self, cylinder: u32) -> Option<u32> {
        let mut best = None;
        let mut best_distance = u32::MAX;
        for v in self.iter() {
            let distance = v.abs_diff(cylinder);
            if distance < best_distance {
                best = Some(v);
                best_distance = distance;
            }
        }
        best
    }

    /// Removes the first occurrence of the cylinder, if any.
    ///
    /// Returns whether a request was removed. Exactly one occurrence is
    /// dropped per call, so duplicates retire one at a time.
    pub fn remove_first(&mut self, cylinder: u32) -> bool {
        match self.requests.iter().position(|&v| v == cylinder) {
            Some(index) => {
                self.requests.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drops every request at or above the limit, preserving the order
    /// of the survivors. Used when the disk shrinks.
    pub fn retain_below(&mut self, limit: u32) {
        self.requests.retain(|&v| v < limit);
    }
}

impl From<Vec<u32>> for RequestQueue {
    fn from(requests: Vec<u32>) -> Self {
        Self { requests }
    }
}
