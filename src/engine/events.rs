//! Change-notification subscriptions.
//!
//! An explicit callback registry owned by the engine. Consumers
//! subscribe for "state changed" and "statistics changed" signals and
//! receive the updated snapshot by reference; handlers run in
//! registration order. Single-threaded by design: every mutating engine
//! operation takes `&mut self`, so a handler cannot re-enter the engine
//! with a mutating call while notifications are being delivered.

use std::fmt;

use crate::models::{SeekStatistics, SimulationState};

/// Handle identifying one subscription, for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type StateHandler = Box<dyn FnMut(&SimulationState)>;
type StatisticsHandler = Box<dyn FnMut(&SeekStatistics)>;

/// Registry of change-notification handlers.
#[derive(Default)]
pub(crate) struct SubscriberRegistry {
    next_id: u64,
    state_handlers: Vec<(SubscriptionId, StateHandler)>,
    statistics_handlers: Vec<(SubscriptionId, StatisticsHandler)>,
}

impl SubscriberRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn subscribe_state(&mut self, handler: StateHandler) -> SubscriptionId {
        let id = self.allocate_id();
        self.state_handlers.push((id, handler));
        id
    }

    pub(crate) fn subscribe_statistics(&mut self, handler: StatisticsHandler) -> SubscriptionId {
        let id = self.allocate_id();
        self.statistics_handlers.push((id, handler));
        id
    }

    /// Removes the subscription with the given handle.
    ///
    /// Returns whether anything was removed.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let state_count = self.state_handlers.len();
        self.state_handlers.retain(|(handle, _)| *handle != id);
        if self.state_handlers.len() != state_count {
            return true;
        }
        let stats_count = self.statistics_handlers.len();
        self.statistics_handlers.retain(|(handle, _)| *handle != id);
        self.statistics_handlers.len() != stats_count
    }

    pub(crate) fn emit_state(&mut self, state: &SimulationState) {
        for (_, handler) in &mut self.state_handlers {
            handler(state);
        }
    }

    pub(crate) fn emit_statistics(&mut self, statistics: &SeekStatistics) {
        for (_, handler) in &mut self.statistics_handlers {
            handler(statistics);
        }
    }

    /// Drops every subscription. Used at engine shutdown.
    pub(crate) fn clear(&mut self) {
        self.state_handlers.clear();
        self.statistics_handlers.clear();
    }
}

impl fmt::Debug for SubscriberRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberRegistry")
            .field("state_handlers", &self.state_handlers.len())
            .field("statistics_handlers", &self.statistics_handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DiskGeometry, SimulationState};
    use crate::policies::SchedulingAlgorithm;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample_state() -> SimulationState {
        let geometry = DiskGeometry::new(100).unwrap();
        SimulationState::new(geometry, 7, SchedulingAlgorithm::Fcfs)
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let mut registry = SubscriberRegistry::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&log);
        registry.subscribe_state(Box::new(move |_| first.borrow_mut().push("first")));
        let second = Rc::clone(&log);
        registry.subscribe_state(Box::new(move |_| second.borrow_mut().push("second")));

        registry.emit_state(&sample_state());
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut registry = SubscriberRegistry::new();
        let calls = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        let id = registry.subscribe_state(Box::new(move |_| *counter.borrow_mut() += 1));

        registry.emit_state(&sample_state());
        assert!(registry.unsubscribe(id));
        registry.emit_state(&sample_state());
        assert_eq!(*calls.borrow(), 1);
        // Second removal is a no-op.
        assert!(!registry.unsubscribe(id));
    }

    #[test]
    fn test_ids_are_unique_across_channels() {
        let mut registry = SubscriberRegistry::new();
        let a = registry.subscribe_state(Box::new(|_| {}));
        let b = registry.subscribe_statistics(Box::new(|_| {}));
        assert_ne!(a, b);
        assert!(registry.unsubscribe(b));
        assert!(registry.unsubscribe(a));
    }

    #[test]
    fn test_statistics_channel_receives_snapshot() {
        let mut registry = SubscriberRegistry::new();
        let seen = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&seen);
        registry.subscribe_statistics(Box::new(move |stats| {
            *sink.borrow_mut() = Some(*stats);
        }));

        let mut statistics = SeekStatistics::default();
        statistics.record_travel(40);
        statistics.record_serviced();
        registry.emit_statistics(&statistics);
        assert_eq!(*seen.borrow(), Some(statistics));
    }
}
