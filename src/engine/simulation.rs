//! The simulation engine.
//!
//! Orchestrates state and statistics, delegates target selection to the
//! active policy, applies exactly one step's mutation per call, and
//! emits change notifications for a presentation layer to react to.

use std::fmt;

use super::events::{SubscriberRegistry, SubscriptionId};
use crate::error::SimulationError;
use crate::models::{Direction, DiskGeometry, SeekStatistics, SimulationState};
use crate::policies::{advance, SchedulingAlgorithm, SweepProjection};

/// Step-wise disk-head scheduling simulator.
///
/// The engine exclusively owns its [`SimulationState`] and
/// [`SeekStatistics`]; consumers read them as snapshots and subscribe
/// to change notifications. All operations are synchronous and bounded
/// by the queue length.
///
/// # Example
///
/// ```
/// use seeksim::engine::SimulationEngine;
/// use seeksim::policies::SchedulingAlgorithm;
///
/// let mut engine = SimulationEngine::new(200, 50, SchedulingAlgorithm::Sstf)?;
/// engine.enqueue_all([10, 190, 30])?;
/// while engine.step()? {}
/// assert_eq!(engine.statistics()?.total_seek_distance, 220);
/// # Ok::<(), seeksim::error::SimulationError>(())
/// ```
///
/// # Lifecycle
///
/// State and statistics live for the engine's lifetime. [`reset`]
/// returns them to construction defaults; [`shutdown`] tears the engine
/// down, after which every operation fails with
/// [`SimulationError::Disposed`] and performs no partial mutation.
///
/// [`reset`]: SimulationEngine::reset
/// [`shutdown`]: SimulationEngine::shutdown
pub struct SimulationEngine {
    state: SimulationState,
    statistics: SeekStatistics,
    subscribers: SubscriberRegistry,
    disposed: bool,
}

impl SimulationEngine {
    /// Creates an engine over a disk with the given cylinder count.
    ///
    /// `initial_head` is clamped into `[0, cylinders - 1]`. Fails with
    /// [`SimulationError::InvalidDiskSize`] when `cylinders` is zero.
    pub fn new(
        cylinders: u32,
        initial_head: u32,
        algorithm: SchedulingAlgorithm,
    ) -> Result<Self, SimulationError> {
        let geometry = DiskGeometry::new(cylinders)?;
        Ok(Self {
            state: SimulationState::new(geometry, initial_head, algorithm),
            statistics: SeekStatistics::default(),
            subscribers: SubscriberRegistry::new(),
            disposed: false,
        })
    }

    fn live(&self) -> Result<(), SimulationError> {
        if self.disposed {
            return Err(SimulationError::Disposed);
        }
        Ok(())
    }

    /// Appends a request to the pending queue.
    ///
    /// Out-of-range cylinders are silently ignored — no mutation, no
    /// error, no notification. Callers needing rejection feedback must
    /// validate beforehand.
    pub fn enqueue(&mut self, cylinder: u32) -> Result<(), SimulationError> {
        self.live()?;
        if self.state.geometry.contains(cylinder) {
            self.state.queue.push(cylinder);
            self.subscribers.emit_state(&self.state);
        }
        Ok(())
    }

    /// Enqueues each cylinder in iteration order.
    pub fn enqueue_all<I>(&mut self, cylinders: I) -> Result<(), SimulationError>
    where
        I: IntoIterator<Item = u32>,
    {
        self.live()?;
        for cylinder in cylinders {
            self.enqueue(cylinder)?;
        }
        Ok(())
    }

    /// Empties the pending queue.
    pub fn clear_requests(&mut self) -> Result<(), SimulationError> {
        self.live()?;
        self.state.queue.clear();
        self.subscribers.emit_state(&self.state);
        Ok(())
    }

    /// Services one scheduling step.
    ///
    /// Returns `Ok(false)` with no mutation and no notification when
    /// the queue is empty. Otherwise moves the head to the active
    /// policy's target, accumulates the seek distance, updates the
    /// sweep direction, and removes the first matching queue entry.
    /// "Statistics changed" fires only when a request was actually
    /// retired (SCAN/C-SCAN edge trips travel without servicing);
    /// "state changed" always fires. Returns whether a request was
    /// retired.
    pub fn step(&mut self) -> Result<bool, SimulationError> {
        self.live()?;
        if self.state.queue.is_empty() {
            return Ok(false);
        }
        let Some(outcome) = advance(&mut self.state) else {
            return Ok(false);
        };

        self.statistics.record_travel(outcome.distance);
        if outcome.serviced {
            self.statistics.record_serviced();
            self.subscribers.emit_statistics(&self.statistics);
        }
        self.subscribers.emit_state(&self.state);
        Ok(outcome.serviced)
    }

    /// Returns the engine to construction defaults.
    ///
    /// Clears the queue, zeroes the statistics, moves the head to the
    /// clamped override (or cylinder `0`), and points the direction
    /// `Up`. Fires both change notifications.
    pub fn reset(&mut self, head: Option<u32>) -> Result<(), SimulationError> {
        self.live()?;
        self.state.queue.clear();
        self.statistics.reset();
        self.state.head = self.state.geometry.clamp(head.unwrap_or(0));
        self.state.direction = Direction::Up;
        self.subscribers.emit_statistics(&self.statistics);
        self.subscribers.emit_state(&self.state);
        Ok(())
    }

    /// Swaps the active policy without touching queue or head.
    ///
    /// The very next [`step`](SimulationEngine::step) obeys the new
    /// policy.
    pub fn set_algorithm(&mut self, algorithm: SchedulingAlgorithm) -> Result<(), SimulationError> {
        self.live()?;
        self.state.algorithm = algorithm;
        self.subscribers.emit_state(&self.state);
        Ok(())
    }

    /// Changes the disk size.
    ///
    /// Queued requests outside the new range are silently dropped and
    /// the head is clamped into it. Fails with
    /// [`SimulationError::InvalidDiskSize`] when `cylinders` is zero,
    /// leaving the state unchanged.
    pub fn set_disk_size(&mut self, cylinders: u32) -> Result<(), SimulationError> {
        self.live()?;
        let geometry = DiskGeometry::new(cylinders)?;
        self.state.queue.retain_below(cylinders);
        self.state.head = geometry.clamp(self.state.head);
        self.state.geometry = geometry;
        self.subscribers.emit_state(&self.state);
        Ok(())
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> Result<&SimulationState, SimulationError> {
        self.live()?;
        Ok(&self.state)
    }

    /// Read-only view of the current statistics.
    pub fn statistics(&self) -> Result<&SeekStatistics, SimulationError> {
        self.live()?;
        Ok(&self.statistics)
    }

    /// Non-mutating peek at the active policy's next target.
    ///
    /// `None` when the queue is empty.
    pub fn next_request(&self) -> Result<Option<u32>, SimulationError> {
        self.live()?;
        Ok(self.state.algorithm.choose_next(&self.state))
    }

    /// Full projection of servicing the current queue to completion.
    ///
    /// Runs on a scratch copy; the real queue is untouched. Intended
    /// for previews and path animation.
    pub fn projection(&self) -> Result<SweepProjection, SimulationError> {
        self.live()?;
        Ok(self.state.algorithm.simulate(&self.state))
    }

    /// Subscribes to "state changed" notifications.
    pub fn on_state_changed<F>(&mut self, handler: F) -> Result<SubscriptionId, SimulationError>
    where
        F: FnMut(&SimulationState) + 'static,
    {
        self.live()?;
        Ok(self.subscribers.subscribe_state(Box::new(handler)))
    }

    /// Subscribes to "statistics changed" notifications.
    pub fn on_statistics_changed<F>(
        &mut self,
        handler: F,
    ) -> Result<SubscriptionId, SimulationError>
    where
        F: FnMut(&SeekStatistics) + 'static,
    {
        self.live()?;
        Ok(self.subscribers.subscribe_statistics(Box::new(handler)))
    }

    /// Removes a subscription; returns whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Result<bool, SimulationError> {
        self.live()?;
        Ok(self.subscribers.unsubscribe(id))
    }

    /// Tears the engine down.
    ///
    /// Drops every subscription; every subsequent operation fails with
    /// [`SimulationError::Disposed`]. Idempotent.
    pub fn shutdown(&mut self) {
        self.subscribers.clear();
        self.disposed = true;
    }
}

impl fmt::Debug for SimulationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulationEngine")
            .field("state", &self.state)
            .field("statistics", &self.statistics)
            .field("subscribers", &self.subscribers)
            .field("disposed", &self.disposed)
            .finish()
    }
}
