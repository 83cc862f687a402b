//! Trailing-edge debouncing.

use std::time::{Duration, Instant};

use crate::logging::targets;
use crate::timer::{TimerId, TimerManager};

/// Collapses a burst of triggers into one firing after a quiet interval.
///
/// Every [`trigger`](Self::trigger) re-arms a one-shot timer. The debouncer
/// fires (once) when [`poll`](Self::poll) sees that `interval` has elapsed
/// since the last trigger.
#[derive(Debug)]
pub struct Debouncer {
    interval: Duration,
    timers: TimerManager,
    pending: Option<TimerId>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            timers: TimerManager::new(),
            pending: None,
        }
    }

    /// The quiet interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Record a trigger at `now`, pushing the firing time out.
    pub fn trigger(&mut self, now: Instant) {
        if let Some(id) = self.pending.take() {
            // Already fired timers are gone from the manager; nothing to stop.
            let _ = self.timers.stop(id);
        }
        self.pending = Some(self.timers.start_one_shot(now, self.interval));
        tracing::trace!(target: targets::DEBOUNCE, interval = ?self.interval, "debounce re-armed");
    }

    /// Returns `true` exactly once per burst, when the quiet interval has
    /// elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };

        let fired = self.timers.process_expired(now).contains(&pending);
        if fired {
            self.pending = None;
            tracing::trace!(target: targets::DEBOUNCE, "debounce fired");
        }
        fired
    }

    /// Whether a trigger is waiting for its quiet interval.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time from `now` until the pending trigger fires, if any.
    pub fn time_until_ready(&mut self, now: Instant) -> Option<Duration> {
        self.pending?;
        self.timers.time_until_next(now)
    }

    /// Forget any pending trigger.
    pub fn cancel(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.timers.stop(id);
        }
    }
}
