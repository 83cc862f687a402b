//! One-shot timer queue.
//!
//! Timers are driven by the caller: every operation that depends on time
//! takes `now` explicitly, so the queue works the same against the system
//! clock and a [`ManualClock`](crate::ManualClock).

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use slotmap::{new_key_type, SlotMap};

use crate::error::{Result, TimerError};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Manages pending one-shot timers.
#[derive(Debug, Default)]
pub struct TimerManager {
    /// Deadlines of live timers. Stopped timers are removed here and their
    /// queue entries are skipped lazily.
    timers: SlotMap<TimerId, Instant>,
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerManager {
    /// Create an empty timer manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a one-shot timer that fires `duration` after `now`.
    pub fn start_one_shot(&mut self, now: Instant, duration: Duration) -> TimerId {
        let fire_time = now + duration;
        let id = self.timers.insert(fire_time);
        self.queue.push(TimerQueueEntry { id, fire_time });
        tracing::trace!(target: targets::TIMER, ?id, ?duration, "timer started");
        id
    }

    /// Stop and remove a timer.
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        match self.timers.remove(id) {
            Some(_) => {
                tracing::trace!(target: targets::TIMER, ?id, "timer stopped");
                Ok(())
            }
            None => Err(TimerError::InvalidTimerId),
        }
    }

    /// Check if a timer is still pending.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Get the duration from `now` until the next timer fires.
    ///
    /// Returns `None` if there are no pending timers.
    pub fn time_until_next(&mut self, now: Instant) -> Option<Duration> {
        self.discard_stale();
        self.queue
            .peek()
            .map(|entry| entry.fire_time.saturating_duration_since(now))
    }

    /// Fire every timer whose deadline is at or before `now`.
    ///
    /// Returns the fired timer IDs in deadline order. Fired timers are removed.
    #[tracing::instrument(skip(self), target = "horizon_navbar_core::timer", level = "trace")]
    pub fn process_expired(&mut self, now: Instant) -> Vec<TimerId> {
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.peek().copied() {
            if entry.fire_time > now {
                break;
            }
            self.queue.pop();

            // Stopped timers leave their queue entry behind.
            if self.timers.remove(entry.id).is_some() {
                tracing::trace!(target: targets::TIMER, id = ?entry.id, "timer fired");
                fired.push(entry.id);
            }
        }

        fired
    }

    /// Get the number of pending timers.
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    fn discard_stale(&mut self) {
        while let Some(entry) = self.queue.peek() {
            if self.timers.contains_key(entry.id) {
                break;
            }
            self.queue.pop();
        }
    }
}
