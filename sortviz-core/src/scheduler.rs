//! Virtual-clock delayed-event queue.
//!
//! Time is a `Duration` since session start. Events fire in `(at, seq)` order,
//! so two events scheduled for the same instant fire in the order they were
//! queued. Each event carries the generation it was scheduled under; the
//! controller drops events whose generation is stale.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use crate::step::VisualMutation;

/// A queued mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub at: Duration,
    pub seq: u64,
    pub generation: u64,
    pub action: ScheduledAction,
}

/// What a queued event does when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduledAction {
    /// A compare step: activate now, deactivate after `hold`.
    Highlight { indices: Vec<usize>, hold: Duration },
    /// Apply a mutation as-is.
    Apply(VisualMutation),
}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.at.cmp(&other.at).then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of pending events.
#[derive(Debug, Default)]
pub struct Timeline {
    queue: BinaryHeap<Reverse<ScheduledEvent>>,
    next_seq: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action to fire at `at`.
    pub fn schedule(&mut self, at: Duration, generation: u64, action: ScheduledAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(ScheduledEvent {
            at,
            seq,
            generation,
            action,
        }));
    }

    /// Pop the earliest event whose time is at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<ScheduledEvent> {
        match self.queue.peek() {
            Some(Reverse(event)) if event.at <= now => self.queue.pop().map(|Reverse(e)| e),
            _ => None,
        }
    }

    /// Drop every pending event. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        dropped
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.peek().map(|Reverse(e)| e.at)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
