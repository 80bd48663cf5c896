//! Trailing-edge debouncer driven by an external clock.
//!
//! Every `trigger` pushes the deadline out to `now + wait`; `poll` reports the
//! deadline once it has passed, then disarms.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Duration>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Record an event, cancelling any pending deadline and arming a new one.
    pub fn trigger(&mut self, now: Duration) {
        self.deadline = Some(now + self.wait);
    }

    /// Returns true exactly once per burst, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}
