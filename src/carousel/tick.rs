//! Cancellable one-shot deadline used for autoplay.
//!
//! A [`ScheduledTick`] is either idle or armed with a due instant. It never
//! fires by itself: the owner polls [`ScheduledTick::fire`] with the current
//! time. After [`ScheduledTick::dispose`] the tick is dead for good and every
//! further `arm` is ignored, so a torn-down carousel cannot be advanced by a
//! late poll.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTick {
    interval: Duration,
    due: Option<Instant>,
    alive: bool,
}

impl ScheduledTick {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            due: None,
            alive: true,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedule the next fire one interval after `now`, replacing any
    /// pending deadline.
    pub fn arm(&mut self, now: Instant) {
        if self.alive {
            self.due = Some(now + self.interval);
        }
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.due = None;
    }

    /// Cancel and refuse all future arming.
    pub fn dispose(&mut self) {
        self.due = None;
        self.alive = false;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    /// Time left until the deadline; zero once it has passed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.due.map(|due| due.saturating_duration_since(now))
    }

    /// Consume the deadline if it has been reached. Fires at most once per arm.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
