//! Scheduled tasks on a simulated timeline.
//!
//! Times are `Duration`s since the owning clock was created. Nothing here
//! sleeps: the owner asks for the next deadline and fires the task when its
//! own notion of "now" reaches it. Cancelling is dropping the task, so owners
//! keep them in an `Option` and `take()` it.

use std::time::Duration;

/// A task that fires every `period`, starting one period after it was
/// scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next: Duration,
}

impl Interval {
    pub fn new(now: Duration, period: Duration) -> Self {
        Self {
            period,
            next: now + period,
        }
    }

    pub fn deadline(&self) -> Duration {
        self.next
    }

    /// Fires the interval if it is due at `now` and schedules the next run.
    pub fn poll(&mut self, now: Duration) -> bool {
        if self.next <= now {
            self.next += self.period;
            true
        } else {
            false
        }
    }
}

/// A task that fires exactly once at its deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OneShot {
    deadline: Duration,
}

impl OneShot {
    pub fn new(now: Duration, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
        }
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    pub fn is_due(&self, now: Duration) -> bool {
        self.deadline <= now
    }
}
