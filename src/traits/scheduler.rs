//! Scheduler trait abstraction.

use std::fmt;
use std::time::Duration;

/// Opaque handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Host-provided deferred execution.
///
/// `schedule` arms a timer and returns its handle. When the delay elapses the
/// host hands the id to
/// [`DraftController::handle_timer`](crate::controller::DraftController::handle_timer).
/// Ids must be unique for the lifetime of the scheduler.
///
/// `cancel` should stop the timer from firing. A host that cannot guarantee
/// this (the fire may already be in flight) is still correct: the controller
/// ignores ids it is no longer waiting on.
pub trait Scheduler {
    /// Arm a timer that fires after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancel a timer. Unknown or already-fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}
