//! Virtual-clock scheduler for testing.
//!
//! Time only moves when the test calls [`ManualScheduler::advance`], which
//! returns the timers that came due so the test can hand them to the
//! controller.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{Scheduler, TimerId};

#[derive(Debug, Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    /// Armed timers keyed by id, valued by deadline
    armed: BTreeMap<TimerId, Duration>,
    scheduled: usize,
    cancelled: usize,
}

/// Scheduler driven by a manually advanced clock.
///
/// Clones share the same clock, so a test can keep one handle while the
/// controller owns another.
///
/// # Example
///
/// ```ignore
/// use draftkeeper::adapters::mock::ManualScheduler;
///
/// let clock = ManualScheduler::new();
/// let mut controller = DraftController::new(field, clock.clone(), options)?;
///
/// for id in clock.advance(Duration::from_secs(3)) {
///     controller.handle_timer(id);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ClockState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward and return the timers that came due, earliest
    /// deadline first.
    pub fn advance(&self, by: Duration) -> Vec<TimerId> {
        let mut state = self.state.lock().unwrap();
        state.now += by;
        let now = state.now;

        let mut due: Vec<(Duration, TimerId)> = state
            .armed
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*deadline, *id))
            .collect();
        due.sort();

        for (_, id) in &due {
            state.armed.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }

    /// Current virtual time since creation.
    pub fn now(&self) -> Duration {
        self.state.lock().unwrap().now
    }

    /// Number of timers armed and not yet fired or cancelled.
    pub fn armed_count(&self) -> usize {
        self.state.lock().unwrap().armed.len()
    }

    /// Total number of timers ever scheduled.
    pub fn scheduled_count(&self) -> usize {
        self.state.lock().unwrap().scheduled
    }

    /// Total number of timers cancelled before firing.
    pub fn cancelled_count(&self) -> usize {
        self.state.lock().unwrap().cancelled
    }

    /// Deadline of the earliest armed timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.state.lock().unwrap().armed.values().min().copied()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        state.scheduled += 1;
        let id = TimerId::new(state.next_id);
        let deadline = state.now + delay;
        state.armed.insert(id, deadline);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        let mut state = self.state.lock().unwrap();
        if state.armed.remove(&id).is_some() {
            state.cancelled += 1;
        }
    }
}
