//! Scheduler backed by tokio timers.
//!
//! Each scheduled timer is a spawned task that sleeps for the delay and then
//! posts [`DraftMessage::TimerFired`] on the driver's channel. Cancelling
//! aborts the task. If the abort loses the race and the message is already
//! queued, the controller discards it as stale.
//!
//! Must be used from within a tokio runtime.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::driver::DraftMessage;
use crate::traits::{Scheduler, TimerId};

/// Timer source for controllers run by [`crate::driver::run`].
#[derive(Debug)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<DraftMessage>,
    next_id: u64,
    tasks: HashMap<TimerId, JoinHandle<()>>,
}

impl TokioScheduler {
    /// Create a scheduler that reports fired timers on `tx`.
    pub fn new(tx: mpsc::UnboundedSender<DraftMessage>) -> Self {
        Self {
            tx,
            next_id: 0,
            tasks: HashMap::new(),
        }
    }

    /// Number of timer tasks that have not finished yet.
    pub fn live_timers(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.tasks.retain(|_, task| !task.is_finished());

        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the driver has shut down
            let _ = tx.send(DraftMessage::TimerFired(id));
        });
        self.tasks.insert(id, task);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
