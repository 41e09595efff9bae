//! Debouncing of save requests.
//!
//! At most one save timer is outstanding at any time: every request cancels
//! the previous timer and arms a fresh one, so a burst of requests collapses
//! into a single save that runs after the last one has been quiet for the
//! full delay. A zero delay bypasses the scheduler and asks the caller to save
//! right away.
//!
//! Pastes are special: the surface only reflects pasted text after the paste
//! notification has been handled, so the request is pushed to the next
//! scheduling tick with a separate zero-delay timer.

use std::time::Duration;

use crate::traits::{Scheduler, TimerId};

/// What the caller should do after a save request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Debounced {
    /// Delay is zero: run the save pipeline now.
    Immediate,
    /// A timer was armed.
    Scheduled(TimerId),
}

/// What a fired timer means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fired {
    /// The debounce delay elapsed: run the save pipeline.
    Save,
    /// The paste tick elapsed: submit a save request.
    PasteTick,
    /// Not a timer we are waiting on (cancelled or replaced).
    Stale,
}

/// Tracks the outstanding save timer and paste tick.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<TimerId>,
    paste_tick: Option<TimerId>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            paste_tick: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the delay. Applies to the next request; an armed timer keeps
    /// its original deadline.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Replace any armed save timer with a new one.
    pub fn request<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> Debounced {
        self.cancel_save(scheduler);
        if self.delay.is_zero() {
            return Debounced::Immediate;
        }
        let id = scheduler.schedule(self.delay);
        self.pending = Some(id);
        Debounced::Scheduled(id)
    }

    /// Arm the paste tick unless one is already waiting.
    pub fn defer<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> TimerId {
        if let Some(id) = self.paste_tick {
            return id;
        }
        let id = scheduler.schedule(Duration::ZERO);
        self.paste_tick = Some(id);
        id
    }

    /// Classify a fired timer, clearing it if it is ours.
    pub fn fire(&mut self, id: TimerId) -> Fired {
        if self.pending == Some(id) {
            self.pending = None;
            Fired::Save
        } else if self.paste_tick == Some(id) {
            self.paste_tick = None;
            Fired::PasteTick
        } else {
            Fired::Stale
        }
    }

    /// Cancel the armed save timer, if any.
    pub fn cancel_save<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel(id);
        }
    }

    /// Cancel the save timer and the paste tick.
    pub fn cancel_all<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.cancel_save(scheduler);
        if let Some(id) = self.paste_tick.take() {
            scheduler.cancel(id);
        }
    }

    /// True while a save timer or paste tick is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some() || self.paste_tick.is_some()
    }
}
