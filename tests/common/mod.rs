//! Common test utilities for integration tests.
//!
//! Builds controllers wired to the deterministic mocks and records every
//! value passed to the save callback.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use draftkeeper::adapters::mock::{ManualScheduler, TextField};
use draftkeeper::config::DraftOptions;
use draftkeeper::controller::DraftController;

pub type TestController = DraftController<TextField, ManualScheduler>;

/// A controller plus handles to its surface, clock and callback log.
pub struct Harness {
    pub field: TextField,
    pub clock: ManualScheduler,
    pub controller: TestController,
    pub saved: Arc<Mutex<Vec<String>>>,
}

impl Harness {
    /// Build a started controller over a field holding `initial`.
    pub fn new(initial: &str, options: DraftOptions) -> Self {
        let mut harness = Self::stopped(initial, options);
        harness.controller.start().unwrap();
        harness
    }

    /// Build a controller that has not been started.
    pub fn stopped(initial: &str, options: DraftOptions) -> Self {
        let field = TextField::new(initial);
        let clock = ManualScheduler::new();
        let saved = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&saved);
        let controller = DraftController::new(field.clone(), clock.clone(), options)
            .unwrap()
            .with_on_save(move |value, _| {
                sink.lock().unwrap().push(value.to_string());
                Ok(())
            });
        Self {
            field,
            clock,
            controller,
            saved,
        }
    }

    /// Type `text` into the field and deliver the notification, if subscribed.
    pub fn type_text(&mut self, text: &str) {
        if let Some(event) = self.field.type_text(text) {
            self.controller.handle_event(event);
        }
    }

    /// Paste `text` into the field and deliver the notification, if subscribed.
    pub fn paste(&mut self, text: &str) {
        if let Some(event) = self.field.paste(text) {
            self.controller.handle_event(event);
        }
    }

    /// Advance the clock and deliver every timer that came due, including
    /// zero-delay timers armed while delivering.
    pub fn advance(&mut self, by: Duration) {
        let mut due = self.clock.advance(by);
        while !due.is_empty() {
            for id in due {
                self.controller.handle_timer(id);
            }
            due = self.clock.advance(Duration::ZERO);
        }
    }

    /// Values passed to the save callback so far.
    pub fn saved(&self) -> Vec<String> {
        self.saved.lock().unwrap().clone()
    }
}

/// Options with a one-second debounce.
pub fn one_second() -> DraftOptions {
    DraftOptions::default().with_autosave_seconds(1.0)
}

/// Options that save synchronously.
pub fn immediate() -> DraftOptions {
    DraftOptions::default().with_autosave_seconds(0.0)
}
