//! The draft controller.
//!
//! A [`DraftController`] binds to one text input and keeps a "draft" of it:
//! edits are debounced into saves, each save is normalized and validated,
//! stored as the new draft value, optionally appended to a bounded history,
//! and announced through the save callback.
//!
//! # Flow
//!
//! ```text
//! surface notification ─► handle_event ─┬─ composing? ─► dropped
//!                                       └─► Debouncer ─► timer ─► handle_timer
//!                                                                     │
//!              save pipeline ◄────────────────────────────────────────┘
//!   read ─► trim? ─► unchanged? ─► too short? ─► commit ─► history ─► callback
//! ```
//!
//! The controller never owns an event loop. Hosts deliver notifications with
//! [`handle_event`](DraftController::handle_event) and elapsed timers with
//! [`handle_timer`](DraftController::handle_timer); [`crate::driver`] does
//! this for tokio hosts.
//!
//! # Destroyed controllers
//!
//! After [`destroy`](DraftController::destroy) the surface is released.
//! Operations that would need it (`start`, `save`, `force_save`,
//! `restore_draft`) return [`DraftError::Destroyed`]. Teardown-style calls
//! (`stop`, `cancel_pending_save`, `clear_history`, `destroy`) are no-ops, and
//! late notifications or timer fires are ignored.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use tracing::{debug, error, trace, warn};

use crate::config::{delay_from_seconds, DraftConfig, DraftOptions};
use crate::debouncer::{Debounced, Debouncer, Fired};
use crate::error::{DraftError, DraftResult};
use crate::events::{InputEvent, InputEventKind};
use crate::history::DraftHistory;
use crate::traits::{InputSurface, Scheduler, TimerId};

/// Save callback: receives the newly saved value and the controller.
///
/// Errors are logged and otherwise ignored.
pub type SaveCallback<S, Sc> =
    Box<dyn FnMut(&str, &DraftController<S, Sc>) -> color_eyre::Result<()> + Send>;

/// Keeps the draft of a single text input.
pub struct DraftController<S, Sc> {
    /// Bound surface; `None` once destroyed
    surface: Option<S>,
    scheduler: Sc,
    /// Whether notification handlers are attached
    active: bool,
    /// Last successfully saved value
    draft_value: String,
    /// True between composition start and end
    composing: bool,
    /// Re-entrancy guard for the save pipeline
    saving: bool,
    history: DraftHistory,
    debouncer: Debouncer,
    min_length_to_save: usize,
    trim_on_save: bool,
    on_save: Option<SaveCallback<S, Sc>>,
}

impl<S: InputSurface, Sc: Scheduler> DraftController<S, Sc> {
    /// Bind a controller to `surface`, validating `options`.
    ///
    /// The surface's current value becomes the initial draft value. The
    /// controller starts inactive; call [`start`](Self::start) to listen.
    pub fn new(surface: S, scheduler: Sc, options: DraftOptions) -> DraftResult<Self> {
        let config = options.validate()?;
        Self::with_config(surface, scheduler, config)
    }

    /// Bind a controller using an already validated configuration.
    pub fn with_config(surface: S, scheduler: Sc, config: DraftConfig) -> DraftResult<Self> {
        if !surface.accepts_text() {
            return Err(DraftError::InvalidSurface);
        }

        let draft_value = surface.value();
        debug!(
            history_limit = config.history_limit,
            delay_ms = config.autosave_delay.as_millis() as u64,
            min_length = config.min_length_to_save,
            trim = config.trim_on_save,
            "draft controller bound"
        );

        Ok(Self {
            surface: Some(surface),
            scheduler,
            active: false,
            draft_value,
            composing: false,
            saving: false,
            history: DraftHistory::new(config.history_limit, config.history_enabled),
            debouncer: Debouncer::new(config.autosave_delay),
            min_length_to_save: config.min_length_to_save,
            trim_on_save: config.trim_on_save,
            on_save: None,
        })
    }

    /// Set the save callback (builder form).
    pub fn with_on_save<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&str, &DraftController<S, Sc>) -> color_eyre::Result<()> + Send + 'static,
    {
        self.set_on_save(callback);
        self
    }

    /// Replace the save callback.
    pub fn set_on_save<F>(&mut self, callback: F)
    where
        F: FnMut(&str, &DraftController<S, Sc>) -> color_eyre::Result<()> + Send + 'static,
    {
        self.on_save = Some(Box::new(callback));
    }

    /// Reset the save callback to a no-op.
    pub fn clear_on_save(&mut self) {
        self.on_save = None;
    }

    // ------------------------------------------------------------------
    // Subscription
    // ------------------------------------------------------------------

    /// Attach to the surface's notifications. No-op when already active.
    pub fn start(&mut self) -> DraftResult<()> {
        let surface = self.surface.as_mut().ok_or(DraftError::Destroyed)?;
        if self.active {
            return Ok(());
        }

        self.composing = false;
        surface.subscribe(&InputEventKind::ALL);
        self.active = true;
        debug!("draft controller started");
        Ok(())
    }

    /// Detach from the surface and cancel any pending save. No-op when
    /// inactive.
    pub fn stop(&mut self) {
        if !self.active {
            return;
        }

        self.debouncer.cancel_all(&mut self.scheduler);
        self.active = false;
        self.composing = false;
        if let Some(surface) = self.surface.as_mut() {
            surface.unsubscribe(&InputEventKind::ALL);
        }
        debug!("draft controller stopped");
    }

    /// Deliver a surface notification.
    ///
    /// Ignored while inactive. While an IME composition is in progress only
    /// the composition end is acted on.
    pub fn handle_event(&mut self, event: InputEvent) {
        if !self.active {
            trace!(kind = event.kind.as_str(), "ignoring event while inactive");
            return;
        }

        match event.kind {
            InputEventKind::CompositionStart => {
                self.composing = true;
            }
            InputEventKind::CompositionEnd => {
                self.composing = false;
                self.request_save();
            }
            kind if self.composing => {
                trace!(kind = kind.as_str(), "suppressed during composition");
            }
            InputEventKind::Paste => {
                self.debouncer.defer(&mut self.scheduler);
            }
            kind if kind.is_value_change() => {
                self.request_save();
            }
            _ => {}
        }
    }

    /// Deliver an elapsed timer.
    ///
    /// Ids the controller is no longer waiting on are ignored, so a fire that
    /// races a cancellation never saves.
    pub fn handle_timer(&mut self, id: TimerId) {
        match self.debouncer.fire(id) {
            Fired::Save => self.run_save_pipeline(),
            Fired::PasteTick => self.request_save(),
            Fired::Stale => trace!(%id, "ignoring stale timer"),
        }
    }

    // ------------------------------------------------------------------
    // Saving
    // ------------------------------------------------------------------

    /// Request a save through the debounce path.
    ///
    /// While active this arms (or re-arms) the debounce timer, or saves right
    /// away when the delay is zero. An inactive controller has no timers, so
    /// the save runs immediately.
    pub fn save(&mut self) -> DraftResult<()> {
        if self.surface.is_none() {
            return Err(DraftError::Destroyed);
        }
        if self.active {
            self.request_save();
        } else {
            self.run_save_pipeline();
        }
        Ok(())
    }

    /// Commit a value right now, bypassing the debounce, equality and
    /// minimum-length checks.
    ///
    /// With `None` the surface's current value is used. The value only enters
    /// history when it meets the minimum length. The callback always runs.
    pub fn force_save(&mut self, value: Option<&str>) -> DraftResult<()> {
        let surface = self.surface.as_ref().ok_or(DraftError::Destroyed)?;
        let value = match value {
            Some(value) => value.to_string(),
            None => surface.value(),
        };

        self.debouncer.cancel_all(&mut self.scheduler);
        self.draft_value = value;
        if self.draft_value.chars().count() >= self.min_length_to_save {
            self.history.push(&self.draft_value);
        }
        debug!(len = self.draft_value.len(), "draft force-saved");
        self.invoke_callback();
        Ok(())
    }

    /// Cancel the pending save, if any. Draft value and history are untouched.
    pub fn cancel_pending_save(&mut self) {
        self.debouncer.cancel_all(&mut self.scheduler);
    }

    fn request_save(&mut self) {
        match self.debouncer.request(&mut self.scheduler) {
            Debounced::Immediate => self.run_save_pipeline(),
            Debounced::Scheduled(id) => trace!(%id, "save scheduled"),
        }
    }

    fn run_save_pipeline(&mut self) {
        // Unreachable from the callback today (it only gets `&Self`); the
        // guard stays so the pipeline never nests if that ever changes.
        if self.saving {
            debug!("save already in progress, skipping");
            return;
        }
        let Some(surface) = self.surface.as_ref() else {
            return;
        };

        let raw = surface.value();
        let value = if self.trim_on_save {
            raw.trim().to_string()
        } else {
            raw
        };

        if value == self.draft_value {
            trace!("draft unchanged");
            return;
        }
        let len = value.chars().count();
        if len > 0 && len < self.min_length_to_save {
            trace!(len, min = self.min_length_to_save, "draft too short to save");
            return;
        }

        self.saving = true;
        self.draft_value = value;
        self.history.push(&self.draft_value);
        debug!(len, history = self.history.len(), "draft saved");
        self.invoke_callback();
        self.saving = false;
    }

    fn invoke_callback(&mut self) {
        let Some(mut callback) = self.on_save.take() else {
            return;
        };

        let this: &Self = self;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| callback(&this.draft_value, this)));
        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(err)) => error!(error = %err, "draft save callback failed"),
            Err(payload) => {
                error!(panic = panic_message(&*payload), "draft save callback panicked")
            }
        }

        self.on_save = Some(callback);
    }

    /// Write the current draft value back into the surface.
    ///
    /// Does not trigger a save.
    pub fn restore_draft(&mut self) -> DraftResult<()> {
        let surface = self.surface.as_mut().ok_or(DraftError::Destroyed)?;
        surface.set_value(&self.draft_value);
        Ok(())
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    /// Remove all history entries.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Copy of the history, oldest first. With `clear_after` the history is
    /// emptied as part of the read.
    pub fn get_history(&mut self, clear_after: bool) -> Vec<String> {
        if clear_after {
            self.history.drain()
        } else {
            self.history.snapshot()
        }
    }

    /// Borrow the history.
    pub fn history(&self) -> &DraftHistory {
        &self.history
    }

    pub fn history_size(&self) -> usize {
        self.history.len()
    }

    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_enabled(&self) -> bool {
        self.history.is_enabled()
    }

    /// Enable or disable history. Disabling discards all retained entries.
    pub fn set_history_enabled(&mut self, enabled: bool) {
        self.history.set_enabled(enabled);
    }

    // ------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------

    /// Stop, release the surface, clear history and drop the callback.
    ///
    /// The controller is inert afterwards.
    pub fn destroy(&mut self) {
        if self.surface.is_none() {
            return;
        }

        self.stop();
        self.debouncer.cancel_all(&mut self.scheduler);
        self.surface = None;
        self.composing = false;
        self.history.clear();
        self.on_save = None;
        debug!("draft controller destroyed");
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Last saved value.
    pub fn draft_value(&self) -> &str {
        &self.draft_value
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_destroyed(&self) -> bool {
        self.surface.is_none()
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// True only while the save pipeline is running (i.e. inside the callback).
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// True while a save timer or paste tick is outstanding.
    pub fn has_pending_save(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn autosave_delay(&self) -> Duration {
        self.debouncer.delay()
    }

    pub fn autosave_delay_seconds(&self) -> f64 {
        self.debouncer.delay().as_secs_f64()
    }

    /// Change the debounce delay. Rejected values leave the delay unchanged.
    pub fn set_autosave_delay_seconds(&mut self, seconds: f64) -> DraftResult<()> {
        match delay_from_seconds(seconds) {
            Ok(delay) => {
                self.debouncer.set_delay(delay);
                Ok(())
            }
            Err(err) => {
                warn!(seconds, "rejected autosave delay");
                Err(err)
            }
        }
    }

    pub fn history_limit(&self) -> usize {
        self.history.limit()
    }

    pub fn min_length_to_save(&self) -> usize {
        self.min_length_to_save
    }

    pub fn trim_on_save(&self) -> bool {
        self.trim_on_save
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "non-string panic payload"
    }
}

impl<S, Sc> fmt::Debug for DraftController<S, Sc> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraftController")
            .field("active", &self.active)
            .field("destroyed", &self.surface.is_none())
            .field("draft_value", &self.draft_value)
            .field("composing", &self.composing)
            .field("saving", &self.saving)
            .field("history", &self.history)
            .field("debouncer", &self.debouncer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{ManualScheduler, TextField};
    use std::sync::{Arc, Mutex};

    type Controller = DraftController<TextField, ManualScheduler>;

    fn immediate() -> DraftOptions {
        DraftOptions::default().with_autosave_seconds(0.0)
    }

    fn build(initial: &str, options: DraftOptions) -> (TextField, ManualScheduler, Controller) {
        let field = TextField::new(initial);
        let clock = ManualScheduler::new();
        let controller = DraftController::new(field.clone(), clock.clone(), options).unwrap();
        (field, clock, controller)
    }

    fn recorder(controller: &mut Controller) -> Arc<Mutex<Vec<String>>> {
        let saved = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&saved);
        controller.set_on_save(move |value, _| {
            sink.lock().unwrap().push(value.to_string());
            Ok(())
        });
        saved
    }

    #[test]
    fn test_initial_draft_is_surface_value() {
        let (_, _, controller) = build("hello", DraftOptions::default());
        assert_eq!(controller.draft_value(), "hello");
        assert!(!controller.is_active());
        assert!(!controller.has_history());
    }

    #[test]
    fn test_rejects_non_text_surface() {
        let err = DraftController::new(
            TextField::non_text(),
            ManualScheduler::new(),
            DraftOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, DraftError::InvalidSurface));
    }

    #[test]
    fn test_rejects_negative_options() {
        let err = DraftController::new(
            TextField::new(""),
            ManualScheduler::new(),
            DraftOptions::default().with_history_limit(-5),
        )
        .unwrap_err();
        assert!(matches!(err, DraftError::NegativeOption { .. }));
    }

    #[test]
    fn test_start_subscribes_and_stop_unsubscribes() {
        let (field, _, mut controller) = build("", DraftOptions::default());
        controller.start().unwrap();
        assert!(controller.is_active());
        assert_eq!(field.subscription_count(), 6);

        controller.start().unwrap();
        assert_eq!(field.subscription_count(), 6);

        controller.stop();
        assert!(!controller.is_active());
        assert_eq!(field.subscription_count(), 0);
        controller.stop();
    }

    #[test]
    fn test_save_pipeline_scenario_with_eviction() {
        let (field, _, mut controller) = build("", immediate().with_history_limit(2));
        controller.start().unwrap();

        field.set_text("a");
        controller.save().unwrap();
        assert_eq!(controller.draft_value(), "a");
        assert_eq!(controller.get_history(false), vec!["a"]);

        field.set_text("ab");
        controller.save().unwrap();
        assert_eq!(controller.get_history(false), vec!["a", "ab"]);

        field.set_text("abc");
        controller.save().unwrap();
        assert_eq!(controller.get_history(false), vec!["ab", "abc"]);
    }

    #[test]
    fn test_unchanged_value_does_not_call_back() {
        let (field, _, mut controller) = build("same", immediate());
        let saved = recorder(&mut controller);
        field.set_text("same");
        controller.save().unwrap();
        assert!(saved.lock().unwrap().is_empty());
        assert!(!controller.has_history());
    }

    #[test]
    fn test_trim_on_save() {
        let (field, _, mut controller) = build("", immediate().with_trim_on_save(true));
        field.set_text("  padded  ");
        controller.save().unwrap();
        assert_eq!(controller.draft_value(), "padded");
    }

    #[test]
    fn test_min_length_blocks_short_values() {
        let (field, _, mut controller) = build("", immediate().with_min_length_to_save(3));
        let saved = recorder(&mut controller);

        field.set_text("ab");
        controller.save().unwrap();
        assert_eq!(controller.draft_value(), "");
        assert!(saved.lock().unwrap().is_empty());

        field.set_text("abc");
        controller.save().unwrap();
        assert_eq!(controller.draft_value(), "abc");

        // Clearing the field is always allowed
        field.set_text("");
        controller.save().unwrap();
        assert_eq!(controller.draft_value(), "");
        assert_eq!(*saved.lock().unwrap(), vec!["abc", ""]);
    }

    #[test]
    fn test_min_length_counts_chars() {
        let (field, _, mut controller) = build("", immediate().with_min_length_to_save(2));
        field.set_text("é");
        controller.save().unwrap();
        assert_eq!(controller.draft_value(), "");
        field.set_text("éé");
        controller.save().unwrap();
        assert_eq!(controller.draft_value(), "éé");
    }

    #[test]
    fn test_force_save_always_calls_back() {
        let (_, _, mut controller) = build("x", DraftOptions::default());
        let saved = recorder(&mut controller);

        controller.force_save(Some("x")).unwrap();
        controller.force_save(Some("x")).unwrap();
        assert_eq!(*saved.lock().unwrap(), vec!["x", "x"]);
        assert_eq!(controller.get_history(false), vec!["x"]);
    }

    #[test]
    fn test_force_save_uses_surface_value_by_default() {
        let (field, _, mut controller) = build("", DraftOptions::default());
        field.set_text("from field");
        controller.force_save(None).unwrap();
        assert_eq!(controller.draft_value(), "from field");
    }

    #[test]
    fn test_force_save_short_value_skips_history_only() {
        let (_, _, mut controller) = build("", DraftOptions::default().with_min_length_to_save(5));
        controller.force_save(Some("abc")).unwrap();
        assert_eq!(controller.draft_value(), "abc");
        assert!(!controller.has_history());
    }

    #[test]
    fn test_force_save_cancels_pending_timer() {
        let (field, clock, mut controller) = build("", DraftOptions::default());
        controller.start().unwrap();
        controller.handle_event(field.type_text("typed").unwrap());
        assert!(controller.has_pending_save());

        controller.force_save(Some("forced")).unwrap();
        assert!(!controller.has_pending_save());
        assert_eq!(clock.armed_count(), 0);
    }

    #[test]
    fn test_callback_error_is_contained() {
        let (field, _, mut controller) = build("", immediate());
        controller.set_on_save(|_, _| Err(color_eyre::eyre::eyre!("disk full")));

        field.set_text("kept");
        controller.save().unwrap();
        assert_eq!(controller.draft_value(), "kept");
        assert_eq!(controller.get_history(false), vec!["kept"]);
        assert!(!controller.is_saving());

        field.set_text("next");
        controller.save().unwrap();
        assert_eq!(controller.draft_value(), "next");
    }

    #[test]
    fn test_callback_panic_clears_guard_and_keeps_callback() {
        let (field, _, mut controller) = build("", immediate());
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        controller.set_on_save(move |value, _| {
            sink.lock().unwrap().push(value.to_string());
            if value == "first" {
                panic!("callback blew up");
            }
            Ok(())
        });

        field.set_text("first");
        controller.save().unwrap();
        assert!(!controller.is_saving());
        assert_eq!(controller.draft_value(), "first");

        field.set_text("second");
        controller.save().unwrap();
        assert_eq!(controller.draft_value(), "second");
        assert_eq!(*calls.lock().unwrap(), vec!["first", "second"]);
        assert_eq!(controller.get_history(false), vec!["first", "second"]);
    }

    #[test]
    fn test_force_save_survives_callback_panic() {
        let (_, _, mut controller) = build("", DraftOptions::default());
        controller.set_on_save(|_, _| panic!("always"));
        controller.force_save(Some("a")).unwrap();
        controller.force_save(Some("b")).unwrap();
        assert_eq!(controller.draft_value(), "b");
        assert!(!controller.is_saving());
    }

    #[test]
    fn test_stop_mid_composition_clears_composing() {
        let (field, _, mut controller) = build("", immediate());
        controller.start().unwrap();
        controller.handle_event(field.emit(InputEventKind::CompositionStart).unwrap());
        assert!(controller.is_composing());

        controller.stop();
        assert!(!controller.is_composing());
        assert!(!controller.is_active());
    }

    #[test]
    fn test_value_change_kinds_request_saves() {
        let (field, _, mut controller) = build("", immediate());
        let saved = recorder(&mut controller);
        controller.start().unwrap();

        for (text, kind) in [
            ("a", InputEventKind::Input),
            ("ab", InputEventKind::Change),
            ("b", InputEventKind::Cut),
        ] {
            field.set_text(text);
            controller.handle_event(field.emit(kind).unwrap());
        }
        assert_eq!(*saved.lock().unwrap(), vec!["a", "ab", "b"]);
    }

    #[test]
    fn test_callback_sees_saving_flag_and_controller() {
        let (field, _, mut controller) = build("", immediate());
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        controller.set_on_save(move |value, ctrl| {
            *sink.lock().unwrap() =
                Some((value.to_string(), ctrl.is_saving(), ctrl.history_size()));
            Ok(())
        });

        field.set_text("v");
        controller.save().unwrap();
        assert_eq!(*seen.lock().unwrap(), Some(("v".to_string(), true, 1)));
    }

    #[test]
    fn test_disable_history_clears() {
        let (field, _, mut controller) = build("", immediate());
        field.set_text("a");
        controller.save().unwrap();
        assert!(controller.has_history());

        controller.set_history_enabled(false);
        assert!(!controller.history_enabled());
        assert!(!controller.has_history());

        controller.set_history_enabled(true);
        assert!(!controller.has_history());
    }

    #[test]
    fn test_get_history_with_clear() {
        let (field, _, mut controller) = build("", immediate());
        field.set_text("a");
        controller.save().unwrap();
        assert_eq!(controller.get_history(true), vec!["a"]);
        assert_eq!(controller.history_size(), 0);
    }

    #[test]
    fn test_autosave_delay_runtime_update() {
        let (_, _, mut controller) = build("", DraftOptions::default());
        assert_eq!(controller.autosave_delay_seconds(), 3.0);

        controller.set_autosave_delay_seconds(1.5).unwrap();
        assert_eq!(controller.autosave_delay(), Duration::from_millis(1500));

        assert!(controller.set_autosave_delay_seconds(-1.0).is_err());
        assert_eq!(controller.autosave_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_restore_draft_writes_surface() {
        let (field, _, mut controller) = build("", immediate());
        field.set_text("saved");
        controller.save().unwrap();
        field.set_text("unsaved edits");

        controller.restore_draft().unwrap();
        assert_eq!(field.text(), "saved");
        assert_eq!(field.write_count(), 1);
    }

    #[test]
    fn test_destroy_releases_everything() {
        let (field, clock, mut controller) = build("", DraftOptions::default());
        let saved = recorder(&mut controller);
        controller.start().unwrap();
        controller.force_save(Some("x")).unwrap();
        controller.handle_event(field.type_text("pending").unwrap());

        controller.destroy();
        assert!(controller.is_destroyed());
        assert!(!controller.is_active());
        assert!(!controller.has_history());
        assert_eq!(clock.armed_count(), 0);
        assert_eq!(field.subscription_count(), 0);

        assert!(matches!(controller.start(), Err(DraftError::Destroyed)));
        assert!(matches!(controller.save(), Err(DraftError::Destroyed)));
        assert!(matches!(controller.force_save(None), Err(DraftError::Destroyed)));
        assert!(matches!(controller.restore_draft(), Err(DraftError::Destroyed)));
        controller.stop();
        controller.cancel_pending_save();
        controller.destroy();

        assert_eq!(*saved.lock().unwrap(), vec!["x"]);
    }

    #[test]
    fn test_debug_output() {
        let (_, _, controller) = build("dbg", DraftOptions::default());
        let out = format!("{:?}", controller);
        assert!(out.contains("DraftController"));
        assert!(out.contains("dbg"));
    }
}
