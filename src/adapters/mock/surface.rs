//! In-memory text field for testing.
//!
//! Stands in for a real widget: it holds a value, records which notification
//! kinds are subscribed, and only "emits" a notification when its kind is
//! subscribed, the way a detached listener stops receiving events.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::events::{InputEvent, InputEventKind};
use crate::traits::InputSurface;

#[derive(Debug)]
struct FieldState {
    text: String,
    subscribed: HashSet<InputEventKind>,
    accepts_text: bool,
    writes: usize,
}

/// Shared-handle text field.
///
/// Clones refer to the same field, so a test can keep a handle to type into
/// while the controller holds another.
#[derive(Debug, Clone)]
pub struct TextField {
    state: Arc<Mutex<FieldState>>,
}

impl TextField {
    /// Create a text field holding `initial`.
    pub fn new(initial: &str) -> Self {
        Self::build(initial, true)
    }

    /// Create a surface that does not hold text (e.g. a checkbox).
    pub fn non_text() -> Self {
        Self::build("", false)
    }

    fn build(initial: &str, accepts_text: bool) -> Self {
        Self {
            state: Arc::new(Mutex::new(FieldState {
                text: initial.to_string(),
                subscribed: HashSet::new(),
                accepts_text,
                writes: 0,
            })),
        }
    }

    /// Current text.
    pub fn text(&self) -> String {
        self.state.lock().unwrap().text.clone()
    }

    /// Replace the text without emitting anything (like a script assignment).
    pub fn set_text(&self, text: &str) {
        self.state.lock().unwrap().text = text.to_string();
    }

    /// Emit a notification if its kind is subscribed.
    pub fn emit(&self, kind: InputEventKind) -> Option<InputEvent> {
        self.is_subscribed(kind).then(|| InputEvent::new(kind))
    }

    /// Replace the text as the user would and emit an `Input` notification.
    pub fn type_text(&self, text: &str) -> Option<InputEvent> {
        self.set_text(text);
        self.emit(InputEventKind::Input)
    }

    /// Append pasted text and emit a `Paste` notification.
    pub fn paste(&self, text: &str) -> Option<InputEvent> {
        self.state.lock().unwrap().text.push_str(text);
        self.emit(InputEventKind::Paste)
    }

    pub fn is_subscribed(&self, kind: InputEventKind) -> bool {
        self.state.lock().unwrap().subscribed.contains(&kind)
    }

    /// Number of kinds currently subscribed.
    pub fn subscription_count(&self) -> usize {
        self.state.lock().unwrap().subscribed.len()
    }

    /// Number of writes made through [`InputSurface::set_value`].
    pub fn write_count(&self) -> usize {
        self.state.lock().unwrap().writes
    }
}

impl InputSurface for TextField {
    fn value(&self) -> String {
        self.text()
    }

    fn set_value(&mut self, value: &str) {
        let mut state = self.state.lock().unwrap();
        state.text = value.to_string();
        state.writes += 1;
    }

    fn subscribe(&mut self, kinds: &[InputEventKind]) {
        self.state
            .lock()
            .unwrap()
            .subscribed
            .extend(kinds.iter().copied());
    }

    fn unsubscribe(&mut self, kinds: &[InputEventKind]) {
        let mut state = self.state.lock().unwrap();
        for kind in kinds {
            state.subscribed.remove(kind);
        }
    }

    fn accepts_text(&self) -> bool {
        self.state.lock().unwrap().accepts_text
    }
}
