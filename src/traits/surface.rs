//! Input surface trait abstraction.

use crate::events::InputEventKind;

/// A text input the controller can bind to.
///
/// The surface is owned by the caller. The controller only reads and writes
/// its value and toggles which notification kinds it listens for; delivering
/// the notifications themselves is the host's job (see
/// [`DraftController::handle_event`](crate::controller::DraftController::handle_event)).
///
/// # Example
///
/// ```ignore
/// use draftkeeper::traits::InputSurface;
///
/// struct Field { text: String }
///
/// impl InputSurface for Field {
///     fn value(&self) -> String { self.text.clone() }
///     fn set_value(&mut self, value: &str) { self.text = value.to_string(); }
///     fn subscribe(&mut self, _kinds: &[InputEventKind]) {}
///     fn unsubscribe(&mut self, _kinds: &[InputEventKind]) {}
/// }
/// ```
pub trait InputSurface {
    /// Current text content.
    fn value(&self) -> String;

    /// Replace the text content. Must not emit a notification back to the
    /// controller.
    fn set_value(&mut self, value: &str);

    /// Start delivering the given notification kinds.
    fn subscribe(&mut self, kinds: &[InputEventKind]);

    /// Stop delivering the given notification kinds.
    fn unsubscribe(&mut self, kinds: &[InputEventKind]);

    /// Whether this surface holds editable text.
    ///
    /// Surfaces that return false are rejected when a controller is built.
    fn accepts_text(&self) -> bool {
        true
    }
}
