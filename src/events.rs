//! Input surface notifications.
//!
//! A bound surface emits six kinds of change-producing notifications. The
//! controller subscribes to all of them while active and reacts per kind:
//!
//! | Kind | Effect |
//! |------|--------|
//! | `Input`, `Change`, `Cut` | debounced save request (suppressed while composing) |
//! | `Paste` | debounced save request on the next scheduling tick |
//! | `CompositionStart` | enter IME composition |
//! | `CompositionEnd` | leave composition, then request a save |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// The notification kinds a surface can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEventKind {
    /// Text was edited (typing, deletion).
    Input,
    /// The value was explicitly committed.
    Change,
    /// Text was cut out of the surface.
    Cut,
    /// Text was pasted into the surface.
    Paste,
    /// An IME composition sequence began.
    CompositionStart,
    /// An IME composition sequence ended.
    CompositionEnd,
}

impl InputEventKind {
    /// Every kind, in subscription order.
    pub const ALL: [InputEventKind; 6] = [
        InputEventKind::Input,
        InputEventKind::Change,
        InputEventKind::Cut,
        InputEventKind::Paste,
        InputEventKind::CompositionStart,
        InputEventKind::CompositionEnd,
    ];

    /// Kinds that count as a generic value change.
    pub fn is_value_change(&self) -> bool {
        matches!(
            self,
            InputEventKind::Input | InputEventKind::Change | InputEventKind::Cut
        )
    }

    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEventKind::Input => "input",
            InputEventKind::Change => "change",
            InputEventKind::Cut => "cut",
            InputEventKind::Paste => "paste",
            InputEventKind::CompositionStart => "compositionstart",
            InputEventKind::CompositionEnd => "compositionend",
        }
    }
}

/// A single notification delivered to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub kind: InputEventKind,
}

impl InputEvent {
    pub fn new(kind: InputEventKind) -> Self {
        Self { kind }
    }

    pub fn input() -> Self {
        Self::new(InputEventKind::Input)
    }

    pub fn change() -> Self {
        Self::new(InputEventKind::Change)
    }

    pub fn cut() -> Self {
        Self::new(InputEventKind::Cut)
    }

    pub fn paste() -> Self {
        Self::new(InputEventKind::Paste)
    }

    pub fn composition_start() -> Self {
        Self::new(InputEventKind::CompositionStart)
    }

    pub fn composition_end() -> Self {
        Self::new(InputEventKind::CompositionEnd)
    }

    /// Translate a terminal event into a surface notification.
    ///
    /// Only key presses and bracketed pastes map to notifications; everything
    /// else (resize, focus, mouse, cursor movement) returns `None`. Terminals
    /// have no IME composition events, so those kinds are never produced here.
    pub fn from_crossterm(event: &Event) -> Option<Self> {
        match event {
            Event::Paste(_) => Some(Self::paste()),
            Event::Key(key) => Self::from_key(key),
            _ => None,
        }
    }

    fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('x') | KeyCode::Char('X') if ctrl => Some(Self::cut()),
            // Other control chords are commands, not edits
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete | KeyCode::Tab => {
                Some(Self::input())
            }
            KeyCode::Enter => Some(Self::change()),
            _ => None,
        }
    }
}
