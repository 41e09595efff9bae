//! Prelude module for convenient imports.
//!
//! ```ignore
//! use draftkeeper::prelude::*;
//! ```

pub use crate::config::{DraftConfig, DraftOptions};
pub use crate::controller::{DraftController, SaveCallback};
pub use crate::driver::DraftMessage;
pub use crate::error::{DraftError, DraftResult};
pub use crate::events::{InputEvent, InputEventKind};
pub use crate::history::DraftHistory;
pub use crate::traits::{InputSurface, Scheduler, TimerId};
