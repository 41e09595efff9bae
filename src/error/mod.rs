//! Error handling for draftkeeper.
//!
//! All fallible operations return [`DraftResult<T>`]. Configuration problems
//! are reported at construction time and no controller is produced; lifecycle
//! misuse (operating on a destroyed controller) surfaces as
//! [`DraftError::Destroyed`].
//!
//! Failures raised by the save callback are not part of this taxonomy: they are
//! logged and swallowed by the save pipeline.

mod draft_error;
mod result;

pub use draft_error::DraftError;
pub use result::DraftResult;
