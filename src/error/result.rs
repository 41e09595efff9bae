//! Result type alias for draftkeeper operations.

use super::draft_error::DraftError;

/// Type alias for Results using [`DraftError`].
///
/// # Example
///
/// ```ignore
/// use draftkeeper::error::DraftResult;
///
/// fn configure(json: &str) -> DraftResult<DraftConfig> {
///     DraftOptions::from_json(json)?.validate()
/// }
/// ```
pub type DraftResult<T> = Result<T, DraftError>;
