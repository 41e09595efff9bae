//! The `DraftError` enum.

use thiserror::Error;

/// Errors produced by the draft controller and its configuration layer.
#[derive(Debug, Error)]
pub enum DraftError {
    /// The bound surface does not accept text input.
    #[error("input surface does not accept text input")]
    InvalidSurface,

    /// A numeric option was negative.
    #[error("option `{option}` must not be negative (got {value})")]
    NegativeOption { option: &'static str, value: f64 },

    /// A numeric option was not a usable number (NaN or infinite).
    #[error("option `{option}` is not a finite number")]
    InvalidOption { option: &'static str },

    /// Options could not be parsed from JSON.
    #[error("invalid options JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The controller was torn down and can no longer reach its surface.
    #[error("draft controller has been destroyed")]
    Destroyed,
}

impl DraftError {
    /// True for errors raised while validating configuration.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, DraftError::Destroyed)
    }
}
