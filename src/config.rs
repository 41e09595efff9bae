//! Draft controller configuration.
//!
//! [`DraftOptions`] is the raw, user-facing option set. It mirrors the option
//! names callers pass in (`historyLimit`, `autosaveSeconds`, ...) and can be
//! deserialized from JSON. Numbers are kept signed so that bad input reaches
//! validation instead of being silently clamped.
//!
//! [`DraftOptions::validate`] turns it into a [`DraftConfig`], the checked form
//! the controller actually runs with.
//!
//! # Example
//!
//! ```ignore
//! use draftkeeper::config::DraftOptions;
//!
//! let config = DraftOptions::default()
//!     .with_history_limit(10)
//!     .with_autosave_seconds(0.5)
//!     .with_trim_on_save(true)
//!     .validate()?;
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::error::{DraftError, DraftResult};

/// Default number of retained history entries.
pub const DEFAULT_HISTORY_LIMIT: i64 = 50;

/// Default debounce delay in seconds.
pub const DEFAULT_AUTOSAVE_SECONDS: f64 = 3.0;

/// Raw options as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DraftOptions {
    /// Maximum number of history entries (default: 50)
    pub history_limit: i64,
    /// Debounce delay in seconds; 0 saves synchronously (default: 3)
    pub autosave_seconds: f64,
    /// Minimum length a non-empty value needs before it is saved (default: 0)
    pub min_length_to_save: i64,
    /// Trim leading/trailing whitespace before saving (default: false)
    pub trim_on_save: bool,
    /// Whether history collection starts enabled (default: true)
    pub history_enabled: bool,
}

impl Default for DraftOptions {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            autosave_seconds: DEFAULT_AUTOSAVE_SECONDS,
            min_length_to_save: 0,
            trim_on_save: false,
            history_enabled: true,
        }
    }
}

impl DraftOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object. Missing keys take their defaults.
    pub fn from_json(json: &str) -> DraftResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the history limit.
    pub fn with_history_limit(mut self, limit: i64) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set the debounce delay in seconds.
    pub fn with_autosave_seconds(mut self, seconds: f64) -> Self {
        self.autosave_seconds = seconds;
        self
    }

    /// Set the minimum length to save.
    pub fn with_min_length_to_save(mut self, min: i64) -> Self {
        self.min_length_to_save = min;
        self
    }

    /// Set whether values are trimmed before saving.
    pub fn with_trim_on_save(mut self, trim: bool) -> Self {
        self.trim_on_save = trim;
        self
    }

    /// Set whether history collection starts enabled.
    pub fn with_history_enabled(mut self, enabled: bool) -> Self {
        self.history_enabled = enabled;
        self
    }

    /// Check every option and produce the runtime configuration.
    pub fn validate(&self) -> DraftResult<DraftConfig> {
        Ok(DraftConfig {
            history_limit: non_negative_count("historyLimit", self.history_limit)?,
            autosave_delay: delay_from_seconds(self.autosave_seconds)?,
            min_length_to_save: non_negative_count("minLengthToSave", self.min_length_to_save)?,
            trim_on_save: self.trim_on_save,
            history_enabled: self.history_enabled,
        })
    }
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftConfig {
    pub history_limit: usize,
    pub autosave_delay: Duration,
    pub min_length_to_save: usize,
    pub trim_on_save: bool,
    pub history_enabled: bool,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT as usize,
            autosave_delay: Duration::from_secs(DEFAULT_AUTOSAVE_SECONDS as u64),
            min_length_to_save: 0,
            trim_on_save: false,
            history_enabled: true,
        }
    }
}

/// Convert a delay in seconds to a [`Duration`], rejecting negative,
/// non-finite and out-of-range values.
pub fn delay_from_seconds(seconds: f64) -> DraftResult<Duration> {
    const OPTION: &str = "autosaveSeconds";
    if seconds.is_nan() {
        return Err(DraftError::InvalidOption { option: OPTION });
    }
    if seconds < 0.0 {
        return Err(DraftError::NegativeOption {
            option: OPTION,
            value: seconds,
        });
    }
    Duration::try_from_secs_f64(seconds).map_err(|_| DraftError::InvalidOption { option: OPTION })
}

fn non_negative_count(option: &'static str, value: i64) -> DraftResult<usize> {
    usize::try_from(value).map_err(|_| DraftError::NegativeOption {
        option,
        value: value as f64,
    })
}
