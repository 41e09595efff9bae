//! Bounded history of saved draft values.
//!
//! Entries are kept oldest first, newest last. A value identical to the
//! current newest entry is never appended twice in a row, and the buffer never
//! holds more than its configured limit: appending past the limit evicts the
//! single oldest entry.
//!
//! History can be switched off. Switching it off discards everything retained
//! so far; switching it back on starts from empty.

use std::collections::VecDeque;

/// Manages the saved-value history for one draft controller.
#[derive(Debug, Clone)]
pub struct DraftHistory {
    /// Stored entries (oldest first, newest last).
    entries: VecDeque<String>,
    /// Maximum number of entries retained.
    limit: usize,
    /// When false, the history is kept empty.
    enabled: bool,
}

impl DraftHistory {
    /// Create an empty history.
    pub fn new(limit: usize, enabled: bool) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.min(64)),
            limit,
            enabled,
        }
    }

    /// Append a value.
    ///
    /// Skipped when history is disabled or the value equals the newest entry.
    /// Returns true if the value was appended (even if it was evicted again
    /// straight away because the limit is zero).
    pub fn push(&mut self, value: &str) -> bool {
        if !self.enabled {
            return false;
        }
        if self.entries.back().map(String::as_str) == Some(value) {
            return false;
        }

        self.entries.push_back(value.to_string());
        if self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        true
    }

    /// Enable or disable collection. Disabling clears all entries.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.entries.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Copy of the entries, oldest first.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// Take all entries out, leaving the history empty.
    pub fn drain(&mut self) -> Vec<String> {
        self.entries.drain(..).collect()
    }

    /// Iterate over the entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// The newest entry, if any.
    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
