//! Keystroke pattern watcher
//!
//! Detects a fixed phrase typed as consecutive key presses, ignoring case.
//!
//! The check is plain equality on a sliding window the size of the phrase,
//! not a streaming substring search. A match clears the window, so an
//! occurrence overlapping the tail of a previous match is not reported:
//! with target `"aa"`, typing `"aaa"` fires once, not twice.

use std::collections::VecDeque;
use thiserror::Error;

/// Phrase used when `PWD_WATCH_PHRASE` is not set.
pub const DEFAULT_PHRASE: &str = "houston";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WatcherError {
    #[error("Target phrase is empty")]
    EmptyTarget,
    #[error("Click threshold must be at least 1")]
    ZeroThreshold,
}

/// Returns the target phrase.
///
/// Priority:
/// 1. Environment variable `PWD_WATCH_PHRASE`
/// 2. [`DEFAULT_PHRASE`]
pub fn get_target_phrase() -> String {
    std::env::var("PWD_WATCH_PHRASE").unwrap_or_else(|_| DEFAULT_PHRASE.to_string())
}

#[derive(Debug, Clone)]
pub struct PatternWatcher {
    target: String,
    capacity: usize,
    buffer: VecDeque<char>,
}

impl PatternWatcher {
    /// Creates a watcher for `target`. The phrase is stored lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`WatcherError::EmptyTarget`] if `target` is empty.
    pub fn new(target: impl AsRef<str>) -> Result<Self, WatcherError> {
        // per-char lowercasing, same as `observe` (no final-sigma rule)
        let target: String = target.as_ref().chars().flat_map(char::to_lowercase).collect();
        if target.is_empty() {
            return Err(WatcherError::EmptyTarget);
        }

        let capacity = target.chars().count();
        Ok(Self {
            target,
            capacity,
            buffer: VecDeque::with_capacity(capacity),
        })
    }

    /// Creates a watcher for the phrase from [`get_target_phrase`].
    pub fn from_env() -> Result<Self, WatcherError> {
        Self::new(get_target_phrase())
    }

    /// Feeds one key press. Returns `true` when the phrase completed on this call.
    ///
    /// The caller filters out key presses aimed at focused text inputs.
    pub fn observe(&mut self, key: char) -> bool {
        // some characters lowercase to more than one char
        for c in key.to_lowercase() {
            self.buffer.push_back(c);
        }
        while self.buffer.len() > self.capacity {
            self.buffer.pop_front();
        }

        if self.buffer.len() == self.capacity
            && self.buffer.iter().copied().eq(self.target.chars())
        {
            #[cfg(feature = "tracing")]
            tracing::debug!("Pattern watcher matched '{}'", self.target);
            self.buffer.clear();
            return true;
        }
        false
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Characters currently held in the window, oldest first.
    pub fn buffered(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
    }
}
