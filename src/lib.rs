//! Password strength meter and keystroke watchers
//!
//! This library holds the decision logic behind a sign-up page's live
//! feedback: password strength scoring, password confirmation, keyboard
//! shortcuts and key-phrase / rapid-click detectors. Rendering and event
//! wiring stay with the host UI.
//!
//! # Features
//!
//! - `async` (default): Enables debounced scoring with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WATCH_PHRASE`: Phrase detected by [`PatternWatcher::from_env`]
//!   (default: `houston`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{score_password, PatternWatcher, StrengthLevel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefghij1!".to_string().into());
//! let result = score_password(&password);
//! assert_eq!(result.level, StrengthLevel::Strong);
//! println!("{} ({}%)", result.label, result.score);
//!
//! let mut watcher = PatternWatcher::new("abc").unwrap();
//! let fired: Vec<bool> = "xAbC".chars().map(|c| watcher.observe(c)).collect();
//! assert_eq!(fired, vec![false, false, false, true]);
//! ```

// Internal modules
mod click_burst;
mod confirm;
mod evaluator;
mod sections;
mod shortcuts;
mod strength;
mod watcher;

// Public API
pub use click_burst::{ClickBurstWatcher, DEFAULT_QUIET_WINDOW, DEFAULT_THRESHOLD};
pub use confirm::{check_confirmation, MatchStatus};
pub use evaluator::{
    score_password, Band, ScoringTable, StrengthScorer, TableError, DEFAULT_BANDS, MAX_SCORE,
};
pub use sections::{Criterion, CriterionFn, DEFAULT_CRITERIA};
pub use shortcuts::{resolve_shortcut, KeyPress, Shortcut};
pub use strength::{ColorToken, PasswordStrengthResult, StrengthLevel};
pub use watcher::{get_target_phrase, PatternWatcher, WatcherError, DEFAULT_PHRASE};

#[cfg(feature = "async")]
pub use evaluator::{score_password_tx, DEBOUNCE};
