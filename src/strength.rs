//! Strength classification types.

use std::fmt;

/// Discrete strength level shown by the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Empty = 0,
    Weak = 1,
    Fair = 2,
    Good = 3,
    Strong = 4,
}

impl StrengthLevel {
    /// Numeric level, 0 (empty) to 4 (strong).
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Severity tag the renderer maps to a visual treatment.
    pub fn color(self) -> ColorToken {
        match self {
            StrengthLevel::Empty => ColorToken::None,
            StrengthLevel::Weak => ColorToken::Weak,
            StrengthLevel::Fair => ColorToken::Fair,
            StrengthLevel::Good => ColorToken::Good,
            StrengthLevel::Strong => ColorToken::Strong,
        }
    }
}

/// Symbolic severity tag. Not a color: the caller decides what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    None,
    Weak,
    Fair,
    Good,
    Strong,
}

impl ColorToken {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorToken::None => "none",
            ColorToken::Weak => "weak",
            ColorToken::Fair => "fair",
            ColorToken::Good => "good",
            ColorToken::Strong => "strong",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scoring one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrengthResult {
    pub level: StrengthLevel,
    pub label: &'static str,
    pub color: ColorToken,
    /// Clamped to 0..=100.
    pub score: u8,
}

impl PasswordStrengthResult {
    /// Result for an empty password.
    pub fn empty() -> Self {
        Self {
            level: StrengthLevel::Empty,
            label: "",
            color: ColorToken::None,
            score: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.level == StrengthLevel::Empty
    }
}
