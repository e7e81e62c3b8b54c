//! Password strength scorer - additive point table plus classification bands.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{Criterion, DEFAULT_CRITERIA};
use crate::strength::{PasswordStrengthResult, StrengthLevel};

/// Upper bound of the clamped score.
pub const MAX_SCORE: u8 = 100;

/// Delay before a debounced evaluation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Score range mapped to one level. Covers `min_score` up to the next band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub min_score: u8,
    pub level: StrengthLevel,
    pub label: &'static str,
}

impl Band {
    pub const fn new(min_score: u8, level: StrengthLevel, label: &'static str) -> Self {
        Self { min_score, level, label }
    }
}

pub const DEFAULT_BANDS: &[Band] = &[
    Band::new(0, StrengthLevel::Weak, "Weak — add more characters"),
    Band::new(30, StrengthLevel::Fair, "Fair — add variety"),
    Band::new(50, StrengthLevel::Good, "Good — almost there"),
    Band::new(70, StrengthLevel::Strong, "Strong — excellent!"),
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("Scoring table has no bands")]
    NoBands,
    #[error("First band must start at 0, got {0}")]
    FirstBandNotZero(u8),
    #[error("Band minimums must be strictly increasing: {prev} then {next}")]
    BandsNotIncreasing { prev: u8, next: u8 },
}

/// Criteria and bands used by a [`StrengthScorer`].
#[derive(Debug, Clone)]
pub struct ScoringTable {
    criteria: Vec<Criterion>,
    bands: Vec<Band>,
}

impl ScoringTable {
    /// Builds a table, checking that the bands form a step function over 0..=100.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `bands` is empty
    /// - the first band does not start at 0
    /// - band minimums are not strictly increasing
    pub fn new(criteria: Vec<Criterion>, bands: Vec<Band>) -> Result<Self, TableError> {
        let first = bands.first().ok_or(TableError::NoBands)?;
        if first.min_score != 0 {
            #[cfg(feature = "tracing")]
            tracing::error!("Scoring table rejected: first band starts at {}", first.min_score);
            return Err(TableError::FirstBandNotZero(first.min_score));
        }

        for pair in bands.windows(2) {
            if pair[1].min_score <= pair[0].min_score {
                #[cfg(feature = "tracing")]
                tracing::error!(
                    "Scoring table rejected: band {} follows {}",
                    pair[1].min_score,
                    pair[0].min_score
                );
                return Err(TableError::BandsNotIncreasing {
                    prev: pair[0].min_score,
                    next: pair[1].min_score,
                });
            }
        }

        Ok(Self { criteria, bands })
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Sum of awarded points, clamped to [`MAX_SCORE`].
    fn raw_score(&self, pwd: &str) -> u8 {
        let total = self
            .criteria
            .iter()
            .fold(0u32, |acc, c| acc.saturating_add(c.award(pwd)));
        total.min(u32::from(MAX_SCORE)) as u8
    }

    /// Last band whose minimum the score reaches.
    fn band_for(&self, score: u8) -> &Band {
        self.bands
            .iter()
            .rev()
            .find(|b| score >= b.min_score)
            .unwrap_or(&self.bands[0])
    }
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self {
            criteria: DEFAULT_CRITERIA.to_vec(),
            bands: DEFAULT_BANDS.to_vec(),
        }
    }
}

/// Stateless password scorer. Safe to share between call sites.
#[derive(Debug, Clone, Default)]
pub struct StrengthScorer {
    table: ScoringTable,
}

impl StrengthScorer {
    pub fn new(table: ScoringTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ScoringTable {
        &self.table
    }

    /// Scores a password. Never fails: empty, non-ASCII and very long
    /// inputs are ordinary data.
    pub fn score(&self, password: &SecretString) -> PasswordStrengthResult {
        self.score_str(password.expose_secret())
    }

    fn score_str(&self, pwd: &str) -> PasswordStrengthResult {
        if pwd.is_empty() {
            return PasswordStrengthResult::empty();
        }

        let score = self.table.raw_score(pwd);
        let band = self.table.band_for(score);

        PasswordStrengthResult {
            level: band.level,
            label: band.label,
            color: band.level.color(),
            score,
        }
    }
}

/// Scores a password against the default table.
pub fn score_password(password: &SecretString) -> PasswordStrengthResult {
    StrengthScorer::default().score(password)
}

/// Debounced scoring that sends the result via channel.
///
/// Waits [`DEBOUNCE`] first; if `token` is cancelled meanwhile (the user
/// kept typing) nothing is sent.
#[cfg(feature = "async")]
pub async fn score_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordStrengthResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("strength evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("strength evaluation cancelled");
        return;
    }

    let result = score_password(password);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password strength result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_score_password_tx_sends_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let pwd = SecretString::new("Abcdefghij1!".to_string().into());

        score_password_tx(&pwd, token, tx).await;

        let result = rx.recv().await.expect("Should receive result");
        assert_eq!(result.score, 90);
    }

    #[tokio::test(start_paused = true)]
    async fn test_score_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();
        let pwd = SecretString::new("Abcdefghij1!".to_string().into());

        score_password_tx(&pwd, token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_score_password_tx_waits_for_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let handle = tokio::spawn(async move {
            let pwd = SecretString::new("abcdef".to_string().into());
            score_password_tx(&pwd, token, tx).await;
        });

        tokio::time::advance(DEBOUNCE / 2).await;
        assert!(rx.try_recv().is_err());

        handle.await.unwrap();
        let result = rx.recv().await.expect("Should receive result");
        assert_eq!(result.level, StrengthLevel::Fair);
    }

    #[tokio::test(start_paused = true)]
    async fn test_score_password_tx_closed_receiver() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let pwd = SecretString::new("abc".to_string().into());

        // must not panic
        score_password_tx(&pwd, CancellationToken::new(), tx).await;
    }
}
