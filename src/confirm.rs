//! Password confirmation - compares the password with its confirmation field.

use secrecy::{ExposeSecret, SecretString};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    /// Confirmation field still empty.
    Pending,
    Match,
    Mismatch,
}

impl MatchStatus {
    pub fn message(self) -> &'static str {
        match self {
            MatchStatus::Pending => "",
            MatchStatus::Match => "Passwords match",
            MatchStatus::Mismatch => "Passwords do not match",
        }
    }
}

/// Checks whether `confirm` repeats `password` exactly.
pub fn check_confirmation(password: &SecretString, confirm: &SecretString) -> MatchStatus {
    let confirm = confirm.expose_secret();
    if confirm.is_empty() {
        return MatchStatus::Pending;
    }
    if password.expose_secret() == confirm {
        MatchStatus::Match
    } else {
        MatchStatus::Mismatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_confirmation_pending() {
        assert_eq!(check_confirmation(&secret("Secret1!"), &secret("")), MatchStatus::Pending);
        assert_eq!(check_confirmation(&secret(""), &secret("")), MatchStatus::Pending);
        assert_eq!(MatchStatus::Pending.message(), "");
    }

    #[test]
    fn test_confirmation_match() {
        let status = check_confirmation(&secret("Secret1!"), &secret("Secret1!"));
        assert_eq!(status, MatchStatus::Match);
        assert_eq!(status.message(), "Passwords match");
    }

    #[test]
    fn test_confirmation_mismatch() {
        let status = check_confirmation(&secret("Secret1!"), &secret("secret1!"));
        assert_eq!(status, MatchStatus::Mismatch);
        assert_eq!(status.message(), "Passwords do not match");
    }

    #[test]
    fn test_confirmation_of_empty_password() {
        assert_eq!(check_confirmation(&secret(""), &secret("x")), MatchStatus::Mismatch);
    }
}
