//! Character variety criteria - lowercase, uppercase, digits, symbols.

pub fn has_lower(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_upper(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_digit(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_digit())
}

/// Anything outside `[A-Za-z0-9]`, non-ASCII letters included.
pub fn has_symbol(pwd: &str) -> bool {
    pwd.chars().any(|c| !c.is_ascii_alphanumeric())
}
