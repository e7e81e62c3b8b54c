//! Length criteria - points for reaching each length step.

/// Length measured in Unicode scalar values.
///
/// Browsers count UTF-16 code units instead, so characters outside the BMP
/// (emoji) count once here and twice in a JavaScript `length`.
fn char_len(pwd: &str) -> usize {
    pwd.chars().count()
}

pub fn at_least_6(pwd: &str) -> bool {
    char_len(pwd) >= 6
}

pub fn at_least_10(pwd: &str) -> bool {
    char_len(pwd) >= 10
}

pub fn at_least_14(pwd: &str) -> bool {
    char_len(pwd) >= 14
}
