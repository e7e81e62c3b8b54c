//! Scoring criteria
//!
//! Each criterion checks one aspect of the password and is worth a fixed
//! number of points when it holds.

mod length;
mod variety;

pub use length::{at_least_10, at_least_14, at_least_6};
pub use variety::{has_digit, has_lower, has_symbol, has_upper};

/// Predicate over the exposed password text.
pub type CriterionFn = fn(&str) -> bool;

/// One row of the scoring table.
#[derive(Debug, Clone, Copy)]
pub struct Criterion {
    pub name: &'static str,
    pub points: u32,
    pub test: CriterionFn,
}

impl Criterion {
    pub const fn new(name: &'static str, points: u32, test: CriterionFn) -> Self {
        Self { name, points, test }
    }

    /// Points earned by `pwd`, 0 if the criterion does not hold.
    pub fn award(&self, pwd: &str) -> u32 {
        if (self.test)(pwd) { self.points } else { 0 }
    }
}

/// Default point table. Adds up to exactly 100.
pub const DEFAULT_CRITERIA: &[Criterion] = &[
    Criterion::new("length>=6", 20, at_least_6),
    Criterion::new("length>=10", 20, at_least_10),
    Criterion::new("length>=14", 10, at_least_14),
    Criterion::new("lowercase", 15, has_lower),
    Criterion::new("uppercase", 15, has_upper),
    Criterion::new("digit", 10, has_digit),
    Criterion::new("symbol", 10, has_symbol),
];
