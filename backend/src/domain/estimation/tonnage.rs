//! Annual CO₂ reduction input.

use serde::Serialize;
use std::fmt;

/// A positive, finite number of metric tons of CO₂ reduced per year.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Tonnage(f64);

impl Tonnage {
    /// Accepts only finite values strictly greater than zero.
    pub fn new(tons: f64) -> Option<Self> {
        if tons.is_finite() && tons > 0.0 {
            Some(Self(tons))
        } else {
            None
        }
    }

    /// Parses raw form input. Surrounding whitespace is ignored; anything
    /// that is not a plain decimal number yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<f64>().ok().and_then(Self::new)
    }

    pub fn tons(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Tonnage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
