//! # Guarded Numeric Results
//!
//! A [`Measure`] is a computed quantity that may have degenerated:
//!
//! - `Value(x)` - an ordinary finite number
//! - `Infinite` - a ratio whose denominator vanished (e.g. a safety factor
//!   against zero stress, pad wear life at zero wear rate)
//! - `Invalid` - no real answer exists (negative radicand, arcsine out of
//!   range, NaN from upstream arithmetic)
//!
//! Calculations never surface NaN or infinity as a bare float; everything
//! that can degenerate passes through [`Measure::from_f64`] or one of the
//! guarded constructors below.
//!
//! ## Example
//!
//! ```rust
//! use moto_core::measure::Measure;
//!
//! assert_eq!(Measure::ratio_or_infinite(300.0, 0.0), Measure::Infinite);
//! assert_eq!(Measure::fourth_root(-1.0), Measure::Invalid);
//! assert_eq!(Measure::Value(12.345).format(2, "mm"), "12.35 mm");
//! ```

use serde::{Deserialize, Serialize};

/// A computed number, or the sentinel explaining why there is none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Measure {
    /// Finite value
    Value(f64),
    /// No real-valued result
    Invalid,
    /// Unbounded (division by a vanishing demand)
    Infinite,
}

impl Measure {
    /// Classify a raw float. `+inf` is `Infinite`; NaN and `-inf` are `Invalid`.
    pub fn from_f64(x: f64) -> Self {
        if x.is_nan() {
            Measure::Invalid
        } else if x == f64::INFINITY {
            Measure::Infinite
        } else if x.is_infinite() {
            Measure::Invalid
        } else {
            Measure::Value(x)
        }
    }

    /// `numerator / denominator`, or `Infinite` when the denominator is not
    /// strictly positive. This is the safety-factor rule.
    pub fn ratio_or_infinite(numerator: f64, denominator: f64) -> Self {
        if denominator > 0.0 {
            Measure::from_f64(numerator / denominator)
        } else {
            Measure::Infinite
        }
    }

    /// Real fourth root, `Invalid` for a negative radicand.
    pub fn fourth_root(radicand: f64) -> Self {
        if radicand < 0.0 {
            Measure::Invalid
        } else {
            Measure::from_f64(radicand.powf(0.25))
        }
    }

    /// Real cube root, `Invalid` for a negative radicand.
    pub fn cube_root(radicand: f64) -> Self {
        if radicand < 0.0 {
            Measure::Invalid
        } else {
            Measure::from_f64(radicand.cbrt())
        }
    }

    /// Apply `f` to the inner value, re-guarding the result.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Measure::Value(x) => Measure::from_f64(f(x)),
            other => other,
        }
    }

    /// The finite value, if there is one
    pub fn value(self) -> Option<f64> {
        match self {
            Measure::Value(x) => Some(x),
            _ => None,
        }
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, Measure::Infinite)
    }

    pub fn is_invalid(self) -> bool {
        matches!(self, Measure::Invalid)
    }

    /// Format for display with a fixed number of decimals and an optional
    /// unit suffix.
    pub fn format(self, decimals: usize, unit: &str) -> String {
        match self {
            Measure::Value(x) if unit.is_empty() => format!("{:.*}", decimals, x),
            Measure::Value(x) => format!("{:.*} {}", decimals, x, unit),
            Measure::Infinite => "Infinite".to_string(),
            Measure::Invalid => "Invalid".to_string(),
        }
    }
}

impl From<f64> for Measure {
    fn from(x: f64) -> Self {
        Measure::from_f64(x)
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Measure::Value(x) => write!(f, "{}", x),
            Measure::Infinite => write!(f, "Infinite"),
            Measure::Invalid => write!(f, "Invalid"),
        }
    }
}
