//! Simulation parameter newtypes (Immutable Blueprints)

use serde::{Deserialize, Serialize};

/// Per-tick volatility as a fraction of the current price.
/// A value of 0.0005 means each step moves the price by at most ±0.025%.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Volatility(f64);

impl Volatility {
    pub const fn new(val: f64) -> Self {
        let v = if val < 0.0 { 0.0 } else { val };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Volatility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}%", self.0 * 100.0)
    }
}

/// Number of decimal digits a simulated price is rounded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Precision(u32);

impl Precision {
    pub const fn new(digits: u32) -> Self {
        Self(digits)
    }

    #[inline]
    pub fn digits(self) -> u32 {
        self.0
    }

    /// Multiplier used to round to this precision: 10^digits.
    #[inline]
    pub fn factor(self) -> f64 {
        10f64.powi(self.0 as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volatility_clamps_negative_to_zero() {
        assert_eq!(Volatility::new(-0.5).value(), 0.0);
        assert_eq!(Volatility::new(0.0005).value(), 0.0005);
    }

    #[test]
    fn precision_factor() {
        assert_eq!(Precision::new(0).factor(), 1.0);
        assert_eq!(Precision::new(3).factor(), 1000.0);
    }
}
