use serde::{Deserialize, Serialize};

/// A single quoted instrument: last price plus its move from a reference.
///
/// Invariant: `change_percent` carries the same sign as `change`, and is
/// zero exactly when `change` is zero. `from_reference` guarantees this by
/// deriving both from the same delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

impl Ticker {
    /// Raw constructor for quotes whose change/percent come pre-computed
    /// (the static global basket).
    pub fn new(symbol: impl Into<String>, price: f64, change: f64, change_percent: f64) -> Self {
        Ticker {
            symbol: symbol.into(),
            price,
            change,
            change_percent,
        }
    }

    /// Builds a quote by measuring `price` against a fixed reference
    /// (session open or prior close).
    pub fn from_reference(symbol: impl Into<String>, price: f64, reference: f64) -> Self {
        let change = price - reference;
        Ticker {
            symbol: symbol.into(),
            price,
            change,
            change_percent: (change / reference) * 100.0,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.change >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_reference_derives_change_and_percent() {
        let t = Ticker::from_reference("WDO Fut", 5.202, 5.10);
        assert!((t.change - 0.102).abs() < 1e-12);
        assert!((t.change_percent - 2.0).abs() < 1e-12);
    }

    #[test]
    fn change_percent_sign_matches_change() {
        for price in [5.0, 5.10, 5.25, 4.80] {
            let t = Ticker::from_reference("WDO Fut", price, 5.10);
            if t.change == 0.0 {
                assert_eq!(t.change_percent, 0.0);
            } else {
                assert_eq!(t.change.signum(), t.change_percent.signum());
            }
        }
    }
}
