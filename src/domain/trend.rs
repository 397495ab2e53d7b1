use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::EnumIter;

/// Directional read of a price series over some window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    /// Short-term trend straight off the session change.
    /// The reference feed never emits Neutral here: flat counts as Down.
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 { Self::Up } else { Self::Down }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Up => write!(f, "Up"),
            Trend::Down => write!(f, "Down"),
            Trend::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Session mood derived from the magnitude of the WIN change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Classifies a change in index points against a symmetric band:
    /// beyond +band is Positive, beyond -band is Negative, inside is Neutral.
    pub fn from_change(change: f64, band: f64) -> Self {
        if change > band {
            Self::Positive
        } else if change < -band {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Neutral => write!(f, "Neutral"),
            Sentiment::Negative => write!(f, "Negative"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_from_change_sign() {
        assert_eq!(Trend::from_change(50.0), Trend::Up);
        assert_eq!(Trend::from_change(-50.0), Trend::Down);
        // Flat session reads as Down, matching the reference behaviour
        assert_eq!(Trend::from_change(0.0), Trend::Down);
    }

    #[test]
    fn sentiment_band_edges() {
        assert_eq!(Sentiment::from_change(150.0, 100.0), Sentiment::Positive);
        assert_eq!(Sentiment::from_change(-150.0, 100.0), Sentiment::Negative);
        assert_eq!(Sentiment::from_change(100.0, 100.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_change(-100.0, 100.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_change(0.0, 100.0), Sentiment::Neutral);
    }
}
