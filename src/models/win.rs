use {
    crate::{
        config::constants::win,
        domain::{Sentiment, Ticker, Trend},
    },
    serde::{Deserialize, Serialize},
};

/// Full WIN contract snapshot: the quote plus session context the analyst
/// reads (trend, sentiment, high/low for the level ladder).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinSnapshot {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,

    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,

    pub trend_short: Trend,
    pub trend_medium: Trend,
    pub sentiment: Sentiment,
}

impl WinSnapshot {
    /// Assembles a snapshot from a walked price and the fixed session frame.
    /// Trend and sentiment are derived here so they can never disagree with
    /// the change they describe.
    pub fn from_session(price: f64, open: f64, high: f64, low: f64, volume: u64) -> Self {
        let quote = Ticker::from_reference(win::SYMBOL, price, open);
        WinSnapshot {
            symbol: quote.symbol,
            price: quote.price,
            change: quote.change,
            change_percent: quote.change_percent,
            open,
            high,
            low,
            volume,
            trend_short: Trend::from_change(quote.change),
            trend_medium: win::TREND_MEDIUM,
            sentiment: Sentiment::from_change(quote.change, win::SENTIMENT_BAND),
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
    fn snapshot_derives_trend_and_sentiment_from_change() {
        let snap = WinSnapshot::from_session(118_450.0, 118_200.0, 118_900.0, 118_100.0, 1);
        assert_eq!(snap.change, 250.0);
        assert_eq!(snap.trend_short, Trend::Up);
        assert_eq!(snap.sentiment, Sentiment::Positive);

        let snap = WinSnapshot::from_session(118_150.0, 118_200.0, 118_900.0, 118_100.0, 1);
        assert_eq!(snap.change, -50.0);
        assert_eq!(snap.trend_short, Trend::Down);
        assert_eq!(snap.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn medium_trend_is_pinned() {
        let snap = WinSnapshot::from_session(110_000.0, 118_200.0, 118_900.0, 118_100.0, 1);
        assert_eq!(snap.trend_medium, Trend::Up);
    }

    #[test]
    fn change_percent_sign_invariant() {
        for price in [118_200.0, 118_600.0, 117_800.0] {
            let snap = WinSnapshot::from_session(price, 118_200.0, 118_900.0, 118_100.0, 1);
            if snap.change == 0.0 {
                assert_eq!(snap.change_percent, 0.0);
            } else {
                assert_eq!(snap.change.signum(), snap.change_percent.signum());
            }
        }
    }
}
