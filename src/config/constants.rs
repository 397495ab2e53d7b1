use std::time::Duration;

// Top Level Constants
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(3); // Dashboard tick period. Used throughout app from this point forwards.

/// How many WIN closes the intraday sparkline keeps around.
pub const PRICE_HISTORY_LEN: usize = 120;

pub mod win {
    use crate::config::{Precision, Volatility};
    use crate::domain::Trend;

    pub const SYMBOL: &str = "WIN Fut";

    /// Baseline the random walk starts from at process start.
    pub const START_PRICE: f64 = 118_500.0;
    /// Fixed session open, the reference every change is measured against.
    pub const SESSION_OPEN: f64 = 118_200.0;
    pub const SESSION_HIGH: f64 = 118_900.0;
    pub const SESSION_LOW: f64 = 118_100.0;
    pub const SESSION_VOLUME: u64 = 15_400_000_000;

    pub const VOLATILITY: Volatility = Volatility::new(0.0002);
    pub const PRECISION: Precision = Precision::new(0); // WIN moves in whole index points

    /// Medium-term trend is not simulated yet; the reference feed pins it.
    pub const TREND_MEDIUM: Trend = Trend::Up;

    /// |change| beyond this many points flips sentiment away from Neutral.
    pub const SENTIMENT_BAND: f64 = 100.0;
}

pub mod wdo {
    use crate::config::{Precision, Volatility};

    pub const SYMBOL: &str = "WDO Fut";

    pub const START_PRICE: f64 = 5.150;
    /// Fixed reference the daily change is measured against.
    pub const REFERENCE_PRICE: f64 = 5.10;

    pub const VOLATILITY: Volatility = Volatility::new(0.0005);
    pub const PRECISION: Precision = Precision::new(3);
}

pub mod analysis {
    /// S&P 500 daily % move that reads as risk-on when WIN trends up.
    pub const EQUITY_BULL_PCT: f64 = 0.2;
    /// S&P 500 daily % move that reads as risk-off when WIN trends down.
    pub const EQUITY_BEAR_PCT: f64 = -0.2;

    /// VIX print above this is a high-risk session.
    pub const VIX_HIGH_RISK: f64 = 20.0;

    /// Support/resistance ladder: offsets in index points from the session low/high.
    pub const LEVEL_STEP: f64 = 150.0;
    pub const LEVEL_COUNT: usize = 3;
}
