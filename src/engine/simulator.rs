//! Synthetic price feed.
//!
//! There is no exchange behind this dashboard: the two futures walk a
//! seeded random path from a fixed session frame, and everything else
//! (global basket, agenda) is a static table re-issued each tick.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::constants::{wdo, win};
use crate::config::{DF, Precision, Volatility};
use crate::domain::Ticker;
use crate::models::{EconomicEvent, ImpactLevel, WinSnapshot};

/// Reference quotes for the macro panel. Static for the session: these do
/// not fluctuate tick-to-tick.
/// Columns: symbol, price, change, change %.
const GLOBAL_INDICES: &[(&str, f64, f64, f64)] = &[
    ("S&P 500", 4_450.20, 12.5, 0.28),
    ("NASDAQ", 15_300.10, -45.2, -0.30),
    ("DOW JONES", 34_500.80, 80.5, 0.23),
    ("VIX", 14.50, -0.2, -1.36),
    ("DXY", 104.20, 0.15, 0.14),
    ("US10Y", 4.25, 0.02, 0.47),
];

/// The day's scheduled releases.
/// Columns: id, time, name, impact, forecast.
const ECONOMIC_CALENDAR: &[(&str, &str, &str, ImpactLevel, Option<&str>)] = &[
    ("1", "09:30", "US Nonfarm Payrolls", ImpactLevel::High, Some("180k")),
    ("2", "10:00", "Industrial PMI", ImpactLevel::Medium, Some("52.0")),
    ("3", "14:00", "Fed Speech", ImpactLevel::High, None),
];

/// Owns the two walking price baselines and the RNG that drives them.
///
/// The baselines are the only state that survives across ticks; everything
/// the simulator returns is a fresh value snapshot.
pub struct MarketSimulator {
    win_price: f64,
    wdo_price: f64,
    rng: StdRng,
}

impl MarketSimulator {
    pub fn new() -> Self {
        Self {
            win_price: win::START_PRICE,
            wdo_price: wdo::START_PRICE,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded variant for reproducible runs (tests, headless snapshots).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            win_price: win::START_PRICE,
            wdo_price: wdo::START_PRICE,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One step of the walk: a uniform draw in [-0.5, 0.5) scaled by
    /// `price * volatility`, added to `price`, rounded to `precision`.
    ///
    /// Total over its domain. Zero volatility returns the rounded input.
    /// There is deliberately no clamp: over many ticks the walk is free to
    /// drift arbitrarily far from its starting point.
    pub fn step_price(&mut self, price: f64, volatility: Volatility, precision: Precision) -> f64 {
        let drift = self.rng.random_range(-0.5..0.5) * price * volatility.value();
        round_to(price + drift, precision)
    }

    /// Advances the WIN baseline and wraps it in the fixed session frame.
    pub fn win_snapshot(&mut self) -> WinSnapshot {
        self.win_price = self.step_price(self.win_price, win::VOLATILITY, win::PRECISION);

        let snap = WinSnapshot::from_session(
            self.win_price,
            win::SESSION_OPEN,
            win::SESSION_HIGH,
            win::SESSION_LOW,
            win::SESSION_VOLUME,
        );

        if DF.log_ticks {
            log::debug!(
                "WIN tick: {} ({:+.0} / {:+.2}%) sentiment={}",
                snap.price,
                snap.change,
                snap.change_percent,
                snap.sentiment
            );
        }

        snap
    }

    /// Advances the WDO baseline and quotes it against the fixed reference.
    pub fn wdo_snapshot(&mut self) -> Ticker {
        self.wdo_price = self.step_price(self.wdo_price, wdo::VOLATILITY, wdo::PRECISION);

        let quote = Ticker::from_reference(wdo::SYMBOL, self.wdo_price, wdo::REFERENCE_PRICE);

        if DF.log_ticks {
            log::debug!(
                "WDO tick: {:.3} ({:+.3} / {:+.2}%)",
                quote.price,
                quote.change,
                quote.change_percent
            );
        }

        quote
    }

    /// The macro basket, materialized from the static table.
    pub fn global_indices(&self) -> Vec<Ticker> {
        GLOBAL_INDICES
            .iter()
            .map(|&(symbol, price, change, pct)| Ticker::new(symbol, price, change, pct))
            .collect()
    }

    /// The day's agenda, materialized from the static table.
    pub fn economic_calendar(&self) -> Vec<EconomicEvent> {
        ECONOMIC_CALENDAR
            .iter()
            .map(|&(id, time, name, impact, forecast)| EconomicEvent {
                id: id.to_string(),
                time: time.to_string(),
                name: name.to_string(),
                impact,
                forecast: forecast.map(str::to_string),
                actual: None,
            })
            .collect()
    }

    /// Current WIN baseline (the price the next step walks from).
    pub fn win_price(&self) -> f64 {
        self.win_price
    }

    /// Current WDO baseline.
    pub fn wdo_price(&self) -> f64 {
        self.wdo_price
    }
}

impl Default for MarketSimulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to a fixed number of decimal digits.
fn round_to(value: f64, precision: Precision) -> f64 {
    let factor = precision.factor();
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_price_stays_inside_the_volatility_band() {
        let mut sim = MarketSimulator::with_seed(42);
        let vol = Volatility::new(0.01);

        for _ in 0..1_000 {
            let next = sim.step_price(100_000.0, vol, Precision::new(0));
            // Draw is in [-0.5, 0.5), so the move is at most half the
            // volatility either way (plus rounding to whole points).
            assert!(next >= 100_000.0 * (1.0 - 0.005) - 0.5);
            assert!(next <= 100_000.0 * (1.0 + 0.005) + 0.5);
        }
    }

    #[test]
    fn step_price_with_zero_volatility_only_rounds() {
        let mut sim = MarketSimulator::with_seed(7);
        assert_eq!(sim.step_price(118_500.4, Volatility::new(0.0), Precision::new(0)), 118_500.0);
        assert_eq!(sim.step_price(5.1504, Volatility::new(0.0), Precision::new(3)), 5.150);
    }

    #[test]
    fn step_price_respects_precision() {
        let mut sim = MarketSimulator::with_seed(1);

        let win = sim.step_price(118_500.0, Volatility::new(0.0002), Precision::new(0));
        assert_eq!(win, win.round());

        let wdo = sim.step_price(5.150, Volatility::new(0.0005), Precision::new(3));
        assert!(((wdo * 1000.0) - (wdo * 1000.0).round()).abs() < 1e-9);
    }

    #[test]
    fn baselines_carry_across_ticks() {
        let mut sim = MarketSimulator::with_seed(99);

        for _ in 0..10 {
            let snap = sim.win_snapshot();
            // The price just returned IS the baseline the next call walks from
            assert_eq!(snap.price, sim.win_price());

            let quote = sim.wdo_snapshot();
            assert_eq!(quote.price, sim.wdo_price());
        }
    }

    #[test]
    fn win_walk_moves_in_whole_points() {
        let mut sim = MarketSimulator::with_seed(3);
        for _ in 0..50 {
            let snap = sim.win_snapshot();
            assert_eq!(snap.price, snap.price.round());
        }
    }

    #[test]
    fn seeded_walks_are_reproducible() {
        let mut a = MarketSimulator::with_seed(1234);
        let mut b = MarketSimulator::with_seed(1234);
        for _ in 0..20 {
            assert_eq!(a.win_snapshot(), b.win_snapshot());
            assert_eq!(a.wdo_snapshot(), b.wdo_snapshot());
        }
    }

    #[test]
    fn global_basket_is_static_and_ordered() {
        let sim = MarketSimulator::with_seed(0);
        let basket = sim.global_indices();
        assert_eq!(basket.len(), 6);
        assert_eq!(basket[0].symbol, "S&P 500");
        assert_eq!(basket[3].symbol, "VIX");
        assert_eq!(basket, sim.global_indices());
    }

    #[test]
    fn basket_rows_respect_the_sign_invariant() {
        let sim = MarketSimulator::with_seed(0);
        for quote in sim.global_indices() {
            if quote.change == 0.0 {
                assert_eq!(quote.change_percent, 0.0);
            } else {
                assert_eq!(quote.change.signum(), quote.change_percent.signum());
            }
        }
    }

    #[test]
    fn calendar_has_three_fixed_events() {
        let sim = MarketSimulator::with_seed(0);
        let events = sim.economic_calendar();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].time, "09:30");
        assert_eq!(events[0].impact, ImpactLevel::High);
        assert_eq!(events[1].impact, ImpactLevel::Medium);
        assert!(events[2].forecast.is_none());
    }
}
