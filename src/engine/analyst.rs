//! Rule-table analyst.
//!
//! Deterministic given its inputs: the same WIN snapshot and basket always
//! produce the same insight. First matching rule wins.

use crate::config::constants::analysis;
use crate::domain::{Ticker, Trend};
use crate::models::{AnalystInsight, KeyLevels, RiskLevel, TradeDirection, WinSnapshot};

pub const SYMBOL_EQUITY: &str = "S&P 500";
pub const SYMBOL_VOLATILITY: &str = "VIX";

const SCENARIO_RISK_ON: &str = "Global Risk-On";
const SCENARIO_RISK_OFF: &str = "Risk Aversion";
const SCENARIO_NEUTRAL: &str = "Consolidation / Caution";

const SUMMARY_RISK_ON: &str =
    "External markets positive, feeding risk appetite. WIN follows the buying flow.";
const SUMMARY_RISK_OFF: &str =
    "Negative offshore session pressuring local indices. Technical selling favoured.";
const SUMMARY_NEUTRAL: &str =
    "Domestic and external pictures diverge. Wait for the range to resolve.";

const WATCH_LIST: &[&str] = &[
    "S&P 500 breaking its session high",
    "Dollar testing support",
    "Growing traded volume",
];

/// Maps the current tick to a discrete stance.
///
/// A missing S&P 500 or VIX row is not an error: the stance degrades to the
/// Wait branch and risk defaults to Medium.
pub fn generate_insight(win: &WinSnapshot, global: &[Ticker]) -> AnalystInsight {
    let equity = global.iter().find(|t| t.symbol == SYMBOL_EQUITY);
    let vix = global.iter().find(|t| t.symbol == SYMBOL_VOLATILITY);

    let (scenario, direction, summary) = match equity {
        Some(eq) if eq.change_percent > analysis::EQUITY_BULL_PCT && win.trend_short == Trend::Up => {
            (SCENARIO_RISK_ON, TradeDirection::Buy, SUMMARY_RISK_ON)
        }
        Some(eq)
            if eq.change_percent < analysis::EQUITY_BEAR_PCT && win.trend_short == Trend::Down =>
        {
            (SCENARIO_RISK_OFF, TradeDirection::Sell, SUMMARY_RISK_OFF)
        }
        _ => (SCENARIO_NEUTRAL, TradeDirection::Wait, SUMMARY_NEUTRAL),
    };

    let risk = match vix {
        Some(v) if v.price > analysis::VIX_HIGH_RISK => RiskLevel::High,
        _ => RiskLevel::Medium,
    };

    AnalystInsight {
        summary: summary.to_string(),
        direction,
        risk,
        scenario: scenario.to_string(),
        key_levels: KeyLevels::from_session(win.high, win.low),
        watch_list: WATCH_LIST.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win_with_change(change: f64) -> WinSnapshot {
        WinSnapshot::from_session(
            118_200.0 + change,
            118_200.0,
            118_900.0,
            118_100.0,
            15_400_000_000,
        )
    }

    fn basket(equity_pct: f64, vix_price: f64) -> Vec<Ticker> {
        let equity_change = equity_pct * 44.50; // consistent with a ~4450 reference
        vec![
            Ticker::new(SYMBOL_EQUITY, 4_450.20, equity_change, equity_pct),
            Ticker::new("NASDAQ", 15_300.10, -45.2, -0.30),
            Ticker::new(SYMBOL_VOLATILITY, vix_price, -0.2, -1.36),
        ]
    }

    #[test]
    fn bullish_alignment_reads_buy() {
        let insight = generate_insight(&win_with_change(250.0), &basket(0.5, 14.5));
        assert_eq!(insight.direction, TradeDirection::Buy);
        assert_eq!(insight.scenario, "Global Risk-On");
    }

    #[test]
    fn bearish_alignment_reads_sell() {
        let insight = generate_insight(&win_with_change(-250.0), &basket(-0.5, 14.5));
        assert_eq!(insight.direction, TradeDirection::Sell);
        assert_eq!(insight.scenario, "Risk Aversion");
    }

    #[test]
    fn equity_inside_the_band_reads_wait_regardless_of_trend() {
        for change in [250.0, -250.0] {
            let insight = generate_insight(&win_with_change(change), &basket(0.05, 14.5));
            assert_eq!(insight.direction, TradeDirection::Wait);
            assert_eq!(insight.scenario, "Consolidation / Caution");
        }
    }

    #[test]
    fn diverging_trend_breaks_the_alignment() {
        // Equity up but WIN trending down: neither aligned rule fires
        let insight = generate_insight(&win_with_change(-50.0), &basket(0.5, 14.5));
        assert_eq!(insight.direction, TradeDirection::Wait);
    }

    #[test]
    fn empty_basket_degrades_instead_of_failing() {
        let insight = generate_insight(&win_with_change(250.0), &[]);
        assert_eq!(insight.direction, TradeDirection::Wait);
        assert_eq!(insight.risk, RiskLevel::Medium);
    }

    #[test]
    fn vix_threshold_splits_risk() {
        let high = generate_insight(&win_with_change(0.0), &basket(0.0, 25.0));
        assert_eq!(high.risk, RiskLevel::High);

        let medium = generate_insight(&win_with_change(0.0), &basket(0.0, 15.0));
        assert_eq!(medium.risk, RiskLevel::Medium);
    }

    #[test]
    fn key_levels_ladder_from_the_session_range() {
        let insight = generate_insight(&win_with_change(0.0), &basket(0.0, 15.0));
        assert_eq!(insight.key_levels.resistance, vec![118_900.0, 119_050.0, 119_200.0]);
        assert_eq!(insight.key_levels.support, vec![118_100.0, 117_950.0, 117_800.0]);
    }

    #[test]
    fn insight_is_deterministic() {
        let win = win_with_change(250.0);
        let global = basket(0.5, 25.0);
        assert_eq!(generate_insight(&win, &global), generate_insight(&win, &global));
    }

    #[test]
    fn watch_list_is_fixed() {
        let a = generate_insight(&win_with_change(10.0), &basket(0.5, 25.0));
        let b = generate_insight(&win_with_change(-400.0), &[]);
        assert_eq!(a.watch_list, b.watch_list);
        assert_eq!(a.watch_list.len(), 3);
    }
}
