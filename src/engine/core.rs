use crate::config::DF;
use crate::engine::analyst::generate_insight;
use crate::engine::simulator::MarketSimulator;
use crate::engine::tick::MarketTick;

/// Synchronous engine facade the display harness drives.
///
/// One `refresh()` per tick: walk the futures, re-issue the static tables,
/// run the analyst over the result. Every call is cheap and non-blocking;
/// the harness owns all scheduling.
pub struct DashboardEngine {
    simulator: MarketSimulator,
}

impl DashboardEngine {
    pub fn new() -> Self {
        Self {
            simulator: MarketSimulator::new(),
        }
    }

    /// Seeded variant: identical tick sequence for the same seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            simulator: MarketSimulator::with_seed(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::with_seed(s),
            None => Self::new(),
        }
    }

    /// Produces the next full tick.
    pub fn refresh(&mut self) -> MarketTick {
        let global = self.simulator.global_indices();
        let wdo = self.simulator.wdo_snapshot();
        let win = self.simulator.win_snapshot();
        let calendar = self.simulator.economic_calendar();

        let insight = generate_insight(&win, &global);

        if DF.log_insights {
            log::debug!(
                "insight: {} / {} risk ({})",
                insight.direction,
                insight.risk,
                insight.scenario
            );
        }

        MarketTick {
            win,
            wdo,
            global,
            calendar,
            insight,
        }
    }
}

impl Default for DashboardEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TradeDirection;

    #[test]
    fn refresh_bundles_a_complete_tick() {
        let mut engine = DashboardEngine::with_seed(5);
        let tick = engine.refresh();

        assert_eq!(tick.global.len(), 6);
        assert_eq!(tick.calendar.len(), 3);
        assert_eq!(tick.win.symbol, "WIN Fut");
        assert_eq!(tick.wdo.symbol, "WDO Fut");
        // The static basket has the S&P up 0.28% (> 0.2), so direction
        // follows WIN's short trend alone
        let expected = if tick.win.change > 0.0 {
            TradeDirection::Buy
        } else {
            TradeDirection::Wait
        };
        assert_eq!(tick.insight.direction, expected);
    }

    #[test]
    fn seeded_engines_produce_identical_tick_streams() {
        let mut a = DashboardEngine::with_seed(11);
        let mut b = DashboardEngine::with_seed(11);
        for _ in 0..5 {
            let ta = a.refresh();
            let tb = b.refresh();
            assert_eq!(ta.win, tb.win);
            assert_eq!(ta.wdo, tb.wdo);
            assert_eq!(ta.insight, tb.insight);
        }
    }
}
