use serde::Serialize;

use crate::domain::Ticker;
use crate::models::{AnalystInsight, EconomicEvent, WinSnapshot};

/// Everything one refresh produces, bundled for the display layer.
/// A fresh tick fully replaces the previous one; nothing is mutated in place.
#[derive(Debug, Clone, Serialize)]
pub struct MarketTick {
    pub win: WinSnapshot,
    pub wdo: Ticker,
    pub global: Vec<Ticker>,
    pub calendar: Vec<EconomicEvent>,
    pub insight: AnalystInsight,
}
