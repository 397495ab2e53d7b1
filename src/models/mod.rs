mod event;
mod insight;
mod win;

pub use {
    event::{EconomicEvent, ImpactLevel},
    insight::{AnalystInsight, KeyLevels, RiskLevel, TradeDirection},
    win::WinSnapshot,
};
