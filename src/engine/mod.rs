mod analyst;
mod core;
mod simulator;
mod tick;

pub use analyst::{SYMBOL_EQUITY, SYMBOL_VOLATILITY, generate_insight};
pub use core::DashboardEngine;
pub use simulator::MarketSimulator;
pub use tick::MarketTick;
