#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for snapshot.rs)
pub use engine::{DashboardEngine, MarketTick};
pub use ui::DashboardApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seconds between automatic refreshes
    #[arg(long, default_value_t = config::REFRESH_INTERVAL.as_secs())]
    pub refresh_secs: u64,

    /// Seed the simulator for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> DashboardApp {
    DashboardApp::new(cc, args)
}
