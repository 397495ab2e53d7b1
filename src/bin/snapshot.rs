//! Headless snapshot of the dashboard feed.
//!
//! Runs the engine for N ticks without the GUI and prints the final tick,
//! either as tables or as JSON. Handy for eyeballing the simulation and for
//! piping a tick into other tools.

use anyhow::Result;
use clap::Parser;
use itertools::Itertools;
use tabled::{Table, Tabled, settings::Style};

use win_dashboard::DashboardEngine;
use win_dashboard::utils::{format_compact_volume, format_points, format_signed_pct};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// How many ticks to advance the simulation before printing
    #[arg(long, default_value_t = 1)]
    ticks: u64,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the tick as pretty JSON instead of tables
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Tabled)]
struct QuoteRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Change")]
    change: String,
    #[tabled(rename = "Change %")]
    change_percent: String,
}

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Event")]
    name: String,
    #[tabled(rename = "Impact")]
    impact: String,
    #[tabled(rename = "Forecast")]
    forecast: String,
}

fn main() -> Result<()> {
    // 1. Setup Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // 2. Run the simulation forward
    let mut engine = DashboardEngine::from_seed(args.seed);
    let mut tick = engine.refresh();
    for _ in 1..args.ticks.max(1) {
        tick = engine.refresh();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tick)?);
        return Ok(());
    }

    log::info!("Dashboard snapshot after {} tick(s)", args.ticks.max(1));

    // 3. Futures
    let futures = vec![
        QuoteRow {
            symbol: tick.win.symbol.clone(),
            price: format_points(tick.win.price),
            change: format!("{:+.0}", tick.win.change),
            change_percent: format_signed_pct(tick.win.change_percent),
        },
        QuoteRow {
            symbol: tick.wdo.symbol.clone(),
            price: format!("{:.3}", tick.wdo.price),
            change: format!("{:+.3}", tick.wdo.change),
            change_percent: format_signed_pct(tick.wdo.change_percent),
        },
    ];
    println!("{}", Table::new(futures).with(Style::rounded()));
    println!(
        "WIN session: open {} / high {} / low {} / vol {}",
        format_points(tick.win.open),
        format_points(tick.win.high),
        format_points(tick.win.low),
        format_compact_volume(tick.win.volume),
    );
    println!(
        "Trend short: {} | Trend medium: {} | Sentiment: {}",
        tick.win.trend_short, tick.win.trend_medium, tick.win.sentiment
    );
    println!();

    // 4. Global basket
    let basket: Vec<QuoteRow> = tick
        .global
        .iter()
        .map(|q| QuoteRow {
            symbol: q.symbol.clone(),
            price: format!("{:.2}", q.price),
            change: format!("{:+.2}", q.change),
            change_percent: format_signed_pct(q.change_percent),
        })
        .collect();
    println!("{}", Table::new(basket).with(Style::rounded()));
    println!();

    // 5. Agenda
    let agenda: Vec<EventRow> = tick
        .calendar
        .iter()
        .map(|e| EventRow {
            time: e.time.clone(),
            name: e.name.clone(),
            impact: e.impact.to_string(),
            forecast: e.forecast.clone().unwrap_or_else(|| "--".to_string()),
        })
        .collect();
    println!("{}", Table::new(agenda).with(Style::rounded()));
    println!();

    // 6. Analyst read
    let insight = &tick.insight;
    println!(
        "{} | {} risk | {}",
        insight.direction, insight.risk, insight.scenario
    );
    println!("{}", insight.summary);
    println!(
        "Support: {} | Resistance: {}",
        insight.key_levels.support.iter().map(|l| format_points(*l)).join(" / "),
        insight.key_levels.resistance.iter().map(|l| format_points(*l)).join(" / "),
    );
    println!("Watching: {}", insight.watch_list.iter().join("; "));

    Ok(())
}
