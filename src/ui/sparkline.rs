use std::collections::VecDeque;

use eframe::egui::{Ui, Vec2b};
use egui_plot::{Line, Plot, PlotPoints};

use crate::ui::{UI_CONFIG, get_change_color};

/// Minimal intraday line of the recent WIN closes. Interaction is disabled:
/// this is a glanceable widget, not a chart.
pub fn render_sparkline(ui: &mut Ui, history: &VecDeque<f64>) {
    if history.len() < 2 {
        return;
    }

    let first = history.front().copied().unwrap_or_default();
    let last = history.back().copied().unwrap_or_default();
    let color = get_change_color(last - first);

    let points = PlotPoints::new(
        history
            .iter()
            .enumerate()
            .map(|(i, price)| [i as f64, *price])
            .collect(),
    );

    Plot::new("win_sparkline")
        .height(UI_CONFIG.sparkline_height)
        .show_axes(Vec2b { x: false, y: true })
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_double_click_reset(false)
        .label_formatter(|_, _| String::new())
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new("", points).color(color).width(1.5));
        });
}
