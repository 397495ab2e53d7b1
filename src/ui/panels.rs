use eframe::egui::{
    Align, Color32, CornerRadius, Frame, Layout, Margin, RichText, Stroke, Ui, vec2,
};

use crate::domain::Ticker;
use crate::models::{AnalystInsight, EconomicEvent, KeyLevels, WinSnapshot};
use crate::ui::{DirectionColor, UI_CONFIG, UI_TEXT, apply_opacity, get_change_color};
use crate::utils::{format_compact_volume, format_points, format_signed_pct, group_thousands};

/// Small rounded pill with a tinted background, used for impact and
/// direction labels.
pub(crate) fn badge(ui: &mut Ui, text: &str, color: Color32) {
    Frame {
        fill: apply_opacity(color, 0.15),
        stroke: Stroke::new(1.0, color),
        corner_radius: CornerRadius::same(4),
        inner_margin: Margin::symmetric(8, 2),
        ..Default::default()
    }
    .show(ui, |ui| {
        ui.label(RichText::new(text).size(11.0).strong().color(color));
    });
}

fn section_header(ui: &mut Ui, title: &str) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(title)
                .size(15.0)
                .strong()
                .color(UI_CONFIG.colors.text),
        );
    });
    ui.separator();
    ui.add_space(4.0);
}

/// The analyst card: stance badge, summary, risk/scenario grid, watch list.
pub fn analyst_box(ui: &mut Ui, insight: &AnalystInsight) {
    let accent = insight.direction.color();

    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(UI_TEXT.analyst_title)
                    .size(13.0)
                    .strong()
                    .color(UI_CONFIG.colors.accent),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                badge(ui, &insight.direction.to_string().to_uppercase(), accent);
            });
        });

        ui.add_space(6.0);
        ui.label(
            RichText::new(&insight.summary)
                .size(14.0)
                .color(UI_CONFIG.colors.text),
        );
        ui.add_space(8.0);

        ui.columns(2, |cols| {
            metric_cell(&mut cols[0], UI_TEXT.label_risk, &insight.risk.to_string(), insight.risk.color());
            metric_cell(&mut cols[1], UI_TEXT.label_scenario, &insight.scenario, UI_CONFIG.colors.text);
        });

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(4.0);

        ui.label(
            RichText::new(UI_TEXT.watch_title)
                .size(11.0)
                .strong()
                .color(UI_CONFIG.colors.text_secondary),
        );
        for item in &insight.watch_list {
            ui.label(
                RichText::new(format!("\u{2022} {item}"))
                    .size(12.0)
                    .color(UI_CONFIG.colors.text_secondary),
            );
        }
    });
}

fn metric_cell(ui: &mut Ui, label: &str, value: &str, value_color: Color32) {
    Frame {
        fill: UI_CONFIG.colors.surface_highlight,
        corner_radius: CornerRadius::same(4),
        inner_margin: Margin::same(8),
        ..Default::default()
    }
    .show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label(
            RichText::new(label)
                .size(11.0)
                .color(UI_CONFIG.colors.text_secondary),
        );
        ui.label(RichText::new(value).size(13.0).strong().color(value_color));
    });
}

/// The WIN and WDO headline cards, side by side.
pub fn ticker_cards(ui: &mut Ui, win: &WinSnapshot, wdo: &Ticker) {
    ui.columns(2, |cols| {
        win_card(&mut cols[0], win);
        wdo_card(&mut cols[1], wdo);
    });
}

fn win_card(ui: &mut Ui, win: &WinSnapshot) {
    let color = get_change_color(win.change);

    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(&win.symbol)
                    .size(13.0)
                    .strong()
                    .color(UI_CONFIG.colors.text_secondary),
            );
            ui.label(
                RichText::new(format_points(win.price))
                    .size(26.0)
                    .strong()
                    .color(color),
            );
            ui.label(
                RichText::new(format!(
                    "{} {} ({:+.0})",
                    change_arrow(win.change),
                    format_signed_pct(win.change_percent),
                    win.change
                ))
                .size(13.0)
                .color(color),
            );
        });

        ui.add_space(8.0);
        ui.separator();

        ui.columns(3, |cols| {
            mini_stat(&mut cols[0], UI_TEXT.label_high, &format_points(win.high));
            mini_stat(&mut cols[1], UI_TEXT.label_low, &format_points(win.low));
            mini_stat(&mut cols[2], UI_TEXT.label_volume, &format_compact_volume(win.volume));
        });
    });
}

fn wdo_card(ui: &mut Ui, wdo: &Ticker) {
    let color = get_change_color(wdo.change);

    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(&wdo.symbol)
                    .size(13.0)
                    .strong()
                    .color(UI_CONFIG.colors.text_secondary),
            );
            ui.label(
                RichText::new(format!("{:.3}", wdo.price))
                    .size(26.0)
                    .strong()
                    .color(color),
            );
            ui.label(
                RichText::new(format!(
                    "{} {}",
                    change_arrow(wdo.change),
                    format_signed_pct(wdo.change_percent)
                ))
                .size(13.0)
                .color(color),
            );
        });

        ui.add_space(8.0);
        ui.separator();

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(UI_TEXT.label_correlation)
                    .size(10.0)
                    .color(UI_CONFIG.colors.text_secondary),
            );
            ui.label(
                RichText::new(UI_TEXT.value_correlation)
                    .size(12.0)
                    .strong()
                    .color(UI_CONFIG.colors.warning),
            );
        });
    });
}

fn mini_stat(ui: &mut Ui, label: &str, value: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(label)
                .size(10.0)
                .color(UI_CONFIG.colors.text_secondary),
        );
        ui.label(
            RichText::new(value)
                .size(12.0)
                .strong()
                .color(UI_CONFIG.colors.text),
        );
    });
}

fn change_arrow(change: f64) -> &'static str {
    if change >= 0.0 { "\u{25b2}" } else { "\u{25bc}" }
}

/// Support/resistance ladder around the current price marker.
pub fn key_levels_panel(ui: &mut Ui, levels: &KeyLevels) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        section_header(ui, UI_TEXT.levels_title);

        ui.columns(3, |cols| {
            cols[0].vertical_centered(|ui| {
                ui.label(
                    RichText::new(UI_TEXT.label_resistance)
                        .size(11.0)
                        .strong()
                        .color(UI_CONFIG.colors.danger),
                );
                // Farthest level on top, nearest just above the price line
                for level in levels.resistance.iter().rev() {
                    ui.label(
                        RichText::new(format_points(*level))
                            .size(13.0)
                            .color(UI_CONFIG.colors.text),
                    );
                }
            });

            cols[1].vertical_centered(|ui| {
                ui.add_space(18.0);
                let (rect, _) = ui.allocate_exact_size(vec2(64.0, 2.0), eframe::egui::Sense::hover());
                ui.painter().rect_filled(rect, 0.0, UI_CONFIG.colors.text);
                ui.label(
                    RichText::new(UI_TEXT.label_current_price)
                        .size(10.0)
                        .color(UI_CONFIG.colors.text_secondary),
                );
            });

            cols[2].vertical_centered(|ui| {
                ui.label(
                    RichText::new(UI_TEXT.label_support)
                        .size(11.0)
                        .strong()
                        .color(UI_CONFIG.colors.primary),
                );
                for level in &levels.support {
                    ui.label(
                        RichText::new(format_points(*level))
                            .size(13.0)
                            .color(UI_CONFIG.colors.text),
                    );
                }
            });
        });
    });
}

/// Macro basket list, one row per instrument.
pub fn macro_panel(ui: &mut Ui, global: &[Ticker]) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        section_header(ui, UI_TEXT.macro_title);

        for (i, quote) in global.iter().enumerate() {
            if i > 0 {
                ui.separator();
            }
            quote_row(ui, quote);
        }
    });
}

fn quote_row(ui: &mut Ui, quote: &Ticker) {
    let color = get_change_color(quote.change);

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                RichText::new(&quote.symbol)
                    .size(11.0)
                    .strong()
                    .color(UI_CONFIG.colors.text_secondary),
            );
            ui.label(
                RichText::new(group_thousands(quote.price, 2))
                    .size(14.0)
                    .strong()
                    .color(color),
            );
        });

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            badge(
                ui,
                &format!(
                    "{} {:.2}%",
                    change_arrow(quote.change),
                    quote.change_percent.abs()
                ),
                color,
            );
        });
    });
}

/// The day's agenda: time box, event name and forecast, impact badge.
pub fn agenda_panel(ui: &mut Ui, calendar: &[EconomicEvent]) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        section_header(ui, UI_TEXT.agenda_title);

        for (i, event) in calendar.iter().enumerate() {
            if i > 0 {
                ui.separator();
            }
            event_row(ui, event);
        }
    });
}

fn event_row(ui: &mut Ui, event: &EconomicEvent) {
    ui.horizontal(|ui| {
        Frame {
            fill: UI_CONFIG.colors.surface_highlight,
            corner_radius: CornerRadius::same(4),
            inner_margin: Margin::same(6),
            ..Default::default()
        }
        .show(ui, |ui| {
            ui.label(
                RichText::new(&event.time)
                    .size(12.0)
                    .strong()
                    .color(UI_CONFIG.colors.text),
            );
        });

        ui.vertical(|ui| {
            ui.label(
                RichText::new(&event.name)
                    .size(13.0)
                    .color(UI_CONFIG.colors.text),
            );
            let forecast = event.forecast.as_deref().unwrap_or("--");
            ui.label(
                RichText::new(format!("{} {}", UI_TEXT.label_forecast, forecast))
                    .size(11.0)
                    .color(UI_CONFIG.colors.text_secondary),
            );
        });

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            badge(ui, &event.impact.to_string().to_uppercase(), event.impact.color());
        });
    });
}

/// Disclaimer line at the bottom of the scroll.
pub fn footer(ui: &mut Ui) {
    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(UI_TEXT.footer_disclaimer)
                .size(11.0)
                .color(apply_opacity(UI_CONFIG.colors.text_secondary, 0.5)),
        );
    });
    ui.add_space(20.0);
}
