use std::collections::VecDeque;
use std::time::{Duration, Instant};

use eframe::Frame;
use eframe::egui::{
    Align, CentralPanel, Context, Key, Layout, RichText, ScrollArea, TopBottomPanel, Visuals,
};

use crate::Cli;
use crate::config::{DF, PRICE_HISTORY_LEN, REFRESH_INTERVAL};
use crate::engine::{DashboardEngine, MarketTick};
use crate::ui::panels;
use crate::ui::sparkline::render_sparkline;
use crate::ui::tape::{TAPE, TapeState};
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::today_long_date;

/// The dashboard shell: owns the engine, the latest tick, and the refresh
/// clock. The engine itself knows nothing about scheduling; every tick is a
/// plain synchronous call made from here.
pub struct DashboardApp {
    engine: DashboardEngine,
    tick: MarketTick,
    last_refresh: Instant,
    refresh_every: Duration,
    win_history: VecDeque<f64>,
    tape: TapeState,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let mut engine = DashboardEngine::from_seed(args.seed);

        // First full tick before the first frame: the UI never renders
        // without a complete data set.
        let tick = engine.refresh();

        let mut win_history = VecDeque::with_capacity(PRICE_HISTORY_LEN);
        win_history.push_back(tick.win.price);

        let mut tape = TapeState::default();
        tape.update_data(&tick.global);

        let refresh_every = if args.refresh_secs > 0 {
            Duration::from_secs(args.refresh_secs)
        } else {
            REFRESH_INTERVAL
        };

        Self {
            engine,
            tick,
            last_refresh: Instant::now(),
            refresh_every,
            win_history,
            tape,
        }
    }

    fn do_refresh(&mut self) {
        self.tick = self.engine.refresh();

        if self.win_history.len() >= PRICE_HISTORY_LEN {
            self.win_history.pop_front();
        }
        self.win_history.push_back(self.tick.win.price);

        self.tape.update_data(&self.tick.global);
        self.last_refresh = Instant::now();
    }

    fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        if ctx.input(|i| i.key_pressed(Key::R)) {
            if DF.log_manual_refresh {
                log::info!("Manual refresh via keyboard");
            }
            self.do_refresh();
        }
    }

    fn render_header(&mut self, ctx: &Context) {
        TopBottomPanel::top("header")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.spacing_mut().item_spacing.x = 0.0;
                            ui.label(
                                RichText::new(UI_TEXT.app_title)
                                    .size(22.0)
                                    .strong()
                                    .color(UI_CONFIG.colors.text),
                            );
                            ui.label(
                                RichText::new(UI_TEXT.app_title_accent)
                                    .size(22.0)
                                    .strong()
                                    .color(UI_CONFIG.colors.primary),
                            );
                        });
                        ui.label(
                            RichText::new(today_long_date())
                                .size(11.0)
                                .color(UI_CONFIG.colors.text_secondary),
                        );
                    });

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button(UI_TEXT.refresh_button).clicked() {
                            if DF.log_manual_refresh {
                                log::info!("Manual refresh via button");
                            }
                            self.do_refresh();
                        }
                        panels::badge(ui, UI_TEXT.live_badge, UI_CONFIG.colors.primary);
                    });
                });
            });
    }

    fn render_tape(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("tape")
            .frame(UI_CONFIG.bottom_panel_frame())
            .exact_height(TAPE.height)
            .show(ctx, |ui| {
                self.tape.render(ui);
            });
    }

    fn render_content(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    panels::analyst_box(ui, &self.tick.insight);
                    ui.add_space(10.0);

                    panels::ticker_cards(ui, &self.tick.win, &self.tick.wdo);
                    ui.add_space(10.0);

                    UI_CONFIG.card_frame().show(ui, |ui| {
                        ui.label(
                            RichText::new(UI_TEXT.sparkline_title)
                                .size(12.0)
                                .strong()
                                .color(UI_CONFIG.colors.text_secondary),
                        );
                        render_sparkline(ui, &self.win_history);
                    });
                    ui.add_space(10.0);

                    panels::key_levels_panel(ui, &self.tick.insight.key_levels);
                    ui.add_space(10.0);

                    panels::macro_panel(ui, &self.tick.global);
                    ui.add_space(10.0);

                    panels::agenda_panel(ui, &self.tick.calendar);

                    panels::footer(ui);
                });
            });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let start = Instant::now();

        if self.last_refresh.elapsed() >= self.refresh_every {
            self.do_refresh();
        }

        self.handle_global_shortcuts(ctx);

        self.render_header(ctx);
        self.render_tape(ctx);
        self.render_content(ctx);

        if DF.log_performance {
            let frame_us = start.elapsed().as_micros();
            if frame_us > 10_000 {
                log::warn!("SLOW FRAME: {}us", frame_us);
            }
        }

        // Wake up in time for the next tick. The schedule lives inside this
        // update loop, so closing the view tears it down with the app.
        let remaining = self.refresh_every.saturating_sub(self.last_refresh.elapsed());
        ctx.request_repaint_after(remaining);
    }
}

/// Sets up custom visuals for the entire application
fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    // Customize the dark theme
    visuals.window_fill = UI_CONFIG.colors.background;
    visuals.panel_fill = UI_CONFIG.colors.background;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.text_secondary;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.text_secondary;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.text;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.text;

    // Set the custom visuals
    ctx.set_visuals(visuals);
}
