use eframe::egui::{Color32, FontId, Pos2, Rect, Sense, Ui, Vec2};

use crate::domain::Ticker;
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::{format_signed_pct, group_thousands};

pub struct TapeConfig {
    pub height: f32,
    pub speed_pixels_per_sec: f32,
    pub font_size: f32,
    pub item_spacing: f32,
    pub background_color: Color32,
}

pub const TAPE: TapeConfig = TapeConfig {
    height: 18.0,
    speed_pixels_per_sec: 60.0, // Keep at 60 - perfect number for 60fps monitors etc.
    font_size: 10.0,
    item_spacing: 40.0,
    background_color: Color32::from_rgb(10, 10, 15), // Very dark
};

struct TapeItem {
    text: String,
    color: Color32,
}

/// Scrolling quote strip along the bottom of the dashboard.
/// Items rebuild on every refresh; the scroll offset is the only state
/// carried frame-to-frame.
pub struct TapeState {
    // Horizontal offset (pixels)
    offset: f32,
    items: Vec<TapeItem>,
    is_hovered: bool,
}

impl Default for TapeState {
    fn default() -> Self {
        Self {
            offset: 0.0,
            items: Vec::new(),
            is_hovered: false,
        }
    }
}

impl TapeState {
    /// Rebuilds the strip from the latest basket, plus the standing
    /// disclaimer message.
    pub fn update_data(&mut self, global: &[Ticker]) {
        self.items.clear();

        for quote in global {
            let color = if quote.change > f64::EPSILON {
                UI_CONFIG.colors.primary
            } else if quote.change < -f64::EPSILON {
                UI_CONFIG.colors.danger
            } else {
                UI_CONFIG.colors.text_secondary
            };
            self.items.push(TapeItem {
                text: format!(
                    "{} {} ({})",
                    quote.symbol,
                    group_thousands(quote.price, 2),
                    format_signed_pct(quote.change_percent)
                ),
                color,
            });
        }

        self.items.push(TapeItem {
            text: UI_TEXT.footer_disclaimer.to_string(),
            color: UI_CONFIG.colors.warning,
        });
    }

    pub fn render(&mut self, ui: &mut Ui) {
        let rect = ui.available_rect_before_wrap();
        let panel_rect = Rect::from_min_size(rect.min, Vec2::new(rect.width(), TAPE.height));
        let response = ui.allocate_rect(panel_rect, Sense::hover());
        ui.painter().rect_filled(panel_rect, 0.0, TAPE.background_color); // Background

        self.is_hovered = response.hovered();

        if !self.is_hovered {
            // Clamp dt so a lag spike slows the tape instead of teleporting it
            let dt = ui.input(|i| i.stable_dt).min(0.05);
            self.offset -= TAPE.speed_pixels_per_sec * dt;
        }

        // Clip Content (Don't draw outside panel)
        let painter = ui.painter().with_clip_rect(panel_rect);
        let font_id = FontId::monospace(TAPE.font_size);

        // Pass 1: total width, so we know when to wrap
        let mut total_width = 0.0;
        for item in &self.items {
            let galley = painter.layout_no_wrap(item.text.clone(), font_id.clone(), item.color);
            total_width += galley.size().x + TAPE.item_spacing;
        }

        if total_width < 1.0 {
            return; // No data
        }

        // Wrap offset logic (Infinite Scroll): keep it negative-flowing
        self.offset %= total_width;
        if self.offset > 0.0 {
            self.offset -= total_width;
        }

        // Pass 2: draw as many loops as it takes to fill the screen
        let screen_width = panel_rect.width();
        let start_pos = panel_rect.min;
        let loops_needed = (screen_width / total_width).ceil() as i32 + 2;

        for loop_idx in 0..loops_needed {
            let mut loop_x = self.offset + (loop_idx as f32 * total_width);

            for item in &self.items {
                let galley = painter.layout_no_wrap(item.text.clone(), font_id.clone(), item.color);
                let w = galley.size().x;
                let h = galley.size().y;

                // Draw if visible
                if loop_x + w > 0.0 && loop_x < screen_width {
                    let x_snapped = (start_pos.x + loop_x).round();
                    let y_snapped = (start_pos.y + (TAPE.height - h) / 2.0).round();
                    painter.galley(Pos2::new(x_snapped, y_snapped), galley, item.color);
                }

                loop_x += w + TAPE.item_spacing;
            }
        }

        // Keep animating if we are scrolling
        if !self.is_hovered {
            ui.ctx().request_repaint();
        }
    }
}
