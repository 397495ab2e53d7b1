use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub background: Color32,
    pub surface: Color32,
    pub surface_highlight: Color32,
    pub text: Color32,
    pub text_secondary: Color32,
    /// Green / bullish
    pub primary: Color32,
    /// Red / bearish
    pub danger: Color32,
    /// Amber / neutral
    pub warning: Color32,
    /// Purple / highlights
    pub accent: Color32,
    pub border: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub sparkline_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        background: Color32::from_rgb(18, 18, 20),
        surface: Color32::from_rgb(32, 32, 36),
        surface_highlight: Color32::from_rgb(41, 41, 46),
        text: Color32::from_rgb(225, 225, 230),
        text_secondary: Color32::from_rgb(168, 168, 179),
        primary: Color32::from_rgb(0, 179, 126),
        danger: Color32::from_rgb(247, 90, 104),
        warning: Color32::from_rgb(251, 169, 76),
        accent: Color32::from_rgb(130, 87, 229),
        border: Color32::from_rgb(50, 50, 56),
    },
    sparkline_height: 72.0,
};

impl UiConfig {
    /// Frame for the content cards (analyst box, tickers, sections)
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.surface,
            stroke: Stroke::new(1.0, self.colors.border),
            corner_radius: CornerRadius::same(8),
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for the Top header (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for the bottom tape strip (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(0, 0),
            ..Default::default()
        }
    }

    /// Frame for the scrolling content area
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(12, 8),
            ..Default::default()
        }
    }
}
