use {
    crate::{
        models::{ImpactLevel, RiskLevel, TradeDirection},
        ui::UI_CONFIG,
    },
    eframe::egui::Color32,
};

pub trait DirectionColor {
    fn color(&self) -> Color32;
}

impl DirectionColor for TradeDirection {
    fn color(&self) -> Color32 {
        match self {
            Self::Buy => UI_CONFIG.colors.primary,
            Self::Sell => UI_CONFIG.colors.danger,
            Self::Wait => UI_CONFIG.colors.warning,
        }
    }
}

impl DirectionColor for ImpactLevel {
    fn color(&self) -> Color32 {
        match self {
            Self::High => UI_CONFIG.colors.danger,
            Self::Medium => UI_CONFIG.colors.warning,
            Self::Low => UI_CONFIG.colors.text_secondary,
        }
    }
}

impl DirectionColor for RiskLevel {
    fn color(&self) -> Color32 {
        match self {
            Self::High => UI_CONFIG.colors.danger,
            Self::Medium => UI_CONFIG.colors.warning,
            Self::Low => UI_CONFIG.colors.primary,
        }
    }
}

/// Bull/bear coloring off a signed change. Zero counts as bullish, matching
/// how the quote rows render a flat session.
pub fn get_change_color(value: f64) -> Color32 {
    if value >= 0.0 {
        UI_CONFIG.colors.primary
    } else {
        UI_CONFIG.colors.danger
    }
}

pub fn apply_opacity(color: Color32, factor: f32) -> Color32 {
    color.linear_multiply(factor)
}
