mod app;
mod panels;
mod sparkline;
mod styles;
mod tape;
mod ui_config;
mod ui_text;

pub use app::DashboardApp;

pub(crate) use styles::{DirectionColor, apply_opacity, get_change_color};
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
