mod fmt_utils;
mod time_utils;

pub use fmt_utils::{format_compact_volume, format_points, format_signed_pct, group_thousands};
pub use time_utils::today_long_date;
