use chrono::Local;

/// Long-form local date for the dashboard header, e.g. "Friday, 7 August".
pub fn today_long_date() -> String {
    Local::now().format("%A, %-d %B").to_string()
}
