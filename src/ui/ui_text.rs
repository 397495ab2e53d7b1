pub struct UiText {
    // --- Header ---
    pub app_title: &'static str,
    pub app_title_accent: &'static str,
    pub live_badge: &'static str,
    pub refresh_button: &'static str,

    // --- Analyst box ---
    pub analyst_title: &'static str,
    pub label_risk: &'static str,
    pub label_scenario: &'static str,
    pub watch_title: &'static str,

    // --- Ticker cards ---
    pub label_high: &'static str,
    pub label_low: &'static str,
    pub label_volume: &'static str,
    pub label_correlation: &'static str,
    pub value_correlation: &'static str,

    // --- Sections ---
    pub levels_title: &'static str,
    pub label_resistance: &'static str,
    pub label_support: &'static str,
    pub label_current_price: &'static str,
    pub macro_title: &'static str,
    pub agenda_title: &'static str,
    pub label_forecast: &'static str,
    pub sparkline_title: &'static str,

    pub footer_disclaimer: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "DASHBOARD ",
    app_title_accent: "WIN",
    live_badge: "LIVE",
    refresh_button: "\u{21bb} Refresh",

    analyst_title: "WIN SMART ANALYSIS",
    label_risk: "Risk",
    label_scenario: "Scenario",
    watch_title: "WATCH LIST",

    label_high: "High",
    label_low: "Low",
    label_volume: "Vol",
    label_correlation: "Correlation",
    value_correlation: "Inverse (-0.85)",

    levels_title: "Key Levels (Intraday)",
    label_resistance: "RESISTANCES",
    label_support: "SUPPORTS",
    label_current_price: "Current price",
    macro_title: "Global Macro",
    agenda_title: "Economic Calendar",
    label_forecast: "Est:",
    sparkline_title: "WIN Intraday",

    footer_disclaimer: "Simulated data for demonstration. Do not use for live trading.",
};
