//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every simulator tick (price, change, sentiment) as it is produced.
    pub log_ticks: bool,

    /// Log the rule the analyst matched on each refresh.
    pub log_insights: bool,

    /// Log frame timings when a refresh + render goes slow.
    pub log_performance: bool,

    /// Log manual-refresh triggers from the UI.
    pub log_manual_refresh: bool,
}

pub const DF: LogFlags = LogFlags {
    log_ticks: false,
    log_insights: false,
    log_performance: false,
    log_manual_refresh: true,
};
