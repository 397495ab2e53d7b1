use serde::{Deserialize, Serialize};
use std::fmt;

/// Expected market impact of a scheduled release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpactLevel::High => write!(f, "High"),
            ImpactLevel::Medium => write!(f, "Medium"),
            ImpactLevel::Low => write!(f, "Low"),
        }
    }
}

/// One row of the economic agenda. Static for the session; the engine never
/// mutates these after constructing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicEvent {
    pub id: String,
    /// Scheduled wall-clock time, "HH:MM".
    pub time: String,
    pub name: String,
    pub impact: ImpactLevel,
    pub forecast: Option<String>,
    pub actual: Option<String>,
}
