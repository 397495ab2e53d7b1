use {
    crate::config::constants::analysis,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Trading stance the analyst recommends for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeDirection {
    Buy,
    Sell,
    Wait,
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDirection::Buy => write!(f, "Buy"),
            TradeDirection::Sell => write!(f, "Sell"),
            TradeDirection::Wait => write!(f, "Wait"),
        }
    }
}

/// Session risk label. Low is a valid category the current rule table never
/// emits; it stays so the enum covers the full advisory vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::Low => write!(f, "Low"),
        }
    }
}

/// Support/resistance ladder around the session range.
/// Supports walk down from the low, resistances walk up from the high,
/// both in fixed steps of `analysis::LEVEL_STEP` index points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyLevels {
    pub support: Vec<f64>,
    pub resistance: Vec<f64>,
}

impl KeyLevels {
    pub fn from_session(high: f64, low: f64) -> Self {
        let step = analysis::LEVEL_STEP;
        KeyLevels {
            support: (0..analysis::LEVEL_COUNT)
                .map(|i| low - i as f64 * step)
                .collect(),
            resistance: (0..analysis::LEVEL_COUNT)
                .map(|i| high + i as f64 * step)
                .collect(),
        }
    }
}

/// The analyst's full output for one tick: stance, risk, scenario label,
/// level ladder and the fixed watch list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalystInsight {
    pub summary: String,
    pub direction: TradeDirection,
    pub risk: RiskLevel,
    pub scenario: String,
    pub key_levels: KeyLevels,
    pub watch_list: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_ladder_steps_away_from_the_range() {
        let levels = KeyLevels::from_session(118_900.0, 118_100.0);
        assert_eq!(levels.resistance, vec![118_900.0, 119_050.0, 119_200.0]);
        assert_eq!(levels.support, vec![118_100.0, 117_950.0, 117_800.0]);
    }
}
