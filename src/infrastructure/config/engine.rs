//! Detection engine configuration.

use serde::{Deserialize, Serialize};

use crate::application::engine::{
    DetectionConfig, DEFAULT_MIN_PROFIT_PERCENTAGE, DEFAULT_TOTAL_STAKE,
};

/// Detection thresholds and staking.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Minimum arbitrage percentage to report (e.g., 0.5 = 0.5%).
    #[serde(default = "default_min_profit_percentage")]
    pub min_profit_percentage: f64,
    /// Total stake split across the outcomes of each opportunity.
    #[serde(default = "default_stake")]
    pub default_stake: f64,
}

const fn default_min_profit_percentage() -> f64 {
    DEFAULT_MIN_PROFIT_PERCENTAGE
}

const fn default_stake() -> f64 {
    DEFAULT_TOTAL_STAKE
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_profit_percentage: default_min_profit_percentage(),
            default_stake: default_stake(),
        }
    }
}

impl From<&EngineConfig> for DetectionConfig {
    fn from(config: &EngineConfig) -> Self {
        Self {
            min_profit_percentage: config.min_profit_percentage,
            total_stake: config.default_stake,
        }
    }
}
