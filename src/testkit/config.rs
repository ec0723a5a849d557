//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.

use chrono::Duration;

use crate::application::cycle::CycleSettings;
use crate::application::engine::DetectionConfig;

/// Minimal valid TOML: just the required `[logging]` section.
pub const MINIMAL_TOML: &str = "[logging]\nlevel = \"info\"\nformat = \"pretty\"\n";

/// Detection that reports any positive arbitrage.
pub fn detect_all() -> DetectionConfig {
    DetectionConfig {
        min_profit_percentage: 0.0,
        total_stake: 10_000.0,
    }
}

/// Cycle settings with the default housekeeping ages and the given threshold.
pub fn cycle(min_profit_percentage: f64) -> CycleSettings {
    CycleSettings {
        detection: DetectionConfig {
            min_profit_percentage,
            ..DetectionConfig::default()
        },
        stale_after: Duration::minutes(15),
        purge_after: Duration::days(7),
    }
}

/// A config file body with one `[[bookmakers]]` entry per `(name, path)`.
pub fn toml_with_bookmakers(bookmakers: &[(&str, &str)]) -> String {
    let mut toml = MINIMAL_TOML.to_string();
    for (name, path) in bookmakers {
        toml.push_str(&format!(
            "\n[[bookmakers]]\nname = \"{name}\"\npath = '{path}'\n"
        ));
    }
    toml
}
