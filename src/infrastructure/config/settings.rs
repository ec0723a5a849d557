//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file and validated after parsing.
//!
//! # Example
//!
//! ```no_run
//! use arbscout::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::engine::EngineConfig;
use super::feeds::BookmakerConfig;
use super::logging::LoggingConfig;
use super::scan::ScanConfig;
use crate::application::cycle::CycleSettings;
use crate::application::engine::DetectionConfig;
use crate::error::{ConfigError, Result};

/// Upper bound for the housekeeping ages, in days.
const MAX_RETENTION_DAYS: u64 = 36_500;

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Logging and tracing configuration.
    pub logging: LoggingConfig,

    /// Detection thresholds and staking.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Scan interval and housekeeping ages.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Bookmaker feeds.
    #[serde(default)]
    pub bookmakers: Vec<BookmakerConfig>,

    /// Directory of the loaded config file, for resolving feed paths.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., a negative stake)
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// Relative feed paths are resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse_toml(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that values are within acceptable ranges and that bookmaker
    /// names are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(invalid("logging.format", "must be \"pretty\" or \"json\""));
        }

        let min_profit = self.engine.min_profit_percentage;
        if !min_profit.is_finite() || min_profit < 0.0 {
            return Err(invalid(
                "engine.min_profit_percentage",
                "must be a finite number >= 0",
            ));
        }
        let stake = self.engine.default_stake;
        if !stake.is_finite() || stake <= 0.0 {
            return Err(invalid("engine.default_stake", "must be a finite number > 0"));
        }

        if self.scan.interval_secs == 0 {
            return Err(invalid("scan.interval_secs", "must be greater than 0"));
        }
        if self.scan.stale_after_secs == 0 || self.scan.stale_after_secs > MAX_RETENTION_DAYS * 86_400 {
            return Err(invalid(
                "scan.stale_after_secs",
                "must be greater than 0 and at most 100 years",
            ));
        }
        if self.scan.purge_after_days == 0 || self.scan.purge_after_days > MAX_RETENTION_DAYS {
            return Err(invalid(
                "scan.purge_after_days",
                "must be greater than 0 and at most 100 years",
            ));
        }

        let mut names = HashSet::new();
        for bookmaker in &self.bookmakers {
            let name = bookmaker.name.trim();
            if name.is_empty() {
                return Err(invalid("bookmakers.name", "must not be empty"));
            }
            if !names.insert(name.to_lowercase()) {
                return Err(invalid(
                    "bookmakers.name",
                    format!("duplicate bookmaker '{name}'"),
                ));
            }
            if bookmaker.path.as_os_str().is_empty() {
                return Err(invalid(
                    "bookmakers.path",
                    format!("missing feed path for '{name}'"),
                ));
            }
        }

        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Enabled bookmaker feeds.
    pub fn enabled_bookmakers(&self) -> impl Iterator<Item = &BookmakerConfig> {
        self.bookmakers.iter().filter(|b| b.enabled)
    }

    /// Detection thresholds for the engine.
    #[must_use]
    pub fn detection(&self) -> DetectionConfig {
        DetectionConfig::from(&self.engine)
    }

    /// Settings for the scan cycle.
    #[must_use]
    pub fn cycle_settings(&self) -> CycleSettings {
        CycleSettings {
            detection: self.detection(),
            stale_after: self.scan.stale_after(),
            purge_after: self.scan.purge_after(),
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> crate::error::Error {
    ConfigError::InvalidValue {
        field,
        reason: reason.into(),
    }
    .into()
}
