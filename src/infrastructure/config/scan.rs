//! Scan scheduling and housekeeping configuration.

use std::time::Duration as StdDuration;

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// How often to scan and when to retire records.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Seconds between scan cycles in watch mode (default: 300).
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Active records not re-verified for this long are deactivated (default: 900).
    #[serde(default = "default_stale_after_secs")]
    pub stale_after_secs: u64,
    /// Inactive records older than this are purged (default: 7).
    #[serde(default = "default_purge_after_days")]
    pub purge_after_days: u64,
}

const fn default_interval_secs() -> u64 {
    300
}

const fn default_stale_after_secs() -> u64 {
    900
}

const fn default_purge_after_days() -> u64 {
    7
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            stale_after_secs: default_stale_after_secs(),
            purge_after_days: default_purge_after_days(),
        }
    }
}

impl ScanConfig {
    #[must_use]
    pub fn interval(&self) -> StdDuration {
        StdDuration::from_secs(self.interval_secs)
    }

    #[must_use]
    pub fn stale_after(&self) -> Duration {
        i64::try_from(self.stale_after_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX)
    }

    #[must_use]
    pub fn purge_after(&self) -> Duration {
        i64::try_from(self.purge_after_days)
            .ok()
            .and_then(Duration::try_days)
            .unwrap_or(Duration::MAX)
    }
}
