//! Bookmaker feed configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One `[[bookmakers]]` entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookmakerConfig {
    /// Display name; tags every event read from this feed.
    pub name: String,
    /// JSON feed file. Relative paths resolve against the config file's directory.
    pub path: PathBuf,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl BookmakerConfig {
    /// The feed path, resolved against `base_dir` when relative.
    #[must_use]
    pub fn resolve_path(&self, base_dir: Option<&Path>) -> PathBuf {
        match base_dir {
            Some(base) if self.path.is_relative() => base.join(&self.path),
            _ => self.path.clone(),
        }
    }
}
