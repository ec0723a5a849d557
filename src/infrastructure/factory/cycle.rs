//! Scan cycle wiring.

use std::sync::Arc;

use tracing::warn;

use super::feed::build_feeds;
use super::notifier::build_notifier_registry;
use crate::adapter::outbound::MemoryStore;
use crate::application::cycle::ScanCycle;
use crate::infrastructure::config::settings::Config;

/// Build a scan cycle over the configured feeds and a fresh in-memory store.
pub fn build_scan_cycle(config: &Config) -> ScanCycle<MemoryStore> {
    let feeds = build_feeds(config);
    if feeds.is_empty() {
        warn!("No enabled bookmakers in configuration");
    }

    ScanCycle::new(
        feeds,
        Arc::new(MemoryStore::new()),
        Arc::new(build_notifier_registry(config)),
        config.cycle_settings(),
    )
}
