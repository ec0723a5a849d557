//! Bookmaker feed factory.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::JsonFileFeed;
use crate::infrastructure::config::settings::Config;
use crate::port::BookmakerFeed;

/// Build one feed per enabled `[[bookmakers]]` entry.
pub fn build_feeds(config: &Config) -> Vec<Arc<dyn BookmakerFeed>> {
    config
        .enabled_bookmakers()
        .map(|bookmaker| {
            let path = bookmaker.resolve_path(config.base_dir.as_deref());
            info!(bookmaker = %bookmaker.name, path = %path.display(), "Feed configured");
            Arc::new(JsonFileFeed::new(&bookmaker.name, path)) as Arc<dyn BookmakerFeed>
        })
        .collect()
}
