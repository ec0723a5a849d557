//! Bookmaker feed backed by a JSON file.
//!
//! The file holds a JSON array of raw events as a scraper would dump
//! them. It is re-read on every fetch, so an external process can keep
//! it fresh between cycles.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::RawEvent;
use crate::error::Error;
use crate::port::BookmakerFeed;

/// Reads one bookmaker's events from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileFeed {
    bookmaker: String,
    path: PathBuf,
}

impl JsonFileFeed {
    pub fn new(bookmaker: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            bookmaker: bookmaker.into(),
            path: path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl BookmakerFeed for JsonFileFeed {
    fn bookmaker(&self) -> &str {
        &self.bookmaker
    }

    async fn fetch(&self) -> Result<Vec<RawEvent>, Error> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::feed(&self.bookmaker, format!("{}: {e}", self.path.display())))?;

        let events = RawEvent::parse_feed(&content)
            .map_err(|e| Error::feed(&self.bookmaker, format!("{}: {e}", self.path.display())))?;

        debug!(bookmaker = %self.bookmaker, path = %self.path.display(), events = events.len(), "Read feed file");
        Ok(events)
    }
}
