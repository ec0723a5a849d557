//! Bookmaker odds feed port.

use async_trait::async_trait;

use crate::domain::RawEvent;
use crate::error::Error;

/// A source of raw events for one bookmaker.
///
/// Implementations return events as the bookmaker publishes them; the
/// scan cycle tags each event with [`BookmakerFeed::bookmaker`] before
/// normalization, so feeds need not set `bookmaker_name` themselves.
#[async_trait]
pub trait BookmakerFeed: Send + Sync {
    /// Display name of the bookmaker.
    fn bookmaker(&self) -> &str;

    /// Fetch the current event list.
    async fn fetch(&self) -> Result<Vec<RawEvent>, Error>;
}
