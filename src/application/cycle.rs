//! Scan cycle orchestration.
//!
//! One cycle fetches every feed concurrently, runs detection over the
//! combined events, reconciles the findings with the store and notifies
//! about new opportunities. Failures are collected into the
//! [`CycleReport`]; a cycle never aborts because one bookmaker is down.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use futures_util::future::join_all;
use serde::Serialize;
use tracing::{info, warn};

use super::engine::{detect, reconcile, DetectionConfig};
use crate::domain::{Opportunity, RawEvent};
use crate::error::Result;
use crate::port::{
    BookmakerFeed, CycleEvent, Event, NotifierRegistry, OpportunityEvent, OpportunityStore,
};

const STORE_SOURCE: &str = "store";

/// Tunables for a [`ScanCycle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleSettings {
    pub detection: DetectionConfig,
    /// Active records not verified for this long are deactivated.
    pub stale_after: Duration,
    /// Inactive records detected this long ago are purged.
    pub purge_after: Duration,
}

impl Default for CycleSettings {
    fn default() -> Self {
        Self {
            detection: DetectionConfig::default(),
            stale_after: Duration::seconds(900),
            purge_after: Duration::days(7),
        }
    }
}

/// A failure recorded during a cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleError {
    /// Bookmaker name, or `store`.
    pub source: String,
    pub message: String,
}

/// Outcome of one scan cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleReport {
    pub timestamp: DateTime<Utc>,
    /// Feeds fetched this cycle, failed ones included.
    pub bookmakers_processed: usize,
    pub events_scraped: usize,
    pub opportunities_found: usize,
    pub inserted: usize,
    pub updated: usize,
    pub errors: Vec<CycleError>,
    pub success: bool,
}

/// Outcome of a housekeeping pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HousekeepingReport {
    pub deactivated: usize,
    pub purged: usize,
}

/// Scan cycle over a set of feeds and a store.
pub struct ScanCycle<S> {
    feeds: Vec<Arc<dyn BookmakerFeed>>,
    store: Arc<S>,
    notifiers: Arc<NotifierRegistry>,
    settings: CycleSettings,
}

impl<S: OpportunityStore> ScanCycle<S> {
    pub fn new(
        feeds: Vec<Arc<dyn BookmakerFeed>>,
        store: Arc<S>,
        notifiers: Arc<NotifierRegistry>,
        settings: CycleSettings,
    ) -> Self {
        Self {
            feeds,
            store,
            notifiers,
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &CycleSettings {
        &self.settings
    }

    #[must_use]
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Run one full cycle at `now`.
    pub async fn run(&self, now: DateTime<Utc>) -> CycleReport {
        let mut report = CycleReport {
            timestamp: now,
            bookmakers_processed: 0,
            events_scraped: 0,
            opportunities_found: 0,
            inserted: 0,
            updated: 0,
            errors: Vec::new(),
            success: false,
        };

        if self.feeds.is_empty() {
            warn!("No bookmaker feeds configured");
            return report;
        }

        let events = self.fetch_all(&mut report).await;
        report.events_scraped = events.len();

        let opportunities = detect(&events, &self.settings.detection);
        report.opportunities_found = opportunities.len();

        match self.persist(&opportunities, now).await {
            Ok((inserted, updated)) => {
                report.inserted = inserted;
                report.updated = updated;
            }
            Err(error) => {
                warn!(%error, "Failed to persist opportunities");
                report.errors.push(CycleError {
                    source: STORE_SOURCE.to_string(),
                    message: error.to_string(),
                });
            }
        }

        report.success = report.errors.is_empty();

        info!(
            bookmakers = report.bookmakers_processed,
            events = report.events_scraped,
            found = report.opportunities_found,
            inserted = report.inserted,
            updated = report.updated,
            errors = report.errors.len(),
            "Scan cycle finished"
        );
        self.notifiers.notify_all(Event::CycleCompleted(CycleEvent {
            timestamp: now,
            opportunities_found: report.opportunities_found,
            inserted: report.inserted,
            updated: report.updated,
            errors: report.errors.len(),
        }));

        report
    }

    async fn fetch_all(&self, report: &mut CycleReport) -> Vec<RawEvent> {
        let fetches = self.feeds.iter().map(|feed| async move {
            let result = feed.fetch().await;
            (feed.bookmaker().to_string(), result)
        });

        let mut events = Vec::new();
        for (bookmaker, result) in join_all(fetches).await {
            report.bookmakers_processed += 1;
            match result {
                Ok(fetched) => {
                    info!(bookmaker = %bookmaker, events = fetched.len(), "Fetched events");
                    events.extend(fetched.into_iter().map(|e| e.tagged(bookmaker.as_str())));
                }
                Err(error) => {
                    warn!(bookmaker = %bookmaker, %error, "Feed failed");
                    report.errors.push(CycleError {
                        source: bookmaker,
                        message: error.to_string(),
                    });
                }
            }
        }
        events
    }

    async fn persist(
        &self,
        opportunities: &[Opportunity],
        now: DateTime<Utc>,
    ) -> Result<(usize, usize)> {
        let active = self.store.active().await?;
        let plan = reconcile(opportunities, &active, now);
        let applied = self.store.apply(&plan).await?;

        for record in &applied.inserted {
            self.notifiers
                .notify_all(Event::OpportunityDetected(OpportunityEvent::from(record)));
        }
        Ok((applied.inserted.len(), applied.updated))
    }

    /// Deactivate stale records and purge old inactive ones.
    ///
    /// # Errors
    ///
    /// Returns the store error if either step fails.
    pub async fn housekeep(&self, now: DateTime<Utc>) -> Result<HousekeepingReport> {
        let deactivated = self
            .store
            .deactivate_stale(cutoff(now, self.settings.stale_after))
            .await?;
        let purged = self
            .store
            .purge_inactive(cutoff(now, self.settings.purge_after))
            .await?;

        if deactivated > 0 || purged > 0 {
            info!(deactivated, purged, "Housekeeping complete");
        }
        Ok(HousekeepingReport { deactivated, purged })
    }
}

fn cutoff(now: DateTime<Utc>, age: Duration) -> DateTime<Utc> {
    now.checked_sub_signed(age).unwrap_or(DateTime::<Utc>::MIN_UTC)
}
