//! Persistence port for arbitrage opportunities.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::engine::ReconciliationPlan;
use crate::domain::{OpportunityId, StoredOpportunity};
use crate::error::Result;

/// Filter for listing stored opportunities.
#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityQuery {
    /// Only return active records.
    pub active_only: bool,
    /// Minimum arbitrage percentage, inclusive.
    pub min_profit: Option<f64>,
    pub offset: usize,
    pub limit: Option<usize>,
}

impl Default for OpportunityQuery {
    fn default() -> Self {
        Self {
            active_only: true,
            min_profit: None,
            offset: 0,
            limit: None,
        }
    }
}

impl OpportunityQuery {
    /// Whether a record passes the filters (paging aside).
    #[must_use]
    pub fn matches(&self, record: &StoredOpportunity) -> bool {
        (!self.active_only || record.is_active)
            && self
                .min_profit
                .map_or(true, |min| record.opportunity.arbitrage_percentage >= min)
    }
}

/// What a store did with a reconciliation plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppliedPlan {
    /// Records created, in plan order.
    pub inserted: Vec<StoredOpportunity>,
    /// Number of records refreshed.
    pub updated: usize,
}

/// Storage operations for opportunities.
pub trait OpportunityStore: Send + Sync {
    /// All active opportunities.
    fn active(&self) -> impl Future<Output = Result<Vec<StoredOpportunity>>> + Send;

    /// Apply a reconciliation plan atomically.
    ///
    /// Updates naming an unknown id are skipped.
    fn apply(&self, plan: &ReconciliationPlan) -> impl Future<Output = Result<AppliedPlan>> + Send;

    /// Get an opportunity by ID.
    fn get(&self, id: &OpportunityId) -> impl Future<Output = Result<Option<StoredOpportunity>>> + Send;

    /// List opportunities, highest percentage first.
    fn list(&self, query: &OpportunityQuery) -> impl Future<Output = Result<Vec<StoredOpportunity>>> + Send;

    /// Deactivate active records last verified before `cutoff`. Returns count.
    fn deactivate_stale(&self, cutoff: DateTime<Utc>) -> impl Future<Output = Result<usize>> + Send;

    /// Delete inactive records detected before `cutoff`. Returns count.
    fn purge_inactive(&self, cutoff: DateTime<Utc>) -> impl Future<Output = Result<usize>> + Send;
}
