//! Diffing a cycle's findings against the active opportunities in store.
//!
//! Matching uses [`OpportunityKey`]: home team, away team and displayed
//! market type. Matches refresh the stored record in place; everything
//! else becomes an insert. Active records that were not found again are
//! left alone, housekeeping deals with them.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::domain::{Opportunity, OpportunityId, OpportunityKey, OpportunityUpdate, StoredOpportunity};

/// One write the store has to perform.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReconcileAction {
    /// Refresh an existing active record.
    Update {
        id: OpportunityId,
        update: OpportunityUpdate,
    },
    /// Persist a new active record first seen at `detected_at`.
    Insert {
        opportunity: Opportunity,
        detected_at: DateTime<Utc>,
    },
}

/// The ordered writes produced by one reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReconciliationPlan {
    pub actions: Vec<ReconcileAction>,
}

impl ReconciliationPlan {
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn inserts(&self) -> impl Iterator<Item = &Opportunity> {
        self.actions.iter().filter_map(|a| match a {
            ReconcileAction::Insert { opportunity, .. } => Some(opportunity),
            ReconcileAction::Update { .. } => None,
        })
    }

    pub fn updates(&self) -> impl Iterator<Item = (&OpportunityId, &OpportunityUpdate)> {
        self.actions.iter().filter_map(|a| match a {
            ReconcileAction::Update { id, update } => Some((id, update)),
            ReconcileAction::Insert { .. } => None,
        })
    }
}

/// Build the write plan for this cycle's opportunities.
///
/// `fresh` is expected in descending percentage order; when two fresh
/// opportunities share a key only the first is kept. Inactive records in
/// `active` are ignored.
pub fn reconcile(
    fresh: &[Opportunity],
    active: &[StoredOpportunity],
    now: DateTime<Utc>,
) -> ReconciliationPlan {
    let mut existing: HashMap<OpportunityKey, &OpportunityId> = HashMap::new();
    for record in active.iter().filter(|r| r.is_active) {
        existing.entry(record.key()).or_insert(&record.id);
    }

    let mut seen = HashSet::new();
    let mut plan = ReconciliationPlan::default();

    for opportunity in fresh {
        let key = opportunity.key();
        if !seen.insert(key.clone()) {
            debug!(
                home_team = %key.home_team,
                away_team = %key.away_team,
                market_type = %key.market_type,
                "Dropping duplicate opportunity within cycle"
            );
            continue;
        }

        let action = match existing.get(&key) {
            Some(id) => ReconcileAction::Update {
                id: (*id).clone(),
                update: OpportunityUpdate::from_opportunity(opportunity, now),
            },
            None => ReconcileAction::Insert {
                opportunity: opportunity.clone(),
                detected_at: now,
            },
        };
        plan.actions.push(action);
    }

    plan
}
