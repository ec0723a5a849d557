//! In-memory opportunity store.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::debug;

use crate::application::engine::{ReconcileAction, ReconciliationPlan};
use crate::domain::{OpportunityId, StoredOpportunity};
use crate::error::Result;
use crate::port::{AppliedPlan, OpportunityQuery, OpportunityStore};

/// In-memory store, used by the CLI and in tests.
///
/// Listings are ordered by percentage, then detection time, then
/// insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Records>,
}

#[derive(Debug, Default)]
struct Records {
    by_id: HashMap<OpportunityId, Slot>,
    next_seq: u64,
}

#[derive(Debug)]
struct Slot {
    seq: u64,
    record: StoredOpportunity,
}

impl Records {
    fn insert(&mut self, record: StoredOpportunity) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.by_id.insert(record.id.clone(), Slot { seq, record });
    }

    fn sorted(&self, keep: impl Fn(&StoredOpportunity) -> bool) -> Vec<StoredOpportunity> {
        let mut slots: Vec<&Slot> = self.by_id.values().filter(|s| keep(&s.record)).collect();
        slots.sort_by(|a, b| {
            b.record
                .opportunity
                .arbitrage_percentage
                .total_cmp(&a.record.opportunity.arbitrage_percentage)
                .then_with(|| a.record.detected_at.cmp(&b.record.detected_at))
                .then_with(|| a.seq.cmp(&b.seq))
        });
        slots.into_iter().map(|s| s.record.clone()).collect()
    }
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with records, in iteration order.
    pub fn with_records(records: impl IntoIterator<Item = StoredOpportunity>) -> Self {
        let mut inner = Records::default();
        records.into_iter().for_each(|r| inner.insert(r));
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Number of records, active or not.
    pub fn len(&self) -> usize {
        self.inner.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().by_id.is_empty()
    }
}

impl OpportunityStore for MemoryStore {
    async fn active(&self) -> Result<Vec<StoredOpportunity>> {
        Ok(self.inner.read().sorted(|r| r.is_active))
    }

    async fn apply(&self, plan: &ReconciliationPlan) -> Result<AppliedPlan> {
        let mut inner = self.inner.write();
        let mut applied = AppliedPlan::default();

        for action in &plan.actions {
            match action {
                ReconcileAction::Update { id, update } => match inner.by_id.get_mut(id) {
                    Some(slot) => {
                        slot.record.apply(update.clone());
                        applied.updated += 1;
                    }
                    None => debug!(%id, "Skipping update for unknown opportunity"),
                },
                ReconcileAction::Insert {
                    opportunity,
                    detected_at,
                } => {
                    let record =
                        StoredOpportunity::new(OpportunityId::new(), opportunity.clone(), *detected_at);
                    inner.insert(record.clone());
                    applied.inserted.push(record);
                }
            }
        }

        Ok(applied)
    }

    async fn get(&self, id: &OpportunityId) -> Result<Option<StoredOpportunity>> {
        Ok(self.inner.read().by_id.get(id).map(|s| s.record.clone()))
    }

    async fn list(&self, query: &OpportunityQuery) -> Result<Vec<StoredOpportunity>> {
        let matching = self.inner.read().sorted(|r| query.matches(r));

        let page = matching.into_iter().skip(query.offset);
        Ok(match query.limit {
            Some(limit) => page.take(limit).collect(),
            None => page.collect(),
        })
    }

    async fn deactivate_stale(&self, cutoff: DateTime<Utc>) -> Result<usize> {
        let mut count = 0;
        for slot in self.inner.write().by_id.values_mut() {
            let record = &mut slot.record;
            if record.is_active && record.last_verified_at < cutoff {
                record.is_active = false;
                count += 1;
            }
        }
        Ok(count)
    }

    async fn purge_inactive(&self, cutoff: DateTime<Utc>) -> Result<usize> {
        let mut inner = self.inner.write();
        let before = inner.by_id.len();
        inner
            .by_id
            .retain(|_, s| s.record.is_active || s.record.detected_at >= cutoff);
        Ok(before - inner.by_id.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::reconcile;
    use crate::testkit::domain::{opportunity, stored};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn apply_inserts_with_fresh_ids() {
        let store = MemoryStore::new();
        let fresh = vec![opportunity("Liverpool", "Chelsea", 3.0), opportunity("Arsenal", "Spurs", 2.0)];

        let applied = store.apply(&reconcile(&fresh, &[], now())).await.unwrap();

        assert_eq!(applied.inserted.len(), 2);
        assert_ne!(applied.inserted[0].id, applied.inserted[1].id);
        assert!(applied.inserted.iter().all(|r| r.is_active && r.detected_at == now()));
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn apply_updates_in_place() {
        let record = stored("opp-1", opportunity("Liverpool", "Chelsea", 2.0), now() - Duration::hours(1));
        let store = MemoryStore::with_records([record]);
        let active = store.active().await.unwrap();

        let plan = reconcile(&[opportunity("Liverpool", "Chelsea", 4.0)], &active, now());
        let applied = store.apply(&plan).await.unwrap();

        assert_eq!(applied.updated, 1);
        assert!(applied.inserted.is_empty());
        let refreshed = store.get(&OpportunityId::from("opp-1")).await.unwrap().unwrap();
        assert_eq!(refreshed.opportunity.arbitrage_percentage, 4.0);
        assert_eq!(refreshed.last_verified_at, now());
        assert_eq!(refreshed.detected_at, now() - Duration::hours(1));
    }

    #[tokio::test]
    async fn list_orders_filters_and_pages() {
        let store = MemoryStore::with_records([
            stored("a", opportunity("A", "X", 1.0), now()),
            stored("b", opportunity("B", "X", 5.0), now()),
            stored("c", opportunity("C", "X", 3.0), now()),
        ]);

        let all = store.list(&OpportunityQuery::default()).await.unwrap();
        let ids: Vec<_> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);

        let query = OpportunityQuery {
            min_profit: Some(2.0),
            offset: 1,
            limit: Some(5),
            ..OpportunityQuery::default()
        };
        let page = store.list(&query).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id.as_str(), "c");
    }

    #[tokio::test]
    async fn housekeeping_deactivates_then_purges() {
        let old = now() - Duration::days(10);
        let store = MemoryStore::with_records([
            stored("stale", opportunity("A", "X", 1.0), old),
            stored("fresh", opportunity("B", "X", 1.0), now()),
        ]);

        assert_eq!(store.deactivate_stale(now() - Duration::minutes(15)).await.unwrap(), 1);
        assert_eq!(store.active().await.unwrap().len(), 1);

        let listed = store
            .list(&OpportunityQuery {
                active_only: false,
                ..OpportunityQuery::default()
            })
            .await
            .unwrap();
        assert_eq!(listed.len(), 2);

        assert_eq!(store.purge_inactive(now() - Duration::days(7)).await.unwrap(), 1);
        assert_eq!(store.len(), 1);
        assert!(store.get(&OpportunityId::from("stale")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn equal_records_list_in_insertion_order() {
        let store = MemoryStore::new();
        let fresh: Vec<_> = ["Arsenal", "Brighton", "Chelsea", "Everton", "Fulham", "Leeds"]
            .iter()
            .map(|home| opportunity(home, "X", 2.5))
            .collect();
        store.apply(&reconcile(&fresh, &[], now())).await.unwrap();

        for _ in 0..3 {
            let listed = store.list(&OpportunityQuery::default()).await.unwrap();
            let homes: Vec<_> = listed.iter().map(|r| r.opportunity.home_team.as_str()).collect();
            assert_eq!(homes, ["Arsenal", "Brighton", "Chelsea", "Everton", "Fulham", "Leeds"]);
        }
        let active = store.active().await.unwrap();
        assert_eq!(active[0].opportunity.home_team, "Arsenal");
    }
}
