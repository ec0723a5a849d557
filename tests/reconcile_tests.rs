//! Reconciliation against stored opportunities.

use arbscout::adapter::outbound::MemoryStore;
use arbscout::application::engine::{reconcile, ReconcileAction};
use arbscout::domain::OpportunityId;
use arbscout::port::OpportunityStore;
use arbscout::testkit::domain::{kickoff, opportunity, stored};
use chrono::Duration;

// Scenario C
#[tokio::test]
async fn refound_opportunity_updates_in_place() {
    let first_seen = kickoff() - Duration::hours(2);
    let now = kickoff() - Duration::minutes(5);
    let store = MemoryStore::with_records([stored(
        "opp-1",
        opportunity("Liverpool", "Chelsea", 1.2),
        first_seen,
    )]);

    let active = store.active().await.unwrap();
    let plan = reconcile(&[opportunity("Liverpool", "Chelsea", 2.4)], &active, now);

    assert_eq!(plan.len(), 1);
    let Some(ReconcileAction::Update { id, update }) = plan.actions.first() else {
        panic!("expected an update, got {:?}", plan.actions);
    };
    assert_eq!(id.as_str(), "opp-1");
    assert_eq!(update.arbitrage_percentage, 2.4);
    assert_eq!(update.last_verified_at, now);

    let applied = store.apply(&plan).await.unwrap();
    assert!(applied.inserted.is_empty());
    assert_eq!(applied.updated, 1);

    let record = store.get(&OpportunityId::from("opp-1")).await.unwrap().unwrap();
    assert_eq!(record.detected_at, first_seen);
    assert_eq!(record.last_verified_at, now);
    assert_eq!(record.opportunity.arbitrage_percentage, 2.4);
    assert!(record.is_active);
}

// Scenario D
#[tokio::test]
async fn missing_opportunity_is_left_alone() {
    let first_seen = kickoff() - Duration::hours(2);
    let now = kickoff() - Duration::minutes(5);
    let store = MemoryStore::with_records([
        stored("opp-1", opportunity("Liverpool", "Chelsea", 1.2), first_seen),
        stored("opp-2", opportunity("Arsenal", "Spurs", 3.0), first_seen),
    ]);

    let active = store.active().await.unwrap();
    let plan = reconcile(&[opportunity("Liverpool", "Chelsea", 1.3)], &active, now);
    store.apply(&plan).await.unwrap();

    let untouched = store.get(&OpportunityId::from("opp-2")).await.unwrap().unwrap();
    assert!(untouched.is_active);
    assert_eq!(untouched.last_verified_at, first_seen);
    assert_eq!(untouched.opportunity.arbitrage_percentage, 3.0);
}

#[tokio::test]
async fn new_opportunity_is_inserted_with_fresh_id() {
    let now = kickoff() - Duration::hours(1);
    let store = MemoryStore::new();

    let plan = reconcile(&[opportunity("Liverpool", "Chelsea", 2.0)], &[], now);
    assert_eq!(plan.inserts().count(), 1);

    let applied = store.apply(&plan).await.unwrap();
    let inserted = &applied.inserted[0];
    assert!(inserted.is_active);
    assert_eq!(inserted.detected_at, now);
    assert_eq!(inserted.last_verified_at, now);
    assert!(!inserted.id.as_str().is_empty());
    assert_eq!(store.len(), 1);
}

#[test]
fn inactive_record_does_not_absorb_update() {
    let now = kickoff();
    let mut old = stored("opp-1", opportunity("Liverpool", "Chelsea", 1.0), now - Duration::days(1));
    old.is_active = false;

    let plan = reconcile(&[opportunity("Liverpool", "Chelsea", 2.0)], &[old], now);

    assert_eq!(plan.inserts().count(), 1);
    assert_eq!(plan.updates().count(), 0);
}

#[test]
fn different_market_type_is_a_different_opportunity() {
    let now = kickoff();
    let existing = stored("opp-1", opportunity("Liverpool", "Chelsea", 1.0), now);
    let mut fresh = opportunity("Liverpool", "Chelsea", 2.0);
    fresh.market_type = "Over/Under 2.5".to_string();

    let plan = reconcile(&[fresh], &[existing], now);
    assert_eq!(plan.inserts().count(), 1);
}
