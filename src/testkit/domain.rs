//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`RawEvent`], [`Quote`] and
//! [`Opportunity`] so tests focus on assertions rather than construction
//! boilerplate.

use std::collections::BTreeSet;

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{
    MarketKey, OddsTable, Opportunity, OpportunityId, Quote, RawEvent, RawMarket, StakeAllocation,
    StoredOpportunity,
};

/// Kick-off used by every builder unless overridden.
pub const KICKOFF: &str = "2024-05-01T15:00:00Z";

/// [`KICKOFF`] as a timestamp.
pub fn kickoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 15, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Create a [`Quote`].
pub fn quote(bookmaker: &str, outcome: &str, odds: f64) -> Quote {
    Quote::new(bookmaker, outcome, odds)
}

/// A tagged event at [`KICKOFF`] with no markets.
pub fn event(bookmaker: &str, home: &str, away: &str) -> RawEvent {
    RawEvent::new(home, away, KICKOFF)
        .with_league("Premier League")
        .tagged(bookmaker)
}

/// An untagged event, as a feed would return it.
pub fn feed_event(home: &str, away: &str) -> RawEvent {
    RawEvent::new(home, away, KICKOFF).with_league("Premier League")
}

/// A `1X2` market.
pub fn one_x_two(home: f64, draw: f64, away: f64) -> RawMarket {
    RawMarket::new("1X2")
        .with_odds("1", home)
        .with_odds("X", draw)
        .with_odds("2", away)
}

/// An `over_under` market on `line`.
pub fn over_under(line: &str, over: f64, under: f64) -> RawMarket {
    RawMarket::new("over_under")
        .with_params(line)
        .with_odds("over", over)
        .with_odds("under", under)
}

/// A detected `1X2` opportunity with the given percentage.
pub fn opportunity(home: &str, away: &str, percentage: f64) -> Opportunity {
    let market_key = MarketKey::new("1X2", None);
    Opportunity {
        home_team: home.to_string(),
        away_team: away.to_string(),
        league: Some("Premier League".to_string()),
        start_time: kickoff(),
        market_type: market_key.display_label(),
        market_key,
        bookmakers: BTreeSet::new(),
        odds: OddsTable::new(),
        arbitrage_percentage: percentage,
        stake_distribution: StakeAllocation::default(),
        stake_details: Vec::new(),
        total_stake: 10_000.0,
        expected_profit: percentage * 100.0,
    }
}

/// A stored, active opportunity first seen (and last verified) at `at`.
pub fn stored(id: &str, opportunity: Opportunity, at: DateTime<Utc>) -> StoredOpportunity {
    StoredOpportunity::new(OpportunityId::from(id), opportunity, at)
}
