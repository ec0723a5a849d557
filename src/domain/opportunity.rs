//! Arbitrage opportunity records.
//!
//! - [`Opportunity`] - A freshly detected opportunity, not yet persisted
//! - [`StoredOpportunity`] - An opportunity as held by the store, with identity
//! - [`OpportunityUpdate`] - The fields refreshed when an opportunity is seen again
//! - [`OpportunityKey`] - What makes two opportunities "the same" across cycles

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::OpportunityId;
use super::market::MarketKey;
use super::money::Amount;
use super::quote::Odds;
use super::stake::StakeAllocation;

/// Outcome -> bookmaker -> odds.
pub type OddsTable = BTreeMap<String, BTreeMap<String, Odds>>;

/// One row of the stake breakdown, with display-formatted outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakeDetail {
    pub outcome: String,
    pub bookmaker: String,
    pub odds: Odds,
    pub stake: Amount,
    pub potential_return: Amount,
}

/// Reconciliation identity: same teams and same displayed market.
///
/// The start time is deliberately not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OpportunityKey {
    pub home_team: String,
    pub away_team: String,
    pub market_type: String,
}

/// A detected arbitrage opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub home_team: String,
    pub away_team: String,
    pub league: Option<String>,
    pub start_time: DateTime<Utc>,
    /// Internal grouping key, e.g. `over_under:2.5`.
    pub market_key: MarketKey,
    /// Display label, e.g. `Over/Under 2.5`.
    pub market_type: String,
    /// Every bookmaker that quoted this market.
    pub bookmakers: BTreeSet<String>,
    pub odds: OddsTable,
    pub arbitrage_percentage: f64,
    pub stake_distribution: StakeAllocation,
    pub stake_details: Vec<StakeDetail>,
    pub total_stake: Amount,
    pub expected_profit: Amount,
}

impl Opportunity {
    /// The reconciliation key of this opportunity.
    #[must_use]
    pub fn key(&self) -> OpportunityKey {
        OpportunityKey {
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            market_type: self.market_type.clone(),
        }
    }
}

/// Fields refreshed in place when an active opportunity is found again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityUpdate {
    pub odds: OddsTable,
    pub arbitrage_percentage: f64,
    pub stake_distribution: StakeAllocation,
    pub expected_profit: Amount,
    pub last_verified_at: DateTime<Utc>,
}

impl OpportunityUpdate {
    /// Refresh from a newly detected opportunity.
    #[must_use]
    pub fn from_opportunity(opportunity: &Opportunity, now: DateTime<Utc>) -> Self {
        Self {
            odds: opportunity.odds.clone(),
            arbitrage_percentage: opportunity.arbitrage_percentage,
            stake_distribution: opportunity.stake_distribution.clone(),
            expected_profit: opportunity.expected_profit,
            last_verified_at: now,
        }
    }
}

/// An opportunity as persisted by a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredOpportunity {
    pub id: OpportunityId,
    #[serde(flatten)]
    pub opportunity: Opportunity,
    pub is_active: bool,
    pub detected_at: DateTime<Utc>,
    pub last_verified_at: DateTime<Utc>,
}

impl StoredOpportunity {
    /// Create an active record first seen at `now`.
    #[must_use]
    pub fn new(id: OpportunityId, opportunity: Opportunity, now: DateTime<Utc>) -> Self {
        Self {
            id,
            opportunity,
            is_active: true,
            detected_at: now,
            last_verified_at: now,
        }
    }

    /// The reconciliation key of this record.
    #[must_use]
    pub fn key(&self) -> OpportunityKey {
        self.opportunity.key()
    }

    /// Apply an update, leaving identity, `detected_at` and `is_active` alone.
    pub fn apply(&mut self, update: OpportunityUpdate) {
        self.opportunity.odds = update.odds;
        self.opportunity.arbitrage_percentage = update.arbitrage_percentage;
        self.opportunity.stake_distribution = update.stake_distribution;
        self.opportunity.expected_profit = update.expected_profit;
        self.last_verified_at = update.last_verified_at;
    }
}
