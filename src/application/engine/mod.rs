//! The detection engine.
//!
//! A scan flows through the engine in four stages:
//!
//! 1. [`normalizer`] flattens tagged raw events into odds quotes
//! 2. [`grouping`] buckets quotes by match, then by market
//! 3. [`evaluator`] tests each market for an arbitrage
//! 4. [`allocator`] splits the total stake across the best prices
//!
//! [`reconciler`] then diffs the findings against stored opportunities.
//! All stages are pure; I/O lives in [`crate::application::cycle`].

pub mod allocator;
pub mod evaluator;
pub mod grouping;
pub mod normalizer;
pub mod reconciler;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{Fixture, Opportunity, OddsTable, RawEvent, StakeDetail};

pub use allocator::{allocate, calculate_stakes, Stakes};
pub use evaluator::{calculate_arbitrage, evaluate, evaluate_best};
pub use grouping::{group_by_market, group_by_match, MarketGroup, MatchGroup};
pub use normalizer::{normalize, Normalized};
pub use reconciler::{reconcile, ReconcileAction, ReconciliationPlan};

/// Default minimum arbitrage percentage for an opportunity to be reported.
pub const DEFAULT_MIN_PROFIT_PERCENTAGE: f64 = 0.5;

/// Default total stake used for stake allocation.
pub const DEFAULT_TOTAL_STAKE: f64 = 10_000.0;

/// Detection thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Opportunities below this percentage are discarded.
    pub min_profit_percentage: f64,
    /// Stake split across outcomes of each opportunity.
    pub total_stake: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_profit_percentage: DEFAULT_MIN_PROFIT_PERCENTAGE,
            total_stake: DEFAULT_TOTAL_STAKE,
        }
    }
}

/// Find arbitrage opportunities in a batch of tagged raw events.
///
/// Uses [`DEFAULT_TOTAL_STAKE`] for stake allocation. See [`detect`].
pub fn find_arbitrage_opportunities(events: &[RawEvent], min_profit_percentage: f64) -> Vec<Opportunity> {
    detect(
        events,
        &DetectionConfig {
            min_profit_percentage,
            ..DetectionConfig::default()
        },
    )
}

/// Run the full detection pipeline.
///
/// Results are sorted by arbitrage percentage, highest first. Ties keep
/// match and market encounter order. Only markets quoted by at least two
/// bookmakers are evaluated. Markets with invalid odds are skipped with a
/// warning; they never abort the batch.
pub fn detect(events: &[RawEvent], config: &DetectionConfig) -> Vec<Opportunity> {
    let normalized = normalize(events);
    let mut found = Vec::new();

    for group in group_by_match(&normalized.quotes) {
        let Some(fixture) = normalized.fixtures.get(&group.key) else {
            continue;
        };

        for market in group_by_market(&group.quotes) {
            if let Some(opportunity) = evaluate_market(fixture, &market, config) {
                found.push(opportunity);
            }
        }
    }

    found.sort_by(|a, b| b.arbitrage_percentage.total_cmp(&a.arbitrage_percentage));

    debug!(
        events = events.len(),
        quotes = normalized.quotes.len(),
        skipped = normalized.skipped,
        opportunities = found.len(),
        "Detection pass complete"
    );

    found
}

fn evaluate_market(fixture: &Fixture, market: &MarketGroup, config: &DetectionConfig) -> Option<Opportunity> {
    let bookmakers: BTreeSet<String> = market.quotes.iter().map(|q| q.bookmaker.clone()).collect();
    if bookmakers.len() < 2 {
        debug!(match_key = %fixture.key(), market = %market.key, "Single bookmaker market, skipping");
        return None;
    }

    let result = match evaluate(&market.quotes) {
        Ok(result) => result,
        Err(error) => {
            warn!(match_key = %fixture.key(), market = %market.key, %error, "Skipping market");
            return None;
        }
    };
    if !result.exists || result.percentage < config.min_profit_percentage {
        return None;
    }

    let best = market.best_odds();
    let stakes = match allocate(&best, config.total_stake, result.percentage) {
        Ok(stakes) => stakes,
        Err(error) => {
            warn!(match_key = %fixture.key(), market = %market.key, %error, "Cannot allocate stakes");
            return None;
        }
    };

    let mut odds = OddsTable::new();
    for quote in &market.quotes {
        odds.entry(quote.outcome.clone())
            .or_default()
            .insert(quote.bookmaker.clone(), quote.odds);
    }

    let stake_details = stakes
        .distribution
        .legs()
        .iter()
        .map(|leg| StakeDetail {
            outcome: market.key.display_outcome(&leg.outcome),
            bookmaker: leg.bookmaker.clone(),
            odds: leg.odds,
            stake: leg.stake,
            potential_return: leg.potential_return,
        })
        .collect();

    debug!(
        match_key = %fixture.key(),
        market = %market.key,
        percentage = result.percentage,
        "Arbitrage found"
    );

    Some(Opportunity {
        home_team: fixture.home_team.clone(),
        away_team: fixture.away_team.clone(),
        league: fixture.league.clone(),
        start_time: fixture.start_time,
        market_type: market.key.display_label(),
        market_key: market.key.clone(),
        bookmakers,
        odds,
        arbitrage_percentage: result.percentage,
        stake_distribution: stakes.distribution,
        stake_details,
        total_stake: config.total_stake,
        expected_profit: stakes.expected_profit,
    })
}
