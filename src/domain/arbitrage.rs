//! Best-odds selection and the arbitrage test result.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::quote::{Odds, Quote};

/// The best price seen for one outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestPrice {
    pub outcome: String,
    pub bookmaker: String,
    pub odds: Odds,
}

/// Highest odds per outcome across bookmakers.
///
/// Outcomes keep the order in which they were first seen. A quote replaces
/// the current best only when its odds are strictly greater, so on equal
/// odds the first bookmaker encountered keeps the outcome. Lesser quotes
/// are discarded, never averaged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestOdds {
    prices: Vec<BestPrice>,
    index: HashMap<String, usize>,
}

impl BestOdds {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the best odds per outcome from quotes in encounter order.
    pub fn from_quotes<'a>(quotes: impl IntoIterator<Item = &'a Quote>) -> Self {
        let mut best = Self::new();
        for quote in quotes {
            best.offer(quote);
        }
        best
    }

    /// Offer a quote; it is kept only if it beats the current best.
    pub fn offer(&mut self, quote: &Quote) {
        match self.index.get(&quote.outcome) {
            Some(&i) => {
                let current = &mut self.prices[i];
                if quote.odds > current.odds {
                    current.odds = quote.odds;
                    current.bookmaker.clone_from(&quote.bookmaker);
                }
            }
            None => {
                self.index.insert(quote.outcome.clone(), self.prices.len());
                self.prices.push(BestPrice {
                    outcome: quote.outcome.clone(),
                    bookmaker: quote.bookmaker.clone(),
                    odds: quote.odds,
                });
            }
        }
    }

    /// Best price for an outcome.
    #[must_use]
    pub fn get(&self, outcome: &str) -> Option<&BestPrice> {
        self.index.get(outcome).map(|&i| &self.prices[i])
    }

    /// Iterate best prices in first-seen outcome order.
    pub fn iter(&self) -> impl Iterator<Item = &BestPrice> {
        self.prices.iter()
    }

    /// Number of distinct outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Check if no outcome has been seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Sum of implied probabilities, `Σ 1/odds`.
    #[must_use]
    pub fn reciprocal_sum(&self) -> f64 {
        self.prices.iter().map(|p| 1.0 / p.odds).sum()
    }
}

/// Outcome of the arbitrage existence test for one market.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArbitrageResult {
    /// Whether a risk-free combination exists.
    pub exists: bool,
    /// Guaranteed profit as a percentage of the total stake, unrounded.
    pub percentage: f64,
}

impl ArbitrageResult {
    /// The terminal "no opportunity" result.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            exists: false,
            percentage: 0.0,
        }
    }

    /// Build the result from `Σ 1/odds`.
    #[must_use]
    pub fn from_reciprocal_sum(sum: f64) -> Self {
        let percentage = (1.0 - sum) * 100.0;
        Self {
            exists: percentage > 0.0,
            percentage,
        }
    }
}
