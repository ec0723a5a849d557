//! Odds quotes.
//!
//! - [`OddsQuote`] - A normalized quote carrying its match and market identity
//! - [`Quote`] - A quote within one market: bookmaker, outcome, odds

use serde::{Deserialize, Serialize};

use super::id::MatchKey;
use super::market::MarketKey;

/// Decimal odds (total return per unit staked).
pub type Odds = f64;

/// A quote within a single market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub bookmaker: String,
    pub outcome: String,
    pub odds: Odds,
}

impl Quote {
    pub fn new(bookmaker: impl Into<String>, outcome: impl Into<String>, odds: Odds) -> Self {
        Self {
            bookmaker: bookmaker.into(),
            outcome: outcome.into(),
            odds,
        }
    }

    /// Whether the odds can take part in an arbitrage calculation.
    #[must_use]
    pub fn has_valid_odds(&self) -> bool {
        self.odds.is_finite() && self.odds > 1.0
    }
}

/// A flat, normalized quote as produced by the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct OddsQuote {
    pub bookmaker: String,
    pub match_key: MatchKey,
    pub market_key: MarketKey,
    pub outcome: String,
    pub odds: Odds,
}

impl OddsQuote {
    /// Drop the match and market identity.
    #[must_use]
    pub fn to_quote(&self) -> Quote {
        Quote::new(self.bookmaker.clone(), self.outcome.clone(), self.odds)
    }
}
