//! Arbitrage existence test for a single market.

use tracing::warn;

use crate::domain::{ArbitrageResult, BestOdds, DomainError, Quote};

/// Evaluate one market's quotes across bookmakers.
///
/// Keeps the best odds per outcome (first bookmaker wins ties), then
/// computes `percentage = (1 - Σ 1/best_odds) × 100`. The percentage is
/// not rounded. Fewer than two distinct outcomes is the "no opportunity"
/// result, not an error.
///
/// # Errors
///
/// Returns [`DomainError::InvalidOdds`] if any quote has odds that are not
/// finite or not greater than 1.0. The whole quote set is rejected.
pub fn evaluate(quotes: &[Quote]) -> Result<ArbitrageResult, DomainError> {
    validate_quotes(quotes)?;
    Ok(evaluate_best(&BestOdds::from_quotes(quotes)))
}

/// Evaluate an already selected best-odds set.
#[must_use]
pub fn evaluate_best(best: &BestOdds) -> ArbitrageResult {
    if best.len() < 2 {
        return ArbitrageResult::none();
    }
    ArbitrageResult::from_reciprocal_sum(best.reciprocal_sum())
}

/// Ad-hoc evaluation of a user-supplied odds list.
///
/// Invalid odds are reported as "no arbitrage" with a warning.
pub fn calculate_arbitrage(quotes: &[Quote]) -> ArbitrageResult {
    match evaluate(quotes) {
        Ok(result) => result,
        Err(error) => {
            warn!(%error, "Rejecting odds list");
            ArbitrageResult::none()
        }
    }
}

pub(crate) fn validate_quotes(quotes: &[Quote]) -> Result<(), DomainError> {
    match quotes.iter().find(|q| !q.has_valid_odds()) {
        Some(q) => Err(DomainError::InvalidOdds {
            bookmaker: q.bookmaker.clone(),
            outcome: q.outcome.clone(),
            odds: q.odds,
        }),
        None => Ok(()),
    }
}
