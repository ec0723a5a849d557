//! Stake allocation for a confirmed arbitrage.
//!
//! Stakes are proportional to the implied probability of each best price,
//! so every outcome pays out the same amount:
//!
//! ```text
//! stake_i = total × (1 / odds_i) / Σ (1 / odds_j)
//! ```
//!
//! Each stake is rounded to cents independently. Expected profit is
//! `total × percentage / 100`, also rounded to cents.

use serde::Serialize;
use tracing::warn;

use super::evaluator::{evaluate_best, validate_quotes};
use crate::domain::{round_cents, Amount, BestOdds, DomainError, Quote, StakeAllocation, StakeLeg};

/// A stake plan and the profit it locks in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stakes {
    pub distribution: StakeAllocation,
    pub expected_profit: Amount,
}

impl Stakes {
    /// The empty plan returned when there is nothing to stake on.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
}

/// Allocate `total_stake` across the best prices.
///
/// The percentage is trusted as given; it is only used for the expected
/// profit figure.
///
/// # Errors
///
/// Returns [`DomainError::InvalidStake`] for a non-positive or non-finite
/// stake and [`DomainError::InvalidOdds`] if a best price is unusable.
pub fn allocate(best: &BestOdds, total_stake: Amount, percentage: f64) -> Result<Stakes, DomainError> {
    if !total_stake.is_finite() || total_stake <= 0.0 {
        return Err(DomainError::InvalidStake { stake: total_stake });
    }
    if let Some(bad) = best.iter().find(|p| !p.odds.is_finite() || p.odds <= 1.0) {
        return Err(DomainError::InvalidOdds {
            bookmaker: bad.bookmaker.clone(),
            outcome: bad.outcome.clone(),
            odds: bad.odds,
        });
    }
    if best.is_empty() {
        return Ok(Stakes::none());
    }

    let reciprocal_sum = best.reciprocal_sum();
    let legs = best
        .iter()
        .map(|price| {
            let stake = round_cents(total_stake * (1.0 / price.odds) / reciprocal_sum);
            StakeLeg::new(&price.outcome, &price.bookmaker, price.odds, stake)
        })
        .collect();

    Ok(Stakes {
        distribution: StakeAllocation::new(legs),
        expected_profit: round_cents(total_stake * percentage / 100.0),
    })
}

/// Ad-hoc stake calculation for a user-supplied odds list.
///
/// Without an explicit percentage the quotes are evaluated first and an
/// empty plan is returned when no arbitrage exists. Invalid input also
/// yields an empty plan, with a warning.
pub fn calculate_stakes(quotes: &[Quote], total_stake: Amount, percentage: Option<f64>) -> Stakes {
    if let Err(error) = validate_quotes(quotes) {
        warn!(%error, "Rejecting odds list");
        return Stakes::none();
    }

    let best = BestOdds::from_quotes(quotes);
    let percentage = match percentage {
        Some(p) => p,
        None => {
            let result = evaluate_best(&best);
            if !result.exists {
                return Stakes::none();
            }
            result.percentage
        }
    };

    allocate(&best, total_stake, percentage).unwrap_or_else(|error| {
        warn!(%error, total_stake, "Cannot allocate stakes");
        Stakes::none()
    })
}
