//! Stake allocation across outcomes.

use serde::{Deserialize, Serialize};

use super::money::Amount;
use super::quote::Odds;

/// The stake placed on one outcome at one bookmaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakeLeg {
    pub outcome: String,
    pub bookmaker: String,
    pub odds: Odds,
    /// Stake rounded to cents.
    pub stake: Amount,
    /// `stake × odds`, the payout if this outcome wins.
    pub potential_return: Amount,
}

impl StakeLeg {
    pub fn new(
        outcome: impl Into<String>,
        bookmaker: impl Into<String>,
        odds: Odds,
        stake: Amount,
    ) -> Self {
        Self {
            outcome: outcome.into(),
            bookmaker: bookmaker.into(),
            odds,
            stake,
            potential_return: stake * odds,
        }
    }
}

/// Per-outcome stakes, one leg per outcome, in outcome order.
///
/// For a confirmed arbitrage every leg's `potential_return` is equal up to
/// cent rounding, and the stakes sum to the total stake.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StakeAllocation {
    legs: Vec<StakeLeg>,
}

impl StakeAllocation {
    /// Create an allocation from legs.
    #[must_use]
    pub fn new(legs: Vec<StakeLeg>) -> Self {
        Self { legs }
    }

    /// The allocation for an outcome.
    #[must_use]
    pub fn get(&self, outcome: &str) -> Option<&StakeLeg> {
        self.legs.iter().find(|leg| leg.outcome == outcome)
    }

    /// All legs in outcome order.
    #[must_use]
    pub fn legs(&self) -> &[StakeLeg] {
        &self.legs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Sum of all stakes.
    #[must_use]
    pub fn total_staked(&self) -> Amount {
        self.legs.iter().map(|leg| leg.stake).sum()
    }

    /// Smallest payout across outcomes; the guaranteed return.
    #[must_use]
    pub fn min_return(&self) -> Option<Amount> {
        self.legs
            .iter()
            .map(|leg| leg.potential_return)
            .reduce(f64::min)
    }

    /// Difference between the largest and smallest payout.
    #[must_use]
    pub fn return_spread(&self) -> Amount {
        let max = self.legs.iter().map(|leg| leg.potential_return).reduce(f64::max);
        match (max, self.min_return()) {
            (Some(max), Some(min)) => max - min,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leg_computes_potential_return() {
        let leg = StakeLeg::new("1", "A", 2.5, 40.0);
        assert_eq!(leg.potential_return, 100.0);
    }

    #[test]
    fn allocation_aggregates() {
        let allocation = StakeAllocation::new(vec![
            StakeLeg::new("over", "A", 2.0, 50.0),
            StakeLeg::new("under", "B", 2.1, 48.0),
        ]);

        assert_eq!(allocation.len(), 2);
        assert_eq!(allocation.total_staked(), 98.0);
        assert_eq!(allocation.min_return(), Some(100.0));
        assert!((allocation.return_spread() - 0.8).abs() < 1e-9);
        assert_eq!(allocation.get("under").unwrap().bookmaker, "B");
    }

    #[test]
    fn empty_allocation() {
        let allocation = StakeAllocation::default();
        assert!(allocation.is_empty());
        assert_eq!(allocation.min_return(), None);
        assert_eq!(allocation.return_spread(), 0.0);
    }
}
