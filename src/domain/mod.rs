//! Bookmaker-agnostic domain types.

pub mod arbitrage;
pub mod error;
pub mod event;
pub mod id;
pub mod market;
pub mod money;
pub mod opportunity;
pub mod quote;
pub mod stake;

pub use arbitrage::{ArbitrageResult, BestOdds, BestPrice};
pub use error::DomainError;
pub use event::{Fixture, RawEvent, RawMarket, RawOdds};
pub use id::{MatchKey, OpportunityId};
pub use market::MarketKey;
pub use money::{round_cents, Amount};
pub use opportunity::{
    OddsTable, Opportunity, OpportunityKey, OpportunityUpdate, StakeDetail, StoredOpportunity,
};
pub use quote::{Odds, OddsQuote, Quote};
pub use stake::{StakeAllocation, StakeLeg};
