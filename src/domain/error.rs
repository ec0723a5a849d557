//! Domain validation errors for odds, stakes and raw event records.
//!
//! These errors are returned by the strict engine operations
//! ([`evaluate`](crate::application::engine::evaluate),
//! [`allocate`](crate::application::engine::allocate)) and by the
//! normalizer when a raw record is incomplete. The lenient public entry
//! points turn them into a "no arbitrage" result plus a diagnostic.
//!
//! # Examples
//!
//! ```
//! use arbscout::application::engine::evaluate;
//! use arbscout::domain::error::DomainError;
//! use arbscout::domain::Quote;
//!
//! let quotes = vec![
//!     Quote::new("Bet9ja", "1", 2.10),
//!     Quote::new("BetKing", "2", 0.0),
//! ];
//!
//! assert!(matches!(evaluate(&quotes), Err(DomainError::InvalidOdds { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Odds must be finite and strictly greater than 1.0.
    #[error("invalid odds {odds} for outcome '{outcome}' from {bookmaker}")]
    InvalidOdds {
        /// Bookmaker that quoted the odds.
        bookmaker: String,
        /// Outcome the odds were quoted for.
        outcome: String,
        /// The rejected odds value.
        odds: f64,
    },

    /// Total stake must be finite and positive.
    #[error("stake must be positive, got {stake}")]
    InvalidStake {
        /// The rejected stake.
        stake: f64,
    },

    /// A raw record is missing a required field.
    #[error("record has no {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A raw record carries a start time that is not ISO-8601.
    #[error("invalid start time '{value}'")]
    InvalidTimestamp {
        /// The unparseable value.
        value: String,
    },
}
