//! Arbscout - sports betting arbitrage detection.
//!
//! Reads odds from several bookmakers, finds markets where backing every
//! outcome at the best available price guarantees a profit, and splits a
//! stake so each outcome returns the same amount.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Bookmaker-agnostic types: quotes, markets, opportunities
//! - [`application`] - The detection engine and the scan cycle
//! - [`port`] - Traits for feeds, stores and notifiers
//! - [`adapter`] - JSON file feeds, the in-memory store and the CLI
//! - [`infrastructure`] - Configuration, logging and component wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use arbscout::application::engine::{calculate_arbitrage, calculate_stakes};
//! use arbscout::domain::Quote;
//!
//! let quotes = [
//!     Quote::new("Bet9ja", "1", 2.10),
//!     Quote::new("BetKing", "X", 3.80),
//!     Quote::new("SportyBet", "2", 4.50),
//! ];
//! let result = calculate_arbitrage(&quotes);
//! assert!(result.exists);
//!
//! let stakes = calculate_stakes(&quotes, 1000.0, Some(result.percentage));
//! assert_eq!(stakes.distribution.len(), 3);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
