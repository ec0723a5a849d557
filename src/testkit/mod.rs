//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`]: Builders for raw events, quotes and opportunities.
//! - [`feed`]: Mock [`BookmakerFeed`](crate::port::BookmakerFeed)
//!   implementations: `StaticFeed`, `ScriptedFeed`.
//! - [`notifier`]: `RecordingNotifier` for asserting on emitted events.
//! - [`config`]: Canonical test configurations.

pub mod config;
pub mod domain;
pub mod feed;
pub mod notifier;
