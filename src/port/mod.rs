//! Outbound ports of the scan cycle.
//!
//! The engine itself is pure. Everything it reads or writes crosses one
//! of these traits, so the cycle can run against files and memory in the
//! CLI and against scripted fakes in tests.
//!
//! ```text
//!  BookmakerFeed ──raw events──▶ ScanCycle ──plan──▶ OpportunityStore
//!                                    │
//!                                    └──events──▶ NotifierRegistry ──▶ Notifier*
//! ```
//!
//! - [`BookmakerFeed`]: one bookmaker's raw events per fetch
//! - [`OpportunityStore`]: owns opportunity identity and lifetime
//! - [`Notifier`]: downstream hook for new opportunities and cycle summaries

pub mod outbound;

pub use outbound::feed::BookmakerFeed;
pub use outbound::notifier::{
    CycleEvent, Event, LogNotifier, Notifier, NotifierRegistry, OpportunityEvent,
};
pub use outbound::store::{AppliedPlan, OpportunityQuery, OpportunityStore};
