//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies such as bookmaker
//! feeds, opportunity storage, and notifications.

pub mod feed;
pub mod notifier;
pub mod store;
