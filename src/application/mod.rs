//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the application's use cases.

pub mod cycle;
pub mod engine;

pub use cycle::{CycleError, CycleReport, CycleSettings, HousekeepingReport, ScanCycle};
