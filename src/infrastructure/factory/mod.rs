//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured components
//! from application configuration. These factories handle dependency
//! injection and wiring.
//!
//! # Submodules
//!
//! - [`feed`] - Bookmaker feed construction
//! - [`notifier`] - Notification registry construction
//! - [`cycle`] - Scan cycle wiring

pub mod cycle;
pub mod feed;
pub mod notifier;
