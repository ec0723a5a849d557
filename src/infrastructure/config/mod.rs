//! Infrastructure configuration modules.

pub mod engine;
pub mod feeds;
pub mod logging;
pub mod scan;
pub mod settings;

pub use settings::Config;
