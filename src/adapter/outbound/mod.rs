//! Outbound adapters (driven side).

pub mod file_feed;
pub mod memory;

pub use file_feed::JsonFileFeed;
pub use memory::MemoryStore;
