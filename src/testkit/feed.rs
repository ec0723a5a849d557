//! Mock [`BookmakerFeed`] implementations for testing.
//!
//! - [`StaticFeed`]: Returns the same events on every fetch.
//! - [`ScriptedFeed`]: Pops pre-loaded results, one per fetch, and counts calls.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::RawEvent;
use crate::error::Error;
use crate::port::BookmakerFeed;

/// A feed that always returns the same events.
pub struct StaticFeed {
    bookmaker: String,
    events: Vec<RawEvent>,
}

impl StaticFeed {
    pub fn new(bookmaker: &str, events: Vec<RawEvent>) -> Self {
        Self {
            bookmaker: bookmaker.to_string(),
            events,
        }
    }
}

#[async_trait]
impl BookmakerFeed for StaticFeed {
    fn bookmaker(&self) -> &str {
        &self.bookmaker
    }

    async fn fetch(&self) -> Result<Vec<RawEvent>, Error> {
        Ok(self.events.clone())
    }
}

/// A feed with scripted fetch results.
///
/// Each call to `fetch()` pops the next result; an empty event list is
/// returned once the script is exhausted.
pub struct ScriptedFeed {
    bookmaker: String,
    results: Mutex<VecDeque<Result<Vec<RawEvent>, Error>>>,
    fetch_count: Arc<AtomicU32>,
}

impl ScriptedFeed {
    pub fn new(bookmaker: &str) -> Self {
        Self {
            bookmaker: bookmaker.to_string(),
            results: Mutex::new(VecDeque::new()),
            fetch_count: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Queue a successful fetch.
    pub fn then_events(self, events: Vec<RawEvent>) -> Self {
        self.push(Ok(events))
    }

    /// Queue a failed fetch.
    pub fn then_fail(self, reason: &str) -> Self {
        let error = Error::feed(&self.bookmaker, reason);
        self.push(Err(error))
    }

    fn push(self, result: Result<Vec<RawEvent>, Error>) -> Self {
        if let Ok(mut results) = self.results.lock() {
            results.push_back(result);
        }
        self
    }

    /// Shared counter of `fetch()` calls.
    pub fn fetch_counter(&self) -> Arc<AtomicU32> {
        self.fetch_count.clone()
    }
}

#[async_trait]
impl BookmakerFeed for ScriptedFeed {
    fn bookmaker(&self) -> &str {
        &self.bookmaker
    }

    async fn fetch(&self) -> Result<Vec<RawEvent>, Error> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        let next = self.results.lock().ok().and_then(|mut r| r.pop_front());
        next.unwrap_or_else(|| Ok(Vec::new()))
    }
}
