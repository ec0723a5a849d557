//! Notifications about new opportunities and finished scan cycles.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::StoredOpportunity;

/// Events that can trigger notifications.
#[derive(Debug, Clone)]
pub enum Event {
    /// A new opportunity was persisted.
    OpportunityDetected(OpportunityEvent),
    /// A scan cycle finished.
    CycleCompleted(CycleEvent),
}

/// New opportunity event.
#[derive(Debug, Clone)]
pub struct OpportunityEvent {
    pub id: String,
    /// `Home vs Away`.
    pub fixture: String,
    pub market_type: String,
    pub arbitrage_percentage: f64,
    pub expected_profit: f64,
    pub bookmakers: Vec<String>,
}

impl From<&StoredOpportunity> for OpportunityEvent {
    fn from(record: &StoredOpportunity) -> Self {
        let opp = &record.opportunity;
        Self {
            id: record.id.to_string(),
            fixture: format!("{} vs {}", opp.home_team, opp.away_team),
            market_type: opp.market_type.clone(),
            arbitrage_percentage: opp.arbitrage_percentage,
            expected_profit: opp.expected_profit,
            bookmakers: opp.bookmakers.iter().cloned().collect(),
        }
    }
}

/// Scan cycle summary event.
#[derive(Debug, Clone)]
pub struct CycleEvent {
    pub timestamp: DateTime<Utc>,
    pub opportunities_found: usize,
    pub inserted: usize,
    pub updated: usize,
    pub errors: usize,
}

/// Receives scan events.
///
/// Delivery is fire-and-forget: `notify` must not block the scan cycle,
/// so slow sinks hand the event to a task of their own.
pub trait Notifier: Send + Sync {
    fn notify(&self, event: Event);
}

/// Fans one event out to every registered sink, in registration order.
#[derive(Default)]
pub struct NotifierRegistry {
    sinks: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, sink: Box<dyn Notifier>) {
        self.sinks.push(sink);
    }

    /// Deliver `event` to each sink.
    pub fn notify_all(&self, event: Event) {
        self.sinks.iter().for_each(|sink| sink.notify(event.clone()));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

/// Notifier that writes events to the tracing log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: Event) {
        match event {
            Event::OpportunityDetected(e) => {
                info!(
                    id = %e.id,
                    fixture = %e.fixture,
                    market = %e.market_type,
                    percentage = %format!("{:.2}", e.arbitrage_percentage),
                    profit = e.expected_profit,
                    bookmakers = %e.bookmakers.join(", "),
                    "New arbitrage opportunity"
                );
            }
            Event::CycleCompleted(e) => {
                info!(
                    timestamp = %e.timestamp,
                    found = e.opportunities_found,
                    inserted = e.inserted,
                    updated = e.updated,
                    errors = e.errors,
                    "Scan cycle completed"
                );
            }
        }
    }
}
