//! Raw per-bookmaker event payloads and resolved fixtures.
//!
//! - [`RawEvent`] - One event as delivered by a bookmaker feed
//! - [`RawMarket`] - One market within a raw event
//! - [`RawOdds`] - One outcome price within a raw market
//! - [`Fixture`] - The validated match identity extracted from a raw event
//!
//! Raw types keep every field optional: feeds are not trusted to deliver
//! complete records, and the normalizer decides what to skip. A field of
//! the wrong JSON type reads as absent, and a list entry that is not an
//! object reads as an empty record, so one bad entry never rejects the
//! rest of a feed.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::id::MatchKey;

/// One outcome price within a raw market.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawOdds {
    #[serde(default, deserialize_with = "lenient")]
    pub outcome: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub value: Option<f64>,
}

impl RawOdds {
    pub fn new(outcome: impl Into<String>, value: f64) -> Self {
        Self {
            outcome: Some(outcome.into()),
            value: Some(value),
        }
    }
}

/// One market within a raw event.
///
/// `market_params` is kept as raw JSON since feeds send line values both
/// as strings (`"2.5"`) and as numbers (`2.5`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMarket {
    #[serde(default, deserialize_with = "lenient")]
    pub market_type: Option<String>,
    #[serde(default)]
    pub market_params: Option<Value>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub odds: Vec<RawOdds>,
}

impl RawMarket {
    /// Create a market without parameters.
    pub fn new(market_type: impl Into<String>) -> Self {
        Self {
            market_type: Some(market_type.into()),
            market_params: None,
            odds: Vec::new(),
        }
    }

    /// Set the market parameters (e.g. the over/under line).
    #[must_use]
    pub fn with_params(mut self, params: impl Into<String>) -> Self {
        self.market_params = Some(Value::String(params.into()));
        self
    }

    /// Add an outcome price.
    #[must_use]
    pub fn with_odds(mut self, outcome: impl Into<String>, value: f64) -> Self {
        self.odds.push(RawOdds::new(outcome, value));
        self
    }

    /// Market parameters rendered as text.
    ///
    /// Null and empty strings count as absent.
    #[must_use]
    pub fn params(&self) -> Option<String> {
        match self.market_params.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// One event as delivered by a bookmaker feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(default, deserialize_with = "lenient")]
    pub home_team: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub away_team: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub league: Option<String>,
    /// ISO-8601 start time. Naive timestamps are read as UTC.
    #[serde(default, deserialize_with = "lenient")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub bookmaker_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub markets: Vec<RawMarket>,
}

impl RawEvent {
    /// Parse a feed document: a JSON array of events.
    ///
    /// # Errors
    ///
    /// Fails only when the document is not JSON or not an array.
    pub fn parse_feed(content: &str) -> serde_json::Result<Vec<Self>> {
        let entries: Vec<Value> = serde_json::from_str(content)?;
        Ok(entries.into_iter().map(from_value_or_default).collect())
    }

    /// Create an event for a fixture with no markets.
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        start_time: impl Into<String>,
    ) -> Self {
        Self {
            home_team: Some(home_team.into()),
            away_team: Some(away_team.into()),
            start_time: Some(start_time.into()),
            ..Self::default()
        }
    }

    /// Set the league.
    #[must_use]
    pub fn with_league(mut self, league: impl Into<String>) -> Self {
        self.league = Some(league.into());
        self
    }

    /// Tag the event with the bookmaker that supplied it.
    #[must_use]
    pub fn tagged(mut self, bookmaker: impl Into<String>) -> Self {
        self.bookmaker_name = Some(bookmaker.into());
        self
    }

    /// Add a market.
    #[must_use]
    pub fn with_market(mut self, market: RawMarket) -> Self {
        self.markets.push(market);
        self
    }
}

/// The validated match identity of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub home_team: String,
    pub away_team: String,
    pub league: Option<String>,
    pub start_time: DateTime<Utc>,
}

impl Fixture {
    /// The exact-match key for this fixture.
    #[must_use]
    pub fn key(&self) -> MatchKey {
        MatchKey::new(&self.home_team, &self.away_team, &self.start_time)
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(entries) => Ok(entries.into_iter().map(from_value_or_default).collect()),
        _ => Ok(Vec::new()),
    }
}

fn from_value_or_default<T: DeserializeOwned + Default>(value: Value) -> T {
    serde_json::from_value(value).unwrap_or_default()
}
