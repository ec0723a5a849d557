//! Flattening of raw bookmaker events into normalized odds quotes.
//!
//! Only field presence is checked here. Incomplete events, markets or
//! odds entries are skipped with a warning and never abort the batch.
//! Odds values are passed through untouched; the evaluator decides
//! whether they are usable.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::warn;

use crate::domain::{DomainError, Fixture, MarketKey, MatchKey, OddsQuote, RawEvent, RawMarket};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// The output of one normalization pass.
#[derive(Debug, Clone, Default)]
pub struct Normalized {
    /// Quotes in event, market, odds order.
    pub quotes: Vec<OddsQuote>,
    /// Fixture metadata per match. The first event seen for a match wins.
    pub fixtures: HashMap<MatchKey, Fixture>,
    /// Number of events, markets or odds entries skipped as malformed.
    pub skipped: usize,
}

/// Normalize a batch of tagged raw events.
pub fn normalize(events: &[RawEvent]) -> Normalized {
    let mut out = Normalized::default();

    for event in events {
        let (bookmaker, fixture) = match event_identity(event) {
            Ok(identity) => identity,
            Err(error) => {
                warn!(
                    home_team = ?event.home_team,
                    away_team = ?event.away_team,
                    bookmaker = ?event.bookmaker_name,
                    %error,
                    "Skipping malformed event"
                );
                out.skipped += 1;
                continue;
            }
        };

        let match_key = fixture.key();
        out.fixtures.entry(match_key.clone()).or_insert(fixture);

        for market in &event.markets {
            normalize_market(market, bookmaker, &match_key, &mut out);
        }
    }

    out
}

fn normalize_market(market: &RawMarket, bookmaker: &str, match_key: &MatchKey, out: &mut Normalized) {
    let Some(market_type) = present(&market.market_type) else {
        warn!(%match_key, bookmaker, "Skipping market without market_type");
        out.skipped += 1;
        return;
    };
    let market_key = MarketKey::new(market_type, market.params());

    for odds in &market.odds {
        let (Some(outcome), Some(value)) = (present(&odds.outcome), odds.value) else {
            warn!(%match_key, market = %market_key, bookmaker, "Skipping incomplete odds entry");
            out.skipped += 1;
            continue;
        };

        out.quotes.push(OddsQuote {
            bookmaker: bookmaker.to_string(),
            match_key: match_key.clone(),
            market_key: market_key.clone(),
            outcome: outcome.to_string(),
            odds: value,
        });
    }
}

fn event_identity(event: &RawEvent) -> Result<(&str, Fixture), DomainError> {
    let bookmaker = required(&event.bookmaker_name, "bookmaker_name")?;
    let home_team = required(&event.home_team, "home_team")?;
    let away_team = required(&event.away_team, "away_team")?;
    let start_time = parse_start_time(required(&event.start_time, "start_time")?)?;

    let fixture = Fixture {
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
        league: present(&event.league).map(str::to_string),
        start_time,
    };
    Ok((bookmaker, fixture))
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn required<'a>(field: &'a Option<String>, name: &'static str) -> Result<&'a str, DomainError> {
    present(field).ok_or(DomainError::MissingField { field: name })
}

/// Parse an ISO-8601 start time. Timestamps without an offset are UTC.
pub fn parse_start_time(value: &str) -> Result<DateTime<Utc>, DomainError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DomainError::InvalidTimestamp {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RawMarket, RawOdds};
    use chrono::TimeZone;

    fn event(bookmaker: &str) -> RawEvent {
        RawEvent::new("Liverpool", "Chelsea", "2024-05-01T15:00:00Z")
            .with_league("Premier League")
            .tagged(bookmaker)
    }

    #[test]
    fn flattens_markets_and_odds() {
        let events = vec![event("Bet9ja")
            .with_market(
                RawMarket::new("1X2")
                    .with_odds("1", 2.1)
                    .with_odds("X", 3.4)
                    .with_odds("2", 4.2),
            )
            .with_market(
                RawMarket::new("over_under")
                    .with_params("2.5")
                    .with_odds("over", 1.9)
                    .with_odds("under", 2.0),
            )];

        let normalized = normalize(&events);

        assert_eq!(normalized.quotes.len(), 5);
        assert_eq!(normalized.skipped, 0);
        assert_eq!(normalized.fixtures.len(), 1);

        let first = &normalized.quotes[0];
        assert_eq!(first.bookmaker, "Bet9ja");
        assert_eq!(first.match_key.as_str(), "Liverpool|Chelsea|2024-05-01T15:00:00Z");
        assert_eq!(first.market_key.to_string(), "1X2");
        assert_eq!(first.outcome, "1");
        assert_eq!(first.odds, 2.1);

        assert_eq!(normalized.quotes[3].market_key.to_string(), "over_under:2.5");
    }

    #[test]
    fn skips_events_missing_identity() {
        let mut no_home = event("A");
        no_home.home_team = None;
        let untagged = RawEvent::new("Liverpool", "Chelsea", "2024-05-01T15:00:00Z");
        let bad_time = RawEvent::new("Liverpool", "Chelsea", "tomorrow").tagged("A");

        let normalized = normalize(&[no_home, untagged, bad_time]);

        assert!(normalized.quotes.is_empty());
        assert!(normalized.fixtures.is_empty());
        assert_eq!(normalized.skipped, 3);
    }

    #[test]
    fn skips_incomplete_markets_and_odds_but_keeps_the_rest() {
        let mut untyped = RawMarket::new("1X2").with_odds("1", 2.0);
        untyped.market_type = None;

        let mut market = RawMarket::new("1X2").with_odds("1", 2.0);
        market.odds.push(RawOdds {
            outcome: None,
            value: Some(3.0),
        });
        market.odds.push(RawOdds {
            outcome: Some("2".into()),
            value: None,
        });

        let normalized = normalize(&[event("A").with_market(untyped).with_market(market)]);

        assert_eq!(normalized.quotes.len(), 1);
        assert_eq!(normalized.skipped, 3);
    }

    #[test]
    fn passes_odds_through_without_validation() {
        let normalized =
            normalize(&[event("A").with_market(RawMarket::new("1X2").with_odds("1", -1.0))]);
        assert_eq!(normalized.quotes[0].odds, -1.0);
    }

    #[test]
    fn first_event_provides_fixture_metadata() {
        let mut second = event("B");
        second.league = Some("EPL".into());
        let normalized = normalize(&[event("A"), second]);

        let fixture = normalized.fixtures.values().next().unwrap();
        assert_eq!(fixture.league.as_deref(), Some("Premier League"));
    }

    #[test]
    fn parses_offset_and_naive_start_times() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 15, 0, 0).unwrap();

        assert_eq!(parse_start_time("2024-05-01T15:00:00Z").unwrap(), expected);
        assert_eq!(parse_start_time("2024-05-01T16:00:00+01:00").unwrap(), expected);
        assert_eq!(parse_start_time("2024-05-01T15:00:00").unwrap(), expected);
        assert_eq!(parse_start_time("2024-05-01 15:00:00").unwrap(), expected);
        assert!(matches!(
            parse_start_time("01/05/2024"),
            Err(DomainError::InvalidTimestamp { .. })
        ));
    }
}
