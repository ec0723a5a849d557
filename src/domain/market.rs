//! Market identity and its human-facing labels.
//!
//! A [`MarketKey`] is the internal grouping identity: market type plus
//! optional parameters (the line of an over/under market, for example).
//! Display labels are derived from it once, when an opportunity record is
//! built, and never feed back into grouping.

use std::fmt;

use serde::{Deserialize, Serialize};

const OVER_UNDER: &str = "over_under";

/// Identity of a market within a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarketKey {
    market_type: String,
    params: Option<String>,
}

impl MarketKey {
    /// Create a market key. Empty parameters count as absent.
    pub fn new(market_type: impl Into<String>, params: Option<String>) -> Self {
        Self {
            market_type: market_type.into(),
            params: params.filter(|p| !p.is_empty()),
        }
    }

    /// The market type, e.g. `1X2` or `over_under`.
    #[must_use]
    pub fn market_type(&self) -> &str {
        &self.market_type
    }

    /// The market parameters, e.g. `2.5`.
    #[must_use]
    pub fn params(&self) -> Option<&str> {
        self.params.as_deref()
    }

    fn is_over_under(&self) -> bool {
        self.market_type.eq_ignore_ascii_case(OVER_UNDER)
    }

    /// Human-facing market label.
    ///
    /// `over_under` + `2.5` becomes `Over/Under 2.5`; other parameterised
    /// markets become `{type} {params}`.
    #[must_use]
    pub fn display_label(&self) -> String {
        match (&self.params, self.is_over_under()) {
            (Some(params), true) => format!("Over/Under {params}"),
            (Some(params), false) => format!("{} {params}", self.market_type),
            (None, _) => self.market_type.clone(),
        }
    }

    /// Human-facing outcome label within this market.
    ///
    /// Only over/under outcomes are rewritten (`over` becomes `Over 2.5`).
    #[must_use]
    pub fn display_outcome(&self, outcome: &str) -> String {
        match (&self.params, self.is_over_under()) {
            (Some(params), true) if outcome.eq_ignore_ascii_case("over") => {
                format!("Over {params}")
            }
            (Some(params), true) if outcome.eq_ignore_ascii_case("under") => {
                format!("Under {params}")
            }
            _ => outcome.to_string(),
        }
    }
}

impl fmt::Display for MarketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.params {
            Some(params) => write!(f, "{}:{params}", self.market_type),
            None => write!(f, "{}", self.market_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_renders_type_and_params() {
        assert_eq!(MarketKey::new("1X2", None).to_string(), "1X2");
        assert_eq!(
            MarketKey::new("over_under", Some("2.5".into())).to_string(),
            "over_under:2.5"
        );
    }

    #[test]
    fn empty_params_are_dropped() {
        assert_eq!(MarketKey::new("1X2", Some(String::new())), MarketKey::new("1X2", None));
    }

    #[test]
    fn display_label_formats_over_under() {
        let key = MarketKey::new("over_under", Some("2.5".into()));
        assert_eq!(key.display_label(), "Over/Under 2.5");

        let upper = MarketKey::new("OVER_UNDER", Some("3.5".into()));
        assert_eq!(upper.display_label(), "Over/Under 3.5");
    }

    #[test]
    fn display_label_appends_other_params() {
        assert_eq!(
            MarketKey::new("handicap", Some("-1".into())).display_label(),
            "handicap -1"
        );
        assert_eq!(MarketKey::new("1X2", None).display_label(), "1X2");
    }

    #[test]
    fn display_outcome_only_rewrites_over_under() {
        let ou = MarketKey::new("over_under", Some("2.5".into()));
        assert_eq!(ou.display_outcome("over"), "Over 2.5");
        assert_eq!(ou.display_outcome("Under"), "Under 2.5");
        assert_eq!(ou.display_outcome("push"), "push");

        let plain = MarketKey::new("1X2", None);
        assert_eq!(plain.display_outcome("X"), "X");

        let no_line = MarketKey::new("over_under", None);
        assert_eq!(no_line.display_outcome("over"), "over");
    }
}
