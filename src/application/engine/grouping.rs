//! Match and market grouping of normalized quotes.
//!
//! Groups are built in locally scoped maps and returned in first-seen
//! order so downstream iteration is deterministic for a given input.

use std::collections::HashMap;
use std::hash::Hash;

use crate::domain::{BestOdds, MarketKey, MatchKey, OddsQuote, Quote};

/// All quotes observed for one match.
#[derive(Debug, Clone)]
pub struct MatchGroup<'a> {
    pub key: MatchKey,
    pub quotes: Vec<&'a OddsQuote>,
}

/// All quotes observed for one market of one match, across bookmakers.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketGroup {
    pub key: MarketKey,
    pub quotes: Vec<Quote>,
}

impl MarketGroup {
    /// Best odds per outcome within this market.
    #[must_use]
    pub fn best_odds(&self) -> BestOdds {
        BestOdds::from_quotes(&self.quotes)
    }
}

/// Bucket quotes by exact match identity.
pub fn group_by_match(quotes: &[OddsQuote]) -> Vec<MatchGroup<'_>> {
    bucket(quotes.iter(), |q| q.match_key.clone())
        .into_iter()
        .map(|(key, quotes)| MatchGroup { key, quotes })
        .collect()
}

/// Bucket one match's quotes by market key.
pub fn group_by_market(quotes: &[&OddsQuote]) -> Vec<MarketGroup> {
    bucket(quotes.iter().copied(), |q| q.market_key.clone())
        .into_iter()
        .map(|(key, quotes)| MarketGroup {
            key,
            quotes: quotes.into_iter().map(OddsQuote::to_quote).collect(),
        })
        .collect()
}

fn bucket<'a, K, F>(quotes: impl Iterator<Item = &'a OddsQuote>, key_of: F) -> Vec<(K, Vec<&'a OddsQuote>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&OddsQuote) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut buckets: Vec<(K, Vec<&'a OddsQuote>)> = Vec::new();

    for quote in quotes {
        let key = key_of(quote);
        match index.get(&key) {
            Some(&i) => buckets[i].1.push(quote),
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push((key, vec![quote]));
            }
        }
    }

    buckets
}
