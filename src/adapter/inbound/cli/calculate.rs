//! Handler for the `calculate` command.

use std::path::Path;

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::CalculateArgs;
use crate::adapter::inbound::cli::output;
use crate::application::engine::{allocate, evaluate, Stakes};
use crate::domain::{ArbitrageResult, BestOdds, MarketKey, Quote};
use crate::error::{Error, Result};

#[derive(Tabled)]
struct StakeRow {
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Bookmaker")]
    bookmaker: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Return")]
    potential_return: String,
}

/// The evaluated market, ready for printing.
#[derive(Debug)]
pub struct Calculation {
    pub market: MarketKey,
    pub result: ArbitrageResult,
    pub stakes: Stakes,
    pub total_stake: f64,
}

/// Execute `calculate`.
///
/// # Errors
///
/// Fails on unreadable input, invalid odds or stake, and when the quotes
/// hold no arbitrage.
pub async fn execute(args: &CalculateArgs) -> Result<()> {
    let mut quotes = args.quotes.clone();
    if let Some(path) = &args.file {
        quotes.extend(read_quotes(path).await?);
    }

    let market = MarketKey::new(args.market_type.clone(), args.market_params.clone());
    let calculation = calculate(market, &quotes, args.stake)?;
    print(&calculation);
    Ok(())
}

/// Evaluate quotes strictly.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for fewer than two outcomes, a domain
/// error for bad odds or stake, and [`Error::NoArbitrage`] when the
/// market is fair or overround.
pub fn calculate(market: MarketKey, quotes: &[Quote], total_stake: f64) -> Result<Calculation> {
    let best = BestOdds::from_quotes(quotes);
    if best.len() < 2 {
        return Err(Error::InvalidInput(format!(
            "need quotes for at least two outcomes, got {}",
            best.len()
        )));
    }

    let result = evaluate(quotes)?;
    if !result.exists {
        return Err(Error::NoArbitrage);
    }
    let stakes = allocate(&best, total_stake, result.percentage)?;

    Ok(Calculation {
        market,
        result,
        stakes,
        total_stake,
    })
}

async fn read_quotes(path: &Path) -> Result<Vec<Quote>> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

fn print(calculation: &Calculation) {
    let Calculation {
        market,
        result,
        stakes,
        total_stake,
    } = calculation;

    if output::is_json() {
        output::json_output(json!({
            "command": "calculate",
            "market": market.display_label(),
            "market_key": market.to_string(),
            "arbitrage_percentage": result.percentage,
            "total_stake": total_stake,
            "expected_profit": stakes.expected_profit,
            "stakes": stakes.distribution.legs(),
        }));
        return;
    }
    if output::is_quiet() {
        println!("{:.2}", result.percentage);
        return;
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Market", market.display_label());
    output::field("Arbitrage", output::percentage(result.percentage));
    output::field("Total stake", output::money(*total_stake));

    output::section("Stakes");
    let rows: Vec<StakeRow> = stakes
        .distribution
        .legs()
        .iter()
        .map(|leg| StakeRow {
            outcome: market.display_outcome(&leg.outcome),
            bookmaker: leg.bookmaker.clone(),
            odds: format!("{:.2}", leg.odds),
            stake: output::money(leg.stake),
            potential_return: output::money(leg.potential_return),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());

    output::section("Result");
    output::field("Profit", output::positive(output::money(stakes.expected_profit)));
    if output::verbosity() > 0 {
        output::field(
            "Return spread",
            output::money(stakes.distribution.return_spread()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    fn one_x_two() -> Vec<Quote> {
        vec![
            Quote::new("A", "1", 2.10),
            Quote::new("B", "X", 3.80),
            Quote::new("C", "2", 4.50),
            Quote::new("B", "1", 1.90),
        ]
    }

    #[test]
    fn calculates_arbitrage_and_stakes() {
        let calc = calculate(MarketKey::new("1X2", None), &one_x_two(), 1000.0).unwrap();

        assert!(calc.result.exists);
        assert!((calc.result.percentage - 3.84).abs() < 0.01);
        assert_eq!(calc.stakes.distribution.len(), 3);
        assert_eq!(calc.stakes.distribution.get("1").unwrap().bookmaker, "A");
        assert!(calc.stakes.expected_profit > 0.0);
    }

    #[test]
    fn fair_market_is_no_arbitrage() {
        let quotes = [Quote::new("A", "yes", 1.90), Quote::new("B", "no", 1.90)];
        let err = calculate(MarketKey::new("btts", None), &quotes, 100.0).unwrap_err();
        assert!(matches!(err, Error::NoArbitrage));
    }

    #[test]
    fn single_outcome_is_invalid_input() {
        let quotes = [Quote::new("A", "1", 5.0), Quote::new("B", "1", 6.0)];
        let err = calculate(MarketKey::new("1X2", None), &quotes, 100.0).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn invalid_odds_are_reported() {
        let quotes = [Quote::new("A", "1", 0.5), Quote::new("B", "2", 3.0)];
        let err = calculate(MarketKey::new("1X2", None), &quotes, 100.0).unwrap_err();
        assert!(matches!(err, Error::Domain(DomainError::InvalidOdds { .. })));
    }

    #[test]
    fn non_positive_stake_is_rejected() {
        let err = calculate(MarketKey::new("1X2", None), &one_x_two(), 0.0).unwrap_err();
        assert!(matches!(err, Error::Domain(DomainError::InvalidStake { .. })));
    }

    #[tokio::test]
    async fn reads_quotes_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");
        std::fs::write(
            &path,
            r#"[{"bookmaker":"A","outcome":"over","odds":2.15},{"bookmaker":"B","outcome":"under","odds":2.10}]"#,
        )
        .unwrap();

        let quotes = read_quotes(&path).await.unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[1], Quote::new("B", "under", 2.10));
    }
}
