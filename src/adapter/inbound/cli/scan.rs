//! Handler for the `scan` command.

use std::path::Path;

use chrono::Utc;
use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::application::cycle::CycleReport;
use crate::domain::StoredOpportunity;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::cycle::build_scan_cycle;
use crate::port::{OpportunityQuery, OpportunityStore};

#[derive(Tabled)]
struct OpportunityRow {
    #[tabled(rename = "Fixture")]
    fixture: String,
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Arb %")]
    percentage: String,
    #[tabled(rename = "Profit")]
    profit: String,
    #[tabled(rename = "Bookmakers")]
    bookmakers: String,
}

impl From<&StoredOpportunity> for OpportunityRow {
    fn from(record: &StoredOpportunity) -> Self {
        let opp = &record.opportunity;
        Self {
            fixture: format!("{} vs {}", opp.home_team, opp.away_team),
            market: opp.market_type.clone(),
            percentage: format!("{:.2}", opp.arbitrage_percentage),
            profit: output::money(opp.expected_profit),
            bookmakers: opp.bookmakers.iter().cloned().collect::<Vec<_>>().join(", "),
        }
    }
}

/// Execute `scan`: one cycle, then print what is active.
///
/// # Errors
///
/// Fails when the configuration cannot be loaded or the store cannot be
/// listed. Feed failures are reported, not returned.
pub async fn execute(path: &Path) -> Result<()> {
    let config = Config::load(path)?;
    super::init_logging(&config);

    let cycle = build_scan_cycle(&config);
    let report = cycle.run(Utc::now()).await;
    let active = cycle.store().list(&OpportunityQuery::default()).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "scan",
            "report": report,
            "opportunities": active,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    print_report(&report);
    print_opportunities(&active);
    Ok(())
}

/// Print a cycle summary and its errors.
pub fn print_report(report: &CycleReport) {
    output::section("Scan");
    output::field("Bookmakers", report.bookmakers_processed);
    output::field("Events", report.events_scraped);
    output::field("Found", output::highlight(report.opportunities_found));
    if output::verbosity() > 0 {
        output::field("Inserted", report.inserted);
        output::field("Updated", report.updated);
    }

    for error in &report.errors {
        output::warning(&format!("{}: {}", error.source, error.message));
    }
    if report.success {
        output::success("Cycle complete");
    } else if report.errors.is_empty() {
        output::warning("No bookmaker feeds configured");
        output::hint("add [[bookmakers]] entries to the config file");
    }
}

/// Print opportunities as a table.
pub fn print_opportunities(records: &[StoredOpportunity]) {
    output::section("Opportunities");
    if records.is_empty() {
        output::note("(none)");
        return;
    }

    let rows: Vec<OpportunityRow> = records.iter().map(OpportunityRow::from).collect();
    output::lines(&Table::new(rows).to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{kickoff, opportunity, stored};

    #[test]
    fn row_formats_fixture_and_bookmakers() {
        let mut opp = opportunity("Arsenal", "Spurs", 2.5);
        opp.bookmakers.extend(["BetKing".to_string(), "Bet9ja".to_string()]);
        let record = stored("opp-1", opp, kickoff());
        let row = OpportunityRow::from(&record);

        assert_eq!(row.fixture, "Arsenal vs Spurs");
        assert_eq!(row.market, "1X2");
        assert_eq!(row.percentage, "2.50");
        assert_eq!(row.bookmakers, "Bet9ja, BetKing");
    }
}
