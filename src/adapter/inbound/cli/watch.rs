//! Handler for the `watch` command.

use std::time::Duration;

use chrono::Utc;
use serde_json::json;
use tokio::signal;
use tracing::{info, warn};

use crate::adapter::inbound::cli::command::WatchArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::scan::print_report;
use crate::adapter::outbound::MemoryStore;
use crate::application::cycle::ScanCycle;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::cycle::build_scan_cycle;

/// Execute `watch`: scan on an interval until Ctrl-C or `--max-cycles`.
///
/// # Errors
///
/// Fails only when the configuration cannot be loaded.
pub async fn execute(args: &WatchArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    super::init_logging(&config);

    let period = args
        .interval
        .filter(|secs| *secs > 0)
        .map_or_else(|| config.scan.interval(), Duration::from_secs);
    let cycle = build_scan_cycle(&config);

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Bookmakers", config.enabled_bookmakers().count());
    output::field("Interval", format!("{}s", period.as_secs()));
    info!(interval_secs = period.as_secs(), "Watching feeds");

    tokio::select! {
        () = watch(&cycle, period, args.max_cycles) => {}
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    output::success("Stopped");
    Ok(())
}

async fn watch(cycle: &ScanCycle<MemoryStore>, period: Duration, max_cycles: Option<u64>) {
    let mut ticker = tokio::time::interval(period);
    let mut completed = 0u64;

    while max_cycles.map_or(true, |max| completed < max) {
        ticker.tick().await;
        run_once(cycle).await;
        completed += 1;
    }
}

async fn run_once(cycle: &ScanCycle<MemoryStore>) {
    let now = Utc::now();
    let report = cycle.run(now).await;
    let housekeeping = match cycle.housekeep(now).await {
        Ok(housekeeping) => Some(housekeeping),
        Err(error) => {
            warn!(%error, "Housekeeping failed");
            None
        }
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "watch",
            "report": report,
            "housekeeping": housekeeping,
        }));
        return;
    }

    let timestamp = now.format("%H:%M:%S").to_string();
    output::info(
        &timestamp,
        "cycle",
        &format!(
            "{} found, {} new, {} errors",
            report.opportunities_found,
            report.inserted,
            report.errors.len()
        ),
    );
    if output::verbosity() > 0 {
        print_report(&report);
    } else {
        for error in &report.errors {
            output::warning(&format!("{}: {}", error.source, error.message));
        }
    }
    if let Some(housekeeping) = housekeeping.filter(|h| h.deactivated > 0 || h.purged > 0) {
        output::note(&format!(
            "{} deactivated, {} purged",
            housekeeping.deactivated, housekeeping.purged
        ));
    }
}
