//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "config": config,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Engine");
    output::field(
        "Min profit",
        format!("{}%", config.engine.min_profit_percentage),
    );
    output::field("Stake", output::money(config.engine.default_stake));

    output::section("Scan");
    output::field("Interval", format!("{}s", config.scan.interval_secs));
    output::field("Stale after", format!("{}s", config.scan.stale_after_secs));
    output::field("Purge after", format!("{}d", config.scan.purge_after_days));

    output::section("Bookmakers");
    if config.bookmakers.is_empty() {
        output::note("(none configured)");
    }
    for bookmaker in &config.bookmakers {
        let path = bookmaker.resolve_path(config.base_dir.as_deref());
        let state = if bookmaker.enabled { "" } else { " (disabled)" };
        output::note(&format!("- {} {}{}", bookmaker.name, path.display(), state));
    }

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = Config::load(path)?;
    let enabled = config.enabled_bookmakers().count();

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": path.display().to_string(),
            "valid": true,
            "bookmakers": enabled,
        }));
        return Ok(());
    }

    output::success("Configuration valid");
    output::field("Path", path.display());
    output::field("Bookmakers", enabled);
    if enabled == 0 {
        output::warning("No enabled bookmakers; scans will find nothing");
    }
    Ok(())
}
