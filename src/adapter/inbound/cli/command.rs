//! Command-line interface definitions.
//!
//! Defines the CLI structure for the arbscout application using `clap`.
//! The CLI supports ad-hoc odds evaluation, one-shot and continuous scans
//! over configured bookmaker feeds, and configuration utilities.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::engine::DEFAULT_TOTAL_STAKE;
use crate::domain::Quote;

/// Default configuration file path.
pub const DEFAULT_CONFIG: &str = "config.toml";

/// Sports betting arbitrage scanner
#[derive(Parser, Debug)]
#[command(name = "arbscout")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the arbscout CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate one market's odds for an arbitrage and split a stake
    Calculate(CalculateArgs),

    /// Run a single scan cycle over the configured feeds
    Scan(ConfigPathArg),

    /// Scan repeatedly until interrupted
    Watch(WatchArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `arbscout config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

/// Arguments for the `calculate` subcommand.
#[derive(Parser, Debug)]
pub struct CalculateArgs {
    /// A quote as BOOKMAKER,OUTCOME,ODDS (repeatable)
    #[arg(long = "quote", value_name = "BOOKMAKER,OUTCOME,ODDS", value_parser = parse_quote)]
    pub quotes: Vec<Quote>,

    /// JSON file with an array of {bookmaker, outcome, odds} objects
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Total stake to split across outcomes
    #[arg(short, long, default_value_t = DEFAULT_TOTAL_STAKE)]
    pub stake: f64,

    /// Market type, used for display labels (e.g. over_under)
    #[arg(long, default_value = "1X2")]
    pub market_type: String,

    /// Market parameters, e.g. the over/under line
    #[arg(long)]
    pub market_params: Option<String>,
}

/// Arguments for the `watch` subcommand.
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Override `scan.interval_secs`
    #[arg(long)]
    pub interval: Option<u64>,

    /// Stop after this many cycles
    #[arg(long)]
    pub max_cycles: Option<u64>,
}

/// Parse `BOOKMAKER,OUTCOME,ODDS`.
///
/// The odds are split off the right so bookmaker names may contain commas.
pub fn parse_quote(raw: &str) -> Result<Quote, String> {
    let mut parts = raw.rsplitn(3, ',');
    let (Some(odds), Some(outcome), Some(bookmaker)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected BOOKMAKER,OUTCOME,ODDS, got '{raw}'"));
    };

    let (bookmaker, outcome) = (bookmaker.trim(), outcome.trim());
    if bookmaker.is_empty() || outcome.is_empty() {
        return Err(format!("bookmaker and outcome must not be empty in '{raw}'"));
    }
    let odds: f64 = odds
        .trim()
        .parse()
        .map_err(|_| format!("invalid odds '{}' in '{raw}'", odds.trim()))?;

    Ok(Quote::new(bookmaker, outcome, odds))
}
