//! CLI module graph.

pub mod calculate;
pub mod command;
pub mod config;
pub mod output;
pub mod scan;
pub mod watch;

use command::{Cli, Commands, ConfigCommand};

use crate::error::Result;
use crate::infrastructure::config::logging::LoggingConfig;
use crate::infrastructure::config::settings::Config;

/// Dispatch a parsed command line.
///
/// # Errors
///
/// Returns whatever the selected handler returns.
pub async fn run(cli: Cli) -> Result<()> {
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    match cli.command {
        Commands::Calculate(args) => {
            init_logging_level(LoggingConfig {
                level: "warn".into(),
                ..LoggingConfig::default()
            });
            calculate::execute(&args).await
        }
        Commands::Scan(args) => scan::execute(&args.config).await,
        Commands::Watch(args) => watch::execute(&args).await,
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args.config),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
    }
}

/// Initialize logging from the config, with `-v`/`-q` overriding the level.
pub(crate) fn init_logging(config: &Config) {
    init_logging_level(config.logging.clone());
}

fn init_logging_level(mut logging: LoggingConfig) {
    match (output::is_quiet(), output::verbosity()) {
        (true, _) => logging.level = "error".into(),
        (false, 0) => {}
        (false, 1) => logging.level = "debug".into(),
        (false, _) => logging.level = "trace".into(),
    }
    if output::is_json() {
        logging.format = "json".into();
    }
    logging.init();
}
