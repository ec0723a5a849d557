use arbscout::adapter::inbound::cli::command::Cli;
use arbscout::adapter::inbound::cli::{output, run};
use clap::Parser;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
