mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "itemprops=warn,itemprops_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Scan { input, format } => {
            let config = Config::load()?;
            let input = config.resolve_cleaned(input);
            commands::scan::handle(&input, format)?;
        }

        Commands::Prune { input, output } => {
            let config = Config::load()?;
            let input = config.resolve_input(input);
            let output = config.resolve_cleaned(output);
            commands::prune::handle(&input, &output)?;
        }

        Commands::Configure {
            input,
            cleaned,
            show,
        } => {
            commands::configure::handle(input, cleaned, show)?;
        }
    }

    Ok(())
}
