//! Core CLI definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "itemprops")]
#[command(about = "Scan and prune item property datasets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report every property whose value holds a number greater than zero
    #[command(visible_alias = "s")]
    Scan {
        /// Items JSON to scan (defaults to the cleaned dataset)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ScanFormat,
    },

    /// Strip property objects down to the whitelisted keys
    #[command(visible_alias = "p")]
    Prune {
        /// Items JSON to read
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Where to write the cleaned JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Configure default dataset paths
    #[command(visible_alias = "c")]
    Configure {
        /// Set default raw items file (prune input)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Set default cleaned items file (prune output, scan input)
        #[arg(long)]
        cleaned: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScanFormat {
    /// One line per match followed by a total
    Text,
    /// Matches and count as a JSON object
    Json,
}
