//! CLI argument structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build telemetry records for query lifecycle events
#[derive(Parser)]
#[command(name = "query-event-hook")]
#[command(
    about = "Build query lifecycle telemetry records from captured hook invocations",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the record for a captured hook invocation
    #[command(name = "record")]
    Record {
        /// JSON snapshot of the hook invocation
        #[arg(short = 's', long)]
        snapshot: PathBuf,

        /// Hook configuration file (TOML)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// JSON-lines file to append the record to (overrides the config)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

impl Commands {
    pub fn config_path(&self) -> Option<&std::path::Path> {
        match self {
            Commands::Record { config, .. } => config.as_deref(),
        }
    }
}
