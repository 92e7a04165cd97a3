//! CLI argument parsing and command handlers

pub mod args;
pub mod record;

pub use args::{Cli, Commands};
pub use record::run_record;

/// Run the parsed command
pub async fn execute_command(
    command: Commands,
    config: crate::config::HookConfig,
) -> anyhow::Result<()> {
    match command {
        Commands::Record {
            snapshot, output, ..
        } => run_record(&snapshot, output, config).await,
    }
}
