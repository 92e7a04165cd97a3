use clap::Parser;
use query_event_hook::app::{handle_fatal_error, init_logging, AppConfig};
use query_event_hook::cli::{execute_command, Cli};
use query_event_hook::config::load_config;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.command.config_path()).await {
        Ok(config) => config,
        Err(e) => handle_fatal_error(e.into(), cli.verbose),
    };

    let app_config = AppConfig::new(cli.verbose).with_configured_level(config.log_level.clone());
    init_logging(&app_config);

    if let Err(e) = execute_command(cli.command, config).await {
        handle_fatal_error(e, cli.verbose);
    }
}
