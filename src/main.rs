//! ContentHub server: bilingual content API for a marketing site.
//!
//! Main entry point. Parses the command line, loads configuration,
//! initializes logging and dispatches to a command.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use contenthub_core::config::{AppConfig, LoggingConfig};

mod commands;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);

    if let Err(e) = cli.execute(config).await {
        tracing::error!(error = %e, "Command failed");
        std::process::exit(1);
    }
}

/// Load the base file, the `CONTENTHUB_ENV` overlay, then environment
/// variables.
fn load_configuration(base: &str) -> Result<AppConfig, contenthub_core::AppError> {
    let env = std::env::var("CONTENTHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load_from(base, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
