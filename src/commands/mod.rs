//! CLI command definitions and dispatch.

pub mod hash_password;
pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use contenthub_core::config::AppConfig;
use contenthub_core::error::AppError;

/// ContentHub: bilingual content API
#[derive(Debug, Parser)]
#[command(name = "contenthub-server", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Apply pending database migrations
    Migrate,
    /// Print the Argon2 hash of a password for `auth.admin_password_hash`
    HashPassword(hash_password::HashPasswordArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate => migrate::execute(&config).await,
            Commands::HashPassword(args) => hash_password::execute(args),
        }
    }
}
