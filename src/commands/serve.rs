//! Start the ContentHub server.

use clap::Args;

use contenthub_core::config::AppConfig;
use contenthub_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        store = ?config.store.provider,
        "Starting ContentHub"
    );

    contenthub_api::run_server(config).await
}
