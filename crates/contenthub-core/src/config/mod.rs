//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod database;
pub mod locale;
pub mod logging;
pub mod uploads;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::{DatabaseConfig, StoreConfig, StoreProvider};
pub use self::locale::LocaleConfig;
pub use self::logging::LoggingConfig;
pub use self::uploads::{UploadProvider, UploadsConfig};

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// PostgreSQL connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Document store selection.
    #[serde(default)]
    pub store: StoreConfig,
    /// Admin authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Request locale negotiation.
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Image upload settings.
    #[serde(default)]
    pub uploads: UploadsConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default.toml` with an environment-specific overlay
    /// (`config/{env}.toml`) and environment variables prefixed with
    /// `CONTENTHUB__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config/default", env)
    }

    /// Load configuration using an explicit base file (without extension).
    pub fn load_from(base: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("CONTENTHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_files() {
        let config = AppConfig::load_from("does/not/exist", "nowhere").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.locale.default, "en");
        assert_eq!(config.uploads.max_size_bytes, 10 * 1024 * 1024);
        assert_eq!(config.store.provider, StoreProvider::Postgres);
    }
}
