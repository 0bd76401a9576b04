//! Admin authentication configuration.

use serde::{Deserialize, Serialize};

/// Admin credential and session token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token TTL in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// The single admin account name.
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
    /// Argon2 PHC string for the admin password. Empty disables login.
    #[serde(default)]
    pub admin_password_hash: String,
    /// Name of the HttpOnly cookie carrying the session token.
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_minutes: default_token_ttl(),
            admin_username: default_admin_username(),
            admin_password_hash: String::new(),
            session_cookie: default_session_cookie(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    12 * 60
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_session_cookie() -> String {
    "admin_session".to_string()
}
