//! Login against the single configured admin account.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use contenthub_core::config::AuthConfig;
use contenthub_core::error::AppError;
use contenthub_core::result::AppResult;

use crate::jwt::{Claims, JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;

/// A freshly issued session token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
    /// Signed JWT.
    pub token: String,
    /// Admin username.
    pub username: String,
    /// Expiry time.
    pub expires_at: DateTime<Utc>,
    /// Lifetime in seconds, used as the cookie max-age.
    #[serde(skip)]
    pub max_age_seconds: i64,
}

/// Verifies admin credentials and session tokens.
#[derive(Debug, Clone)]
pub struct AdminAuthenticator {
    username: String,
    password_hash: String,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl AdminAuthenticator {
    /// Build from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        if config.admin_password_hash.is_empty() {
            warn!("auth.admin_password_hash is not set; admin login is disabled");
        }
        Self {
            username: config.admin_username.clone(),
            password_hash: config.admin_password_hash.clone(),
            hasher: PasswordHasher::new(),
            encoder: JwtEncoder::new(config),
            decoder: JwtDecoder::new(config),
        }
    }

    /// Check credentials and issue a session token.
    ///
    /// Every failure yields the same unauthorized error.
    pub fn login(&self, username: &str, password: &str) -> AppResult<IssuedToken> {
        if self.password_hash.is_empty() {
            return Err(AppError::unauthorized("Invalid credentials"));
        }
        let password_ok = self.hasher.verify_password(password, &self.password_hash)?;
        if !password_ok || username != self.username {
            warn!(username, "Rejected admin login");
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let (token, claims) = self.encoder.issue(&self.username)?;
        info!(username, jti = %claims.jti, "Admin logged in");
        Ok(IssuedToken {
            token,
            username: claims.sub.clone(),
            expires_at: claims.expires_at(),
            max_age_seconds: self.encoder.ttl_seconds(),
        })
    }

    /// Validate a session token and return its claims.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let claims = self.decoder.decode(token)?;
        if claims.sub != self.username {
            return Err(AppError::unauthorized("Unknown subject"));
        }
        Ok(claims)
    }
}
