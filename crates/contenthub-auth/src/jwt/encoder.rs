//! JWT token creation.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use contenthub_core::config::AuthConfig;
use contenthub_core::error::AppError;

use super::claims::Claims;

/// Creates signed HS256 session tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    ttl_minutes: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_minutes: config.token_ttl_minutes as i64,
        }
    }

    /// Token lifetime in seconds.
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_minutes * 60
    }

    /// Issue a token for `username`.
    pub fn issue(&self, username: &str) -> Result<(String, Claims), AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.ttl_minutes)).timestamp(),
            jti: Uuid::new_v4(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign token: {e}")))?;
        Ok((token, claims))
    }
}
