//! JWT claims carried by admin session tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims payload of an admin session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the admin username.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token ID, logged on login for traceability.
    pub jti: Uuid,
}

impl Claims {
    /// The admin username.
    pub fn username(&self) -> &str {
        &self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Returns the remaining TTL in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self) -> u64 {
        let remaining = self.exp - Utc::now().timestamp();
        remaining.max(0) as u64
    }
}
