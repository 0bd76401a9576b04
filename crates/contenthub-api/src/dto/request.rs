//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}
