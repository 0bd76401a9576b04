//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use contenthub_service::ListResult;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Listing response: `{ success, data, count, pagination? }`.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    /// Always `true`.
    pub success: bool,
    /// Items, count, and optional pagination envelope.
    #[serde(flatten)]
    pub result: ListResult,
}

impl ListResponse {
    /// Wrap a service listing.
    pub fn ok(result: ListResult) -> Self {
        Self {
            success: true,
            result,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Always `true`.
    pub success: bool,
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// A successful message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Upload response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Always `true`.
    pub success: bool,
    /// Public reference to store on the owning record.
    pub image_url: String,
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Session token, also set as an HttpOnly cookie.
    pub token: String,
    /// Admin username.
    pub username: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
}

/// Current session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Whether the caller holds a valid admin session.
    pub authenticated: bool,
    /// Admin username when authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Negotiated display language.
    pub locale: String,
    /// Text direction of the display language (`ltr` or `rtl`).
    pub direction: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Document store provider and reachability.
    pub store: ComponentHealth,
    /// Image host provider and reachability.
    pub images: ComponentHealth,
}

/// Health of one collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Provider type name.
    pub provider: String,
    /// Whether the last health check succeeded.
    pub healthy: bool,
}
