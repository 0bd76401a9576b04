//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use contenthub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message.
    pub error: String,
}

/// An [`AppError`] on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// HTTP status for the wrapped error kind.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Database | ErrorKind::ExternalService | ErrorKind::ServiceUnavailable => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ErrorKind::Storage
            | ErrorKind::Internal
            | ErrorKind::Configuration
            | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message a client is allowed to see.
    fn public_message(&self) -> String {
        match self.0.kind {
            ErrorKind::Validation | ErrorKind::NotFound | ErrorKind::Conflict => {
                self.0.message.clone()
            }
            ErrorKind::Unauthorized => "Unauthorized".to_string(),
            kind if kind.is_upstream() => "Service temporarily unavailable".to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.0.kind {
            kind if kind.is_upstream() => {
                tracing::error!(kind = %kind, error = %self.0, source = ?self.0.source, "Upstream failure");
            }
            ErrorKind::Internal | ErrorKind::Configuration | ErrorKind::Serialization => {
                tracing::error!(kind = %self.0.kind, error = %self.0, "Internal server error");
            }
            ErrorKind::Unauthorized => {
                tracing::debug!(reason = %self.0.message, "Rejected unauthenticated request");
            }
            _ => {}
        }

        let body = ApiErrorResponse {
            success: false,
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_per_kind() {
        let cases = [
            (AppError::validation("titleEn is required"), 400),
            (AppError::unauthorized("bad signature"), 401),
            (AppError::not_found("Service not found"), 404),
            (AppError::conflict("slug taken"), 409),
            (AppError::database("connection refused"), 503),
            (AppError::external_service("bad gateway"), 503),
            (AppError::storage("disk full"), 500),
            (AppError::internal("boom"), 500),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError(err).status().as_u16(), expected);
        }
    }

    #[test]
    fn test_messages_hide_detail() {
        let unauthorized = ApiError(AppError::unauthorized("Token expired"));
        assert_eq!(unauthorized.public_message(), "Unauthorized");

        let db = ApiError(AppError::database("password authentication failed for user"));
        assert_eq!(db.public_message(), "Service temporarily unavailable");

        let validation = ApiError(AppError::missing_field("nameEn"));
        assert_eq!(validation.public_message(), "nameEn is required");
    }
}
