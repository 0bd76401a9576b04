//! Auth handlers: login, logout, session.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use contenthub_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, SessionResponse};
use crate::error::ApiError;
use crate::extractors::{Caller, JsonBody};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let issued = state.auth.login(&req.username, &req.password)?;

    let cookie = Cookie::build((state.config.auth.session_cookie.clone(), issued.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    Ok((
        jar.add(cookie),
        Json(ApiResponse::ok(LoginResponse {
            token: issued.token,
            username: issued.username,
            expires_at: issued.expires_at,
        })),
    ))
}

/// POST /api/auth/logout
///
/// Clears the session cookie. Tokens are stateless, so a bearer token stays
/// valid until it expires.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let removal = Cookie::build(state.config.auth.session_cookie.clone()).path("/");
    (
        jar.remove(removal),
        Json(MessageResponse::ok("Logged out successfully")),
    )
}

/// GET /api/auth/session
pub async fn session(caller: Caller) -> Json<ApiResponse<SessionResponse>> {
    Json(ApiResponse::ok(SessionResponse {
        authenticated: caller.is_admin(),
        username: caller.admin.clone(),
        locale: caller.locale.code().to_string(),
        direction: if caller.locale.is_rtl() { "rtl" } else { "ltr" }.to_string(),
    }))
}
