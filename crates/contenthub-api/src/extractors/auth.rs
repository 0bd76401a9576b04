//! `Caller` and `AdminSession` extractors: resolve the request locale and,
//! when a session token is present, the admin identity.

use axum::extract::FromRequestParts;
use axum::http::header::{ACCEPT_LANGUAGE, AUTHORIZATION};
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use contenthub_core::error::AppError;
use contenthub_core::types::Locale;
use contenthub_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Context of any caller. An invalid or expired token degrades to the
/// public view instead of failing.
#[derive(Debug, Clone)]
pub struct Caller(pub RequestContext);

impl std::ops::Deref for Caller {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Context of an authenticated admin. Rejects with a uniform 401.
#[derive(Debug, Clone)]
pub struct AdminSession(pub RequestContext);

impl AdminSession {
    /// Admin username.
    pub fn username(&self) -> &str {
        self.0.admin.as_deref().unwrap_or_default()
    }
}

impl std::ops::Deref for AdminSession {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let locale = request_locale(parts, &jar, state);

        let admin = session_token(parts, &jar, state).and_then(|token| {
            state
                .auth
                .verify(&token)
                .inspect_err(|e| tracing::debug!(error = %e, "Ignoring invalid session token"))
                .ok()
        });

        Ok(Caller(match admin {
            Some(claims) => RequestContext::admin(locale, claims.username()),
            None => RequestContext::public(locale),
        }))
    }
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = session_token(parts, &jar, state)
            .ok_or_else(|| AppError::unauthorized("Missing session token"))?;
        let claims = state.auth.verify(&token)?;
        let locale = request_locale(parts, &jar, state);

        Ok(AdminSession(RequestContext::admin(
            locale,
            claims.username(),
        )))
    }
}

/// Bearer token first, then the session cookie.
fn session_token(parts: &Parts, jar: &CookieJar, state: &AppState) -> Option<String> {
    let bearer = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }
    jar.get(&state.config.auth.session_cookie)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty())
}

fn request_locale(parts: &Parts, jar: &CookieJar, state: &AppState) -> Locale {
    let cookie = jar.get(&state.config.locale.cookie_name).map(|c| c.value());
    let header = parts
        .headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    Locale::negotiate(cookie, header, state.default_locale)
}
