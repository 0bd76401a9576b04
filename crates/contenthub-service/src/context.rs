//! Per-request context: who is asking and in which language.

use contenthub_core::types::Locale;

/// Context for the current request, resolved once by the HTTP layer and
/// threaded explicitly through every service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Display language for localized fields.
    pub locale: Locale,
    /// Admin username when the caller holds a valid session.
    pub admin: Option<String>,
}

impl RequestContext {
    /// An anonymous visitor.
    pub fn public(locale: Locale) -> Self {
        Self {
            locale,
            admin: None,
        }
    }

    /// An authenticated admin.
    pub fn admin(locale: Locale, username: impl Into<String>) -> Self {
        Self {
            locale,
            admin: Some(username.into()),
        }
    }

    /// Whether the caller is an authenticated admin.
    pub fn is_admin(&self) -> bool {
        self.admin.is_some()
    }
}
