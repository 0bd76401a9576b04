//! Locale negotiation configuration.

use serde::{Deserialize, Serialize};

/// How the per-request display language is chosen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Fallback language tag when no signal is recognized.
    #[serde(default = "default_locale")]
    pub default: String,
    /// Name of the language preference cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default: default_locale(),
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_cookie_name() -> String {
    "locale".to_string()
}
