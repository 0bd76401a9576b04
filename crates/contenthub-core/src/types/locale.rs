//! Display-language selection and bilingual text resolution.
//!
//! Every read path resolves an `{en, ar}` pair into one display string.
//! Both the resolver and the request negotiation are total: unknown input
//! degrades to a default instead of failing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A supported display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Arabic.
    Ar,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    /// The lowercase language tag.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Whether the language is written right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Self::Ar)
    }

    /// Parse a language tag such as `ar`, `AR-eg` or `en_US` by its primary
    /// subtag. Returns `None` for unsupported languages.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    /// Parse a tag, falling back to [`Locale::default`] when unsupported.
    pub fn from_tag_or_default(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_default()
    }

    /// Choose the request locale from its signals.
    ///
    /// Precedence: the preference cookie, then the first `Accept-Language`
    /// token (quality values ignored), then `default`. The first signal that
    /// is present decides; if its value is unsupported the result is
    /// `default`.
    pub fn negotiate(cookie: Option<&str>, accept_language: Option<&str>, default: Locale) -> Self {
        let cookie = cookie.map(str::trim).filter(|c| !c.is_empty());
        if let Some(value) = cookie {
            return Self::from_tag(value).unwrap_or(default);
        }

        let header_tag = accept_language
            .and_then(|h| h.split(',').next())
            .and_then(|t| t.split(';').next())
            .map(str::trim)
            .filter(|t| !t.is_empty() && *t != "*");
        match header_tag {
            Some(tag) => Self::from_tag(tag).unwrap_or(default),
            None => default,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An English/Arabic string pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    /// English value.
    pub en: Option<String>,
    /// Arabic value.
    pub ar: Option<String>,
}

impl LocalizedText {
    /// Build a pair from optional values.
    pub fn new(en: Option<impl Into<String>>, ar: Option<impl Into<String>>) -> Self {
        Self {
            en: en.map(Into::into),
            ar: ar.map(Into::into),
        }
    }

    /// Whether neither language carries text.
    pub fn is_blank(&self) -> bool {
        non_empty(&self.en).is_none() && non_empty(&self.ar).is_none()
    }

    /// Resolve into a display string; see [`resolve`].
    pub fn resolve(&self, locale: Locale) -> String {
        resolve(locale, self)
    }
}

/// Pick the display string for `locale`.
///
/// Arabic prefers `ar` and falls back to `en`; every other locale prefers
/// `en` and falls back to `ar`. Whitespace-only values count as empty. When
/// both sides are empty the result is `""`.
pub fn resolve(locale: Locale, text: &LocalizedText) -> String {
    let (preferred, fallback) = match locale {
        Locale::Ar => (&text.ar, &text.en),
        Locale::En => (&text.en, &text.ar),
    };
    non_empty(preferred)
        .or_else(|| non_empty(fallback))
        .map(str::to_string)
        .unwrap_or_default()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
