//! Derived-value rules between fields.

/// How a source value is turned into its target value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeriveRule {
    /// URL-safe slug of the source (`"Wedding & Co."` → `"wedding-co"`).
    /// Server-side it only fills a blank target, so hand-edited slugs survive.
    Slugify,
    /// Exact copy of the source. Always overwrites the target.
    Mirror,
}

impl DeriveRule {
    /// Compute the target value. Idempotent: `apply(apply(x)) == apply(x)`.
    pub fn apply(&self, source: &str) -> String {
        match self {
            Self::Slugify => slugify(source),
            Self::Mirror => source.to_string(),
        }
    }

    /// Whether payload preparation replaces an already-present target.
    pub fn overwrites(&self) -> bool {
        matches!(self, Self::Mirror)
    }
}

/// A rule recomputing `target` whenever the owning field changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derivation {
    /// The dependent field.
    pub target: &'static str,
    /// The rule producing its value.
    pub rule: DeriveRule,
}

impl Derivation {
    /// Slug derivation into `target`.
    pub const fn slug(target: &'static str) -> Self {
        Self {
            target,
            rule: DeriveRule::Slugify,
        }
    }

    /// Mirror derivation into `target`.
    pub const fn mirror(target: &'static str) -> Self {
        Self {
            target,
            rule: DeriveRule::Mirror,
        }
    }
}

/// Lower-case ASCII alphanumerics joined by single hyphens.
///
/// Every other character acts as a separator, so the output only contains
/// `[a-z0-9-]` and never starts or ends with a hyphen.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}
