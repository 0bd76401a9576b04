//! Sort keys for document listings.
//!
//! Stores apply the keys in order and always break remaining ties by id, so
//! a listing is stable across pages.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// Orient an ascending comparison.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    /// SQL `ORDER BY` suffix. Missing attributes sort last either way.
    pub fn sql_suffix(&self) -> &'static str {
        match self {
            Self::Asc => " ASC NULLS LAST",
            Self::Desc => " DESC NULLS LAST",
        }
    }
}

/// One sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// Attribute name (`createdAt`/`updatedAt` address the audit timestamps).
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortField {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Whether the key addresses an audit timestamp column.
    pub fn is_timestamp(&self) -> bool {
        matches!(self.field.as_str(), "createdAt" | "updatedAt")
    }
}
