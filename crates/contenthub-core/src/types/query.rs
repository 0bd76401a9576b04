//! Predicate types for document queries.
//!
//! A [`DocumentQuery`] is a conjunction of predicates. Stores execute it
//! without interpreting what the predicates mean for an entity;
//! [`Predicate::matches`] is the reference semantics every store must agree
//! with.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::Document;

/// A single condition on a stored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Predicate {
    /// The attribute is present and equal to `value`.
    Eq {
        /// Attribute name.
        field: String,
        /// Expected value.
        value: Value,
    },
    /// The attribute is absent or differs from `value`.
    Ne {
        /// Attribute name.
        field: String,
        /// Excluded value.
        value: Value,
    },
    /// The document id is not `id`.
    IdNot {
        /// Excluded id.
        id: String,
    },
    /// After [`normalize_search`] on both sides, `needle` is a substring of
    /// at least one of `fields`.
    NormalizedContains {
        /// Attributes searched.
        fields: Vec<String>,
        /// Already-normalized search text.
        needle: String,
    },
}

impl Predicate {
    /// Whether `doc` satisfies this predicate.
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            Self::Eq { field, value } => doc.value_of(field).as_ref() == Some(value),
            Self::Ne { field, value } => doc.value_of(field).as_ref() != Some(value),
            Self::IdNot { id } => doc.id != *id,
            Self::NormalizedContains { fields, needle } => fields.iter().any(|f| {
                doc.get_str(f)
                    .is_some_and(|stored| normalize_search(stored).contains(needle.as_str()))
            }),
        }
    }
}

/// A conjunction of predicates. The empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentQuery {
    /// Predicates that must all hold.
    pub predicates: Vec<Predicate>,
}

impl DocumentQuery {
    /// The query matching every document.
    pub fn all() -> Self {
        Self::default()
    }

    /// Add an equality predicate.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.predicates.push(Predicate::Eq {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Add an inequality predicate (missing attributes satisfy it).
    pub fn ne(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.predicates.push(Predicate::Ne {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Exclude one document by id.
    pub fn id_not(mut self, id: impl Into<String>) -> Self {
        self.predicates.push(Predicate::IdNot { id: id.into() });
        self
    }

    /// Add a normalized substring search over several attributes.
    ///
    /// The raw text is normalized here; an input that normalizes to nothing
    /// adds no predicate.
    pub fn search(mut self, fields: &[&str], raw: &str) -> Self {
        let needle = normalize_search(raw);
        if !needle.is_empty() {
            self.predicates.push(Predicate::NormalizedContains {
                fields: fields.iter().map(|f| f.to_string()).collect(),
                needle,
            });
        }
        self
    }

    /// Append all predicates of `other`.
    pub fn and(mut self, other: DocumentQuery) -> Self {
        self.predicates.extend(other.predicates);
        self
    }

    /// Whether `doc` satisfies every predicate.
    pub fn matches(&self, doc: &Document) -> bool {
        self.predicates.iter().all(|p| p.matches(doc))
    }

    /// Whether this query has no predicates.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

/// Lower-case and remove all whitespace, so that `"Dama Rose"`,
/// `"damarose"` and `"DAMA   ROSE"` compare equal.
pub fn normalize_search(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
