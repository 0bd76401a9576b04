//! The generic stored document shared by every content collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Attribute map of a document, excluding identity and audit timestamps.
pub type Fields = serde_json::Map<String, Value>;

/// Keys owned by the store/repository boundary. Never accepted from payloads.
pub const RESERVED_KEYS: [&str; 4] = ["id", "_id", "createdAt", "updatedAt"];

/// A stored content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Opaque store-assigned identifier.
    pub id: String,
    /// All other attributes.
    #[serde(flatten)]
    pub fields: Fields,
    /// Creation timestamp, stamped by the repository adapter.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, stamped by the repository adapter.
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Look up an attribute.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Look up a string attribute.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Look up a boolean attribute.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.fields.get(name).and_then(Value::as_bool)
    }

    /// Resolve a sort/filter key, including the audit timestamps which live
    /// outside [`Document::fields`].
    pub fn value_of(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(Value::String(self.id.clone())),
            "createdAt" => Some(Value::String(self.created_at.to_rfc3339())),
            "updatedAt" => Some(Value::String(self.updated_at.to_rfc3339())),
            _ => self.fields.get(name).cloned(),
        }
    }

    /// Serialize to a flat JSON object.
    pub fn to_json(&self) -> Value {
        let mut map = self.fields.clone();
        map.insert("id".to_string(), Value::String(self.id.clone()));
        map.insert(
            "createdAt".to_string(),
            Value::String(self.created_at.to_rfc3339()),
        );
        map.insert(
            "updatedAt".to_string(),
            Value::String(self.updated_at.to_rfc3339()),
        );
        Value::Object(map)
    }
}

/// A document ready to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDocument {
    /// Attributes to store.
    pub fields: Fields,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Initial update timestamp (equal to `created_at`).
    pub updated_at: DateTime<Utc>,
}

impl NewDocument {
    /// Stamp a new document with the given time.
    pub fn new(fields: Fields, now: DateTime<Utc>) -> Self {
        Self {
            fields,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Drop identity and audit keys from a client-supplied attribute map.
pub fn strip_reserved(fields: &mut Fields) {
    for key in RESERVED_KEYS {
        fields.remove(key);
    }
}
