//! The generic form model driven by a [`FieldSchema`].
//!
//! A [`Draft`] holds the values being edited in the admin interface. Every
//! field kind maps to exactly one [`Affordance`]; derived fields are
//! recomputed synchronously whenever their source changes.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use contenthub_core::error::AppError;
use contenthub_core::result::AppResult;
use contenthub_core::types::{Document, Fields};

use super::derive::slugify;
use super::field::{FieldKind, FieldSchema, OptionSource};

/// The editing control rendered for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Affordance {
    /// Single-line input.
    TextInput,
    /// Multi-line input.
    TextArea,
    /// Numeric input.
    NumberInput,
    /// Checkbox toggle.
    Toggle,
    /// File picker with preview; uploads go through the image host.
    ImagePicker,
    /// Drop-down whose options are fetched from another entity.
    RemoteDropdown {
        /// Entity path to fetch options from.
        path: String,
        /// Attribute used as the option value.
        value_field: String,
        /// Localized base name used as the option label.
        label_field: String,
    },
    /// Input restricted to slug characters.
    SlugInput,
    /// Repeatable group of sub-forms.
    Repeater {
        /// Sub-item field names in order.
        fields: Vec<String>,
    },
}

impl FieldKind {
    /// The control this kind is edited with.
    pub fn affordance(&self) -> Affordance {
        match self {
            Self::Text => Affordance::TextInput,
            Self::Textarea => Affordance::TextArea,
            Self::Number => Affordance::NumberInput,
            Self::Checkbox => Affordance::Toggle,
            Self::Image => Affordance::ImagePicker,
            Self::Select(OptionSource::Entity {
                path,
                value_field,
                label_field,
            }) => Affordance::RemoteDropdown {
                path: path.to_string(),
                value_field: value_field.to_string(),
                label_field: label_field.to_string(),
            },
            Self::Slug => Affordance::SlugInput,
            Self::Items(schema) => Affordance::Repeater {
                fields: schema.fields.iter().map(|f| f.name.to_string()).collect(),
            },
        }
    }
}

/// One rendered field of a draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
    /// Attribute name.
    pub name: String,
    /// Display label.
    pub label: String,
    /// Whether the field must be filled in.
    pub required: bool,
    /// Editing control.
    pub affordance: Affordance,
    /// Current value.
    pub value: Value,
    /// Local preview for image fields (data URL or object URL).
    pub preview: Option<String>,
}

/// Values being edited for one document.
#[derive(Debug, Clone)]
pub struct Draft {
    schema: &'static FieldSchema,
    values: Fields,
    previews: HashMap<String, String>,
}

impl Draft {
    /// A draft seeded from the schema's initial values.
    pub fn new(schema: &'static FieldSchema) -> Self {
        Self {
            schema,
            values: schema.initial_values(),
            previews: HashMap::new(),
        }
    }

    /// A draft seeded from an existing document. Attributes outside the
    /// schema are ignored; schema fields the document lacks keep their
    /// initial value.
    pub fn from_document(schema: &'static FieldSchema, doc: &Document) -> Self {
        let mut draft = Self::new(schema);
        for spec in schema.fields {
            if let Some(value) = doc.get(spec.name).filter(|v| !v.is_null()) {
                draft.values.insert(spec.name.to_string(), value.clone());
            }
        }
        for base in schema.localized {
            let en = format!("{base}En");
            let has_en = draft
                .schema
                .field(&en)
                .is_some_and(|spec| !spec.kind.is_blank(draft.values.get(&en)));
            if !has_en {
                if let Some(legacy) = doc.get(base).filter(|v| v.is_string()) {
                    draft.values.insert(en, legacy.clone());
                }
            }
        }
        draft
    }

    /// The schema this draft is edited against.
    pub fn schema(&self) -> &'static FieldSchema {
        self.schema
    }

    /// Current value of a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// All current values.
    pub fn values(&self) -> &Fields {
        &self.values
    }

    /// Change a field and recompute whatever derives from it.
    pub fn set(&mut self, name: &str, value: Value) -> AppResult<()> {
        let spec = self
            .schema
            .field(name)
            .ok_or_else(|| AppError::validation(format!("unknown field: {name}")))?;
        let value = match (spec.kind, value) {
            (FieldKind::Slug, Value::String(s)) => Value::String(slugify(&s)),
            (_, value) => value,
        };
        if let (Some(derivation), Some(source)) = (spec.derivation, value.as_str()) {
            self.values.insert(
                derivation.target.to_string(),
                Value::String(derivation.rule.apply(source)),
            );
        }
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Record the reference returned by the image host for an image field.
    pub fn set_image(&mut self, name: &str, url: impl Into<String>) -> AppResult<()> {
        match self.schema.field(name).map(|f| f.kind) {
            Some(FieldKind::Image) => {
                self.values.insert(name.to_string(), Value::String(url.into()));
                Ok(())
            }
            Some(_) => Err(AppError::validation(format!("{name} is not an image field"))),
            None => Err(AppError::validation(format!("unknown field: {name}"))),
        }
    }

    /// Attach a local preview to an image field.
    pub fn set_preview(&mut self, name: &str, preview: impl Into<String>) {
        self.previews.insert(name.to_string(), preview.into());
    }

    /// Local preview of an image field, if any.
    pub fn preview(&self, name: &str) -> Option<&str> {
        self.previews.get(name).map(String::as_str)
    }

    /// Render every field in schema order.
    pub fn render(&self) -> Vec<FormField> {
        self.schema
            .fields
            .iter()
            .map(|spec| FormField {
                name: spec.name.to_string(),
                label: spec.label.to_string(),
                required: spec.required,
                affordance: spec.kind.affordance(),
                value: self
                    .values
                    .get(spec.name)
                    .cloned()
                    .unwrap_or_else(|| spec.initial_value()),
                preview: self.previews.get(spec.name).cloned(),
            })
            .collect()
    }

    /// The payload submitted to the content API.
    pub fn to_patch(&self) -> Fields {
        self.values.clone()
    }
}
