//! Field kinds, field specifications and schemas.

use serde_json::{Number, Value};

use contenthub_core::error::AppError;
use contenthub_core::result::AppResult;
use contenthub_core::types::Fields;

use super::WriteMode;
use super::derive::{Derivation, slugify};

/// Where a `select` field takes its options from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSource {
    /// Documents of another entity: `value_field` is stored, the localized
    /// `label_field` base name is shown.
    Entity {
        /// Path of the referenced entity (e.g. `gallery-categories`).
        path: &'static str,
        /// Attribute stored on the referencing document.
        value_field: &'static str,
        /// Localized base name used as the option label.
        label_field: &'static str,
    },
}

/// The closed set of editable field kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Single-line text.
    Text,
    /// Multi-line text.
    Textarea,
    /// Integer or decimal number.
    Number,
    /// Boolean flag.
    Checkbox,
    /// Reference (URL or path) to an image held by the image host.
    Image,
    /// One value out of an option source.
    Select(OptionSource),
    /// URL-safe identifier; normalized with `slugify` on write.
    Slug,
    /// Ordered list of sub-items described by a nested schema.
    Items(&'static FieldSchema),
}

impl FieldKind {
    /// Value a fresh draft starts with.
    pub fn empty_value(&self) -> Value {
        match self {
            Self::Number => Value::Number(Number::from(0)),
            Self::Checkbox => Value::Bool(false),
            Self::Items(_) => Value::Array(Vec::new()),
            _ => Value::String(String::new()),
        }
    }

    /// Convert a submitted value into its stored representation.
    pub fn coerce(&self, name: &str, value: &Value) -> AppResult<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        match self {
            Self::Text | Self::Textarea | Self::Image | Self::Select(_) => match value {
                Value::String(s) => Ok(Value::String(s.clone())),
                Value::Number(n) => Ok(Value::String(n.to_string())),
                Value::Bool(b) => Ok(Value::String(b.to_string())),
                _ => Err(AppError::validation(format!("{name} must be a string"))),
            },
            Self::Slug => match value {
                Value::String(s) => Ok(Value::String(slugify(s))),
                _ => Err(AppError::validation(format!("{name} must be a string"))),
            },
            Self::Number => match value {
                Value::Number(_) => Ok(value.clone()),
                Value::String(s) if s.trim().is_empty() => Ok(Value::Null),
                Value::String(s) => parse_number(s.trim())
                    .ok_or_else(|| AppError::validation(format!("{name} must be a number"))),
                _ => Err(AppError::validation(format!("{name} must be a number"))),
            },
            Self::Checkbox => match value {
                Value::Bool(_) => Ok(value.clone()),
                Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                    "true" | "on" | "1" | "yes" => Ok(Value::Bool(true)),
                    "false" | "off" | "0" | "no" | "" => Ok(Value::Bool(false)),
                    _ => Err(AppError::validation(format!("{name} must be a boolean"))),
                },
                Value::Number(n) => Ok(Value::Bool(n.as_f64().is_some_and(|f| f != 0.0))),
                _ => Err(AppError::validation(format!("{name} must be a boolean"))),
            },
            Self::Items(schema) => {
                let Value::Array(items) = value else {
                    return Err(AppError::validation(format!("{name} must be a list")));
                };
                let mut out = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    let Value::Object(map) = item else {
                        return Err(AppError::validation(format!(
                            "{name}[{index}] must be an object"
                        )));
                    };
                    let mut sub = schema.coerce(map)?;
                    schema.sync_aliases(&mut sub);
                    out.push(Value::Object(sub));
                }
                Ok(Value::Array(out))
            }
        }
    }

    /// Whether a `null` submitted for this kind means "not provided".
    ///
    /// Flags and numbers always hold a value once stored, so a `null` leaves
    /// the initial value (create) or the stored value (update) in place.
    pub fn null_is_absent(&self) -> bool {
        matches!(self, Self::Checkbox | Self::Number)
    }

    /// Whether `value` counts as "not filled in" for required checks.
    pub fn is_blank(&self, value: Option<&Value>) -> bool {
        match (self, value) {
            (_, None) | (_, Some(Value::Null)) => true,
            (_, Some(Value::String(s))) => s.trim().is_empty(),
            (Self::Items(_), Some(Value::Array(items))) => items.is_empty(),
            _ => false,
        }
    }
}

fn parse_number(s: &str) -> Option<Value> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(Value::Number(Number::from(i)));
    }
    s.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
}

/// A declared initial value overriding [`FieldKind::empty_value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Initial {
    /// Boolean initial value.
    Bool(bool),
    /// Integer initial value.
    Int(i64),
}

/// One editable attribute of an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Attribute name as stored.
    pub name: &'static str,
    /// Admin form label.
    pub label: &'static str,
    /// Editing affordance and storage type.
    pub kind: FieldKind,
    /// Whether create/update payloads must carry a non-blank value.
    pub required: bool,
    /// Dependent field recomputed when this one changes.
    pub derivation: Option<Derivation>,
    /// Initial value for new drafts and created documents.
    pub initial: Option<Initial>,
}

impl FieldSpec {
    /// Declare a field of any kind.
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            derivation: None,
            initial: None,
        }
    }

    /// Single-line text field.
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Multi-line text field.
    pub const fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    /// Image reference field.
    pub const fn image(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Image)
    }

    /// Slug field.
    pub const fn slug(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Slug)
    }

    /// The conventional `order` number field.
    pub const fn order() -> Self {
        Self::new("order", "Display order", FieldKind::Number).initial(Initial::Int(0))
    }

    /// The conventional `isActive` checkbox, initially checked.
    pub const fn active() -> Self {
        Self::new("isActive", "Active", FieldKind::Checkbox).initial(Initial::Bool(true))
    }

    /// Mark the field as required.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Recompute `derivation.target` whenever this field changes.
    pub const fn derives(mut self, derivation: Derivation) -> Self {
        self.derivation = Some(derivation);
        self
    }

    /// Set the initial value.
    pub const fn initial(mut self, initial: Initial) -> Self {
        self.initial = Some(initial);
        self
    }

    /// The value a new draft or created document starts with.
    pub fn initial_value(&self) -> Value {
        match self.initial {
            Some(Initial::Bool(b)) => Value::Bool(b),
            Some(Initial::Int(i)) => Value::Number(Number::from(i)),
            None => self.kind.empty_value(),
        }
    }
}

/// Ordered list of an entity's editable fields plus the base names of its
/// bilingual pairs.
///
/// For every base name `b` in `localized` the schema carries `bEn` and
/// `bAr`; the legacy single-language attribute `b` is derived from `bEn`
/// and never edited directly.
#[derive(Debug, PartialEq)]
pub struct FieldSchema {
    /// Editable fields in form order.
    pub fields: &'static [FieldSpec],
    /// Base names of `<base>En` / `<base>Ar` pairs.
    pub localized: &'static [&'static str],
}

impl FieldSchema {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Initial values of every field.
    pub fn initial_values(&self) -> Fields {
        self.fields
            .iter()
            .map(|f| (f.name.to_string(), f.initial_value()))
            .collect()
    }

    /// Keep only schema fields from `input`, coerced to their stored types.
    ///
    /// A legacy `<base>` attribute is accepted as `<base>En` when the
    /// payload does not carry `<base>En` itself. Flags and numbers that
    /// coerce to `null` are dropped.
    pub fn coerce(&self, input: &Fields) -> AppResult<Fields> {
        let mut out = Fields::new();
        for spec in self.fields {
            let Some(value) = input.get(spec.name) else {
                continue;
            };
            let coerced = spec.kind.coerce(spec.name, value)?;
            if coerced.is_null() && spec.kind.null_is_absent() {
                continue;
            }
            out.insert(spec.name.to_string(), coerced);
        }
        for base in self.localized {
            let en = format!("{base}En");
            if out.contains_key(&en) {
                continue;
            }
            if let (Some(spec), Some(legacy)) = (self.field(&en), input.get(*base)) {
                out.insert(en.clone(), spec.kind.coerce(&en, legacy)?);
            }
        }
        Ok(out)
    }

    /// Fill derived targets from their sources present in `fields`.
    ///
    /// [`DeriveRule::Mirror`] targets are always overwritten.
    /// [`DeriveRule::Slugify`] targets are filled on create when absent or
    /// blank; on update only when the patch itself carries a blank target,
    /// so renaming a document keeps its stored slug or key.
    pub fn derive_missing(&self, fields: &mut Fields, mode: WriteMode) {
        for spec in self.fields {
            let Some(derivation) = spec.derivation else {
                continue;
            };
            let Some(source) = fields.get(spec.name).and_then(Value::as_str) else {
                continue;
            };
            let target = fields.get(derivation.target);
            let target_blank = match self.field(derivation.target) {
                Some(t) if mode == WriteMode::Update => target.is_some() && t.kind.is_blank(target),
                Some(t) => t.kind.is_blank(target),
                None => true,
            };
            if derivation.rule.overwrites() || target_blank {
                let derived = derivation.rule.apply(source);
                fields.insert(derivation.target.to_string(), Value::String(derived));
            }
        }
    }

    /// Insert initial values for every field missing from `fields`.
    pub fn fill_initial(&self, fields: &mut Fields) {
        for spec in self.fields {
            if !fields.contains_key(spec.name) {
                fields.insert(spec.name.to_string(), spec.initial_value());
            }
        }
    }

    /// Check required fields.
    ///
    /// On create every required field must be non-blank; on update only the
    /// required fields present in the patch are checked.
    pub fn check_required(&self, fields: &Fields, mode: WriteMode) -> AppResult<()> {
        for spec in self.fields.iter().filter(|f| f.required) {
            let value = fields.get(spec.name);
            if mode == WriteMode::Update && value.is_none() {
                continue;
            }
            if spec.kind.is_blank(value) {
                return Err(AppError::missing_field(spec.name));
            }
        }
        Ok(())
    }

    /// Keep each legacy `<base>` attribute equal to `<base>En`.
    pub fn sync_aliases(&self, fields: &mut Fields) {
        for base in self.localized {
            if let Some(en) = fields.get(&format!("{base}En")).cloned() {
                fields.insert(base.to_string(), en);
            }
        }
    }
}
