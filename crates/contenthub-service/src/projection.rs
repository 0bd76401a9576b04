//! Locale projection of stored documents.
//!
//! For every localized base name `b` of a schema, the projected document
//! carries `b` resolved into the request locale next to the raw `bEn` and
//! `bAr` values. Sub-item lists are projected recursively.

use serde_json::Value;

use contenthub_core::types::{Document, Fields, Locale, LocalizedText, resolve};
use contenthub_entity::{FieldKind, FieldSchema};

fn text(fields: &Fields, name: &str) -> Option<String> {
    fields.get(name).and_then(Value::as_str).map(str::to_string)
}

/// Resolve the localized fields of an attribute map in place.
pub fn localize_fields(fields: &mut Fields, schema: &FieldSchema, locale: Locale) {
    for base in schema.localized {
        let pair = LocalizedText {
            en: text(fields, &format!("{base}En")),
            ar: text(fields, &format!("{base}Ar")),
        };
        // Documents written before the bilingual split only carry `base`.
        let pair = if pair.is_blank() {
            LocalizedText {
                en: text(fields, base),
                ar: None,
            }
        } else {
            pair
        };
        fields.insert(base.to_string(), Value::String(resolve(locale, &pair)));
    }

    for spec in schema.fields {
        let FieldKind::Items(sub) = spec.kind else {
            continue;
        };
        if let Some(Value::Array(items)) = fields.get_mut(spec.name) {
            for item in items.iter_mut() {
                if let Value::Object(map) = item {
                    localize_fields(map, sub, locale);
                }
            }
        }
    }
}

/// Serialize a document with its localized fields resolved for `locale`.
pub fn project(doc: &Document, schema: &FieldSchema, locale: Locale) -> Value {
    let mut value = doc.to_json();
    if let Value::Object(map) = &mut value {
        localize_fields(map, schema, locale);
    }
    value
}
