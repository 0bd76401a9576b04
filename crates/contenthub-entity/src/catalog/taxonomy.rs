//! Keyed category registries referenced by select fields.

use crate::schema::{Derivation, FieldSchema, FieldSpec};

use super::{DEFAULT_SORT, EntityDescriptor, UniqueKey, UniqueScope};

static KEYED: FieldSchema = FieldSchema {
    fields: &[
        FieldSpec::text("nameEn", "Name (EN)")
            .required()
            .derives(Derivation::slug("key")),
        FieldSpec::text("nameAr", "Name (AR)"),
        FieldSpec::slug("key", "Key").required(),
        FieldSpec::order(),
        FieldSpec::active(),
    ],
    localized: &["name"],
};

const KEY: &[UniqueKey] = &[UniqueKey {
    field: "key",
    scope: UniqueScope::All,
}];

/// `/api/gallery-categories`
pub static GALLERY_CATEGORIES: EntityDescriptor = EntityDescriptor {
    path: "gallery-categories",
    collection: "gallery_categories",
    label: "Gallery categories",
    schema: &KEYED,
    discriminator: None,
    filters: &[],
    default_limit: None,
    unique: KEY,
    validator: None,
    lookup_field: None,
    sort: DEFAULT_SORT,
};

/// `/api/service-filters`
pub static SERVICE_FILTERS: EntityDescriptor = EntityDescriptor {
    path: "service-filters",
    collection: "service_filters",
    label: "Service filters",
    schema: &KEYED,
    discriminator: None,
    filters: &[],
    default_limit: None,
    unique: KEY,
    validator: None,
    lookup_field: None,
    sort: DEFAULT_SORT,
};
