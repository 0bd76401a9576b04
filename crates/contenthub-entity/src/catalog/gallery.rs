//! Gallery images grouped by category.

use crate::schema::{FieldKind, FieldSchema, FieldSpec, OptionSource};

use super::{DEFAULT_SORT, EntityDescriptor, FilterParam};

static SCHEMA: FieldSchema = FieldSchema {
    fields: &[
        FieldSpec::text("titleEn", "Title (EN)"),
        FieldSpec::text("titleAr", "Title (AR)"),
        FieldSpec::image("image", "Image").required(),
        FieldSpec::new(
            "category",
            "Category",
            FieldKind::Select(OptionSource::Entity {
                path: "gallery-categories",
                value_field: "key",
                label_field: "name",
            }),
        ),
        FieldSpec::order(),
        FieldSpec::active(),
    ],
    localized: &["title"],
};

/// `/api/gallery`
pub static GALLERY: EntityDescriptor = EntityDescriptor {
    path: "gallery",
    collection: "gallery",
    label: "Gallery",
    schema: &SCHEMA,
    discriminator: None,
    filters: &[FilterParam::Exact {
        param: "category",
        field: "category",
    }],
    default_limit: Some(12),
    unique: &[],
    validator: None,
    lookup_field: None,
    sort: DEFAULT_SORT,
};
