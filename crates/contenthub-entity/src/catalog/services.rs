//! Services offered by the business, each with a detail page under its slug.

use crate::schema::{Derivation, FieldKind, FieldSchema, FieldSpec, OptionSource};

use super::{DEFAULT_SORT, EntityDescriptor, UniqueKey, UniqueScope};

static WHAT_WE_DO: FieldSchema = FieldSchema {
    fields: &[
        FieldSpec::text("titleEn", "Title (EN)").required(),
        FieldSpec::text("titleAr", "Title (AR)"),
        FieldSpec::textarea("descriptionEn", "Description (EN)"),
        FieldSpec::textarea("descriptionAr", "Description (AR)"),
        FieldSpec::image("image", "Image"),
    ],
    localized: &["title", "description"],
};

static SCHEMA: FieldSchema = FieldSchema {
    fields: &[
        FieldSpec::text("nameEn", "Name (EN)")
            .required()
            .derives(Derivation::slug("slug")),
        FieldSpec::text("nameAr", "Name (AR)"),
        FieldSpec::slug("slug", "Slug").required(),
        FieldSpec::textarea("descriptionEn", "Description (EN)"),
        FieldSpec::textarea("descriptionAr", "Description (AR)"),
        FieldSpec::image("image", "Cover image"),
        FieldSpec::new(
            "category",
            "Filter",
            FieldKind::Select(OptionSource::Entity {
                path: "service-filters",
                value_field: "key",
                label_field: "name",
            }),
        ),
        FieldSpec::new("whatWeDo", "What we do", FieldKind::Items(&WHAT_WE_DO)),
        FieldSpec::order(),
        FieldSpec::active(),
    ],
    localized: &["name", "description"],
};

/// `/api/services`
pub static SERVICES: EntityDescriptor = EntityDescriptor {
    path: "services",
    collection: "services",
    label: "Services",
    schema: &SCHEMA,
    discriminator: None,
    filters: &[super::FilterParam::Exact {
        param: "category",
        field: "category",
    }],
    default_limit: None,
    unique: &[UniqueKey {
        field: "slug",
        scope: UniqueScope::ActiveOnly,
    }],
    validator: None,
    lookup_field: Some("slug"),
    sort: DEFAULT_SORT,
};
