//! Events and the event-type registry.
//!
//! Both live in the `events` collection; event types carry
//! `isEventType = true` and are excluded from event listings unless
//! `includeEventTypes=true` is passed.

use contenthub_core::result::AppResult;
use contenthub_core::types::Fields;

use crate::schema::{
    Derivation, FieldKind, FieldSchema, FieldSpec, OptionSource, Validator, WriteMode,
};

use super::{DEFAULT_SORT, Discriminator, DocumentKind, EntityDescriptor, FilterParam};

const FLAG: &str = "isEventType";

const INSTANCE: Discriminator = Discriminator {
    field: FLAG,
    kind: DocumentKind::Instance,
    include_param: Some("includeEventTypes"),
};

const CATEGORY: Discriminator = Discriminator {
    field: FLAG,
    kind: DocumentKind::Category,
    include_param: None,
};

static EVENT_SCHEMA: FieldSchema = FieldSchema {
    fields: &[
        FieldSpec::text("titleEn", "Title (EN)").required(),
        FieldSpec::text("titleAr", "Title (AR)"),
        FieldSpec::textarea("descriptionEn", "Description (EN)"),
        FieldSpec::textarea("descriptionAr", "Description (AR)"),
        FieldSpec::new(
            "typeEn",
            "Type (EN)",
            FieldKind::Select(OptionSource::Entity {
                path: "event-types",
                value_field: "typeEn",
                label_field: "title",
            }),
        ),
        FieldSpec::text("typeAr", "Type (AR)"),
        FieldSpec::text("themeEn", "Theme (EN)"),
        FieldSpec::text("themeAr", "Theme (AR)"),
        FieldSpec::text("sizeEn", "Size (EN)"),
        FieldSpec::text("sizeAr", "Size (AR)"),
        FieldSpec::text("placeEn", "Place (EN)"),
        FieldSpec::text("placeAr", "Place (AR)"),
        FieldSpec::image("image", "Image"),
        FieldSpec::order(),
        FieldSpec::active(),
    ],
    localized: &["title", "description", "type", "theme", "size", "place"],
};

static EVENT_TYPE_SCHEMA: FieldSchema = FieldSchema {
    fields: &[
        FieldSpec::text("titleEn", "Title (EN)")
            .required()
            .derives(Derivation::mirror("typeEn")),
        FieldSpec::text("titleAr", "Title (AR)").derives(Derivation::mirror("typeAr")),
        FieldSpec::image("image", "Image"),
        FieldSpec::order(),
        FieldSpec::active(),
    ],
    localized: &["title"],
};

fn validate_event(schema: &FieldSchema, fields: &mut Fields, mode: WriteMode) -> AppResult<()> {
    schema.check_required(fields, mode)?;
    INSTANCE.stamp(fields);
    Ok(())
}

fn validate_event_type(
    schema: &FieldSchema,
    fields: &mut Fields,
    mode: WriteMode,
) -> AppResult<()> {
    schema.check_required(fields, mode)?;
    CATEGORY.stamp(fields);
    Ok(())
}

/// `/api/events`
pub static EVENTS: EntityDescriptor = EntityDescriptor {
    path: "events",
    collection: "events",
    label: "Events",
    schema: &EVENT_SCHEMA,
    discriminator: Some(INSTANCE),
    filters: &[
        FilterParam::Exact {
            param: "type",
            field: "typeEn",
        },
        FilterParam::Exact {
            param: "theme",
            field: "themeEn",
        },
        FilterParam::Exact {
            param: "size",
            field: "sizeEn",
        },
        FilterParam::Search {
            param: "place",
            fields: &["placeEn", "placeAr"],
        },
    ],
    default_limit: Some(20),
    unique: &[],
    validator: Some(validate_event as Validator),
    lookup_field: None,
    sort: DEFAULT_SORT,
};

/// `/api/event-types`
pub static EVENT_TYPES: EntityDescriptor = EntityDescriptor {
    path: "event-types",
    collection: "events",
    label: "Event types",
    schema: &EVENT_TYPE_SCHEMA,
    discriminator: Some(CATEGORY),
    filters: &[],
    default_limit: None,
    unique: &[],
    validator: Some(validate_event_type as Validator),
    lookup_field: None,
    sort: DEFAULT_SORT,
};
