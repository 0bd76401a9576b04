//! Client stories (couples and hosts who held an event with us).

use crate::schema::{FieldSchema, FieldSpec};

use super::{DEFAULT_SORT, EntityDescriptor};

static SCHEMA: FieldSchema = FieldSchema {
    fields: &[
        FieldSpec::text("namesEn", "Names (EN)").required(),
        FieldSpec::text("namesAr", "Names (AR)"),
        FieldSpec::textarea("storyEn", "Story (EN)"),
        FieldSpec::textarea("storyAr", "Story (AR)"),
        FieldSpec::text("eventTypeEn", "Event type (EN)"),
        FieldSpec::text("eventTypeAr", "Event type (AR)"),
        FieldSpec::image("image", "Image"),
        FieldSpec::order(),
        FieldSpec::active(),
    ],
    localized: &["names", "story", "eventType"],
};

/// `/api/stories`
pub static STORIES: EntityDescriptor = EntityDescriptor {
    path: "stories",
    collection: "stories",
    label: "Stories",
    schema: &SCHEMA,
    discriminator: None,
    filters: &[],
    default_limit: None,
    unique: &[],
    validator: None,
    lookup_field: None,
    sort: DEFAULT_SORT,
};
