//! Singleton settings pages.

use crate::schema::{FieldSchema, FieldSpec};

use super::SettingsDescriptor;

/// Collection holding every settings document.
pub const SETTINGS_COLLECTION: &str = "settings";

/// Attribute identifying which page a settings document belongs to.
pub const SETTINGS_KEY_FIELD: &str = "page";

static HOMEPAGE_SCHEMA: FieldSchema = FieldSchema {
    fields: &[
        FieldSpec::text("heroTitleEn", "Hero title (EN)"),
        FieldSpec::text("heroTitleAr", "Hero title (AR)"),
        FieldSpec::text("heroSubtitleEn", "Hero subtitle (EN)"),
        FieldSpec::text("heroSubtitleAr", "Hero subtitle (AR)"),
        FieldSpec::image("heroImage", "Hero image"),
        FieldSpec::textarea("aboutEn", "About (EN)"),
        FieldSpec::textarea("aboutAr", "About (AR)"),
        FieldSpec::image("aboutImage", "About image"),
    ],
    localized: &["heroTitle", "heroSubtitle", "about"],
};

static LISTING_PAGE_SCHEMA: FieldSchema = FieldSchema {
    fields: &[
        FieldSpec::text("heroTitleEn", "Hero title (EN)"),
        FieldSpec::text("heroTitleAr", "Hero title (AR)"),
        FieldSpec::text("heroSubtitleEn", "Hero subtitle (EN)"),
        FieldSpec::text("heroSubtitleAr", "Hero subtitle (AR)"),
        FieldSpec::image("heroImage", "Hero image"),
        FieldSpec::textarea("introEn", "Introduction (EN)"),
        FieldSpec::textarea("introAr", "Introduction (AR)"),
    ],
    localized: &["heroTitle", "heroSubtitle", "intro"],
};

/// `/api/homepage`
pub static HOMEPAGE: SettingsDescriptor = SettingsDescriptor {
    path: "homepage",
    key: "homepage",
    label: "Homepage",
    schema: &HOMEPAGE_SCHEMA,
};

/// `/api/services-page`
pub static SERVICES_PAGE: SettingsDescriptor = SettingsDescriptor {
    path: "services-page",
    key: "services-page",
    label: "Services page",
    schema: &LISTING_PAGE_SCHEMA,
};

/// `/api/events-page`
pub static EVENTS_PAGE: SettingsDescriptor = SettingsDescriptor {
    path: "events-page",
    key: "events-page",
    label: "Events page",
    schema: &LISTING_PAGE_SCHEMA,
};
