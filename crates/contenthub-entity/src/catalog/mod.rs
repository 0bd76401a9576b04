//! The entity catalog.
//!
//! Each content type is described once by an [`EntityDescriptor`]; the
//! repository, query builder, handlers and admin controller are generic over
//! it.

mod events;
mod gallery;
mod services;
mod settings;
mod stories;
mod taxonomy;

use serde_json::Value;

use contenthub_core::types::{DocumentQuery, Fields, SortDirection, SortField};

use crate::schema::{FieldSchema, Validator};

pub use events::{EVENT_TYPES, EVENTS};
pub use gallery::GALLERY;
pub use services::SERVICES;
pub use settings::{EVENTS_PAGE, HOMEPAGE, SERVICES_PAGE, SETTINGS_COLLECTION, SETTINGS_KEY_FIELD};
pub use stories::STORIES;
pub use taxonomy::{GALLERY_CATEGORIES, SERVICE_FILTERS};

/// Which side of a shared collection a descriptor addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Regular content items (flag absent or `false`).
    Instance,
    /// Registry entries stored next to the instances (flag `true`).
    Category,
}

/// Splits one collection into instances and categories by a boolean flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discriminator {
    /// Boolean attribute marking category documents.
    pub field: &'static str,
    /// Side addressed by the owning descriptor.
    pub kind: DocumentKind,
    /// Query parameter that lets an instance listing include categories.
    pub include_param: Option<&'static str>,
}

impl Discriminator {
    /// Predicates selecting this side of the collection.
    pub fn query(&self, include_categories: bool) -> DocumentQuery {
        match self.kind {
            DocumentKind::Category => DocumentQuery::all().eq(self.field, true),
            DocumentKind::Instance if include_categories => DocumentQuery::all(),
            DocumentKind::Instance => DocumentQuery::all().ne(self.field, true),
        }
    }

    /// Write the flag for this side into a payload.
    pub fn stamp(&self, fields: &mut Fields) {
        fields.insert(
            self.field.to_string(),
            Value::Bool(self.kind == DocumentKind::Category),
        );
    }
}

/// A query parameter accepted by a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterParam {
    /// Equality on the stored (English-canonical) value.
    Exact {
        /// Query parameter name.
        param: &'static str,
        /// Attribute compared.
        field: &'static str,
    },
    /// Whitespace- and case-insensitive substring search.
    Search {
        /// Query parameter name.
        param: &'static str,
        /// Attributes searched; any match suffices.
        fields: &'static [&'static str],
    },
}

impl FilterParam {
    /// Query parameter name.
    pub fn param(&self) -> &'static str {
        match self {
            Self::Exact { param, .. } | Self::Search { param, .. } => param,
        }
    }
}

/// Which documents a unique key is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueScope {
    /// Only active documents hold the key.
    ActiveOnly,
    /// Every document of the entity holds the key.
    All,
}

/// An attribute whose value may not repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniqueKey {
    /// Attribute name.
    pub field: &'static str,
    /// Documents compared.
    pub scope: UniqueScope,
}

/// Everything the generic engine needs to serve one entity.
#[derive(Debug)]
pub struct EntityDescriptor {
    /// URL segment under `/api`.
    pub path: &'static str,
    /// Store collection.
    pub collection: &'static str,
    /// Human-readable name.
    pub label: &'static str,
    /// Editable fields.
    pub schema: &'static FieldSchema,
    /// Instance/category split for shared collections.
    pub discriminator: Option<Discriminator>,
    /// Accepted listing filters.
    pub filters: &'static [FilterParam],
    /// Page size when listings are always paginated.
    pub default_limit: Option<u64>,
    /// Unique attributes.
    pub unique: &'static [UniqueKey],
    /// Replaces the schema's required check when present.
    pub validator: Option<Validator>,
    /// Attribute used by `GET /api/<path>/slug/<value>`.
    pub lookup_field: Option<&'static str>,
    /// Listing order.
    pub sort: &'static [(&'static str, SortDirection)],
}

/// `order` ascending, newest first among equals.
pub const DEFAULT_SORT: &[(&str, SortDirection)] =
    &[("order", SortDirection::Asc), ("createdAt", SortDirection::Desc)];

impl EntityDescriptor {
    /// The query every repository call for this entity starts from.
    pub fn default_query(&self, include_categories: bool) -> DocumentQuery {
        self.discriminator
            .map(|d| d.query(include_categories))
            .unwrap_or_default()
    }

    /// Listing order as store sort fields.
    pub fn sort_fields(&self) -> Vec<SortField> {
        self.sort
            .iter()
            .map(|(field, direction)| SortField::new(*field, *direction))
            .collect()
    }

    /// Whether listings are paginated even without `page`/`limit`.
    pub fn always_paginated(&self) -> bool {
        self.default_limit.is_some()
    }
}

/// A singleton settings page.
#[derive(Debug)]
pub struct SettingsDescriptor {
    /// URL segment under `/api`.
    pub path: &'static str,
    /// Value of the key attribute identifying the stored document.
    pub key: &'static str,
    /// Human-readable name.
    pub label: &'static str,
    /// Editable fields.
    pub schema: &'static FieldSchema,
}

static ENTITIES: [&EntityDescriptor; 7] = [
    &SERVICES,
    &EVENTS,
    &EVENT_TYPES,
    &STORIES,
    &GALLERY,
    &GALLERY_CATEGORIES,
    &SERVICE_FILTERS,
];

static SETTINGS: [&SettingsDescriptor; 3] = [&HOMEPAGE, &SERVICES_PAGE, &EVENTS_PAGE];

/// Every content entity.
pub fn all() -> &'static [&'static EntityDescriptor] {
    &ENTITIES
}

/// Look up an entity by URL segment.
pub fn by_path(path: &str) -> Option<&'static EntityDescriptor> {
    ENTITIES.iter().copied().find(|d| d.path == path)
}

/// Every settings page.
pub fn settings() -> &'static [&'static SettingsDescriptor] {
    &SETTINGS
}

/// Look up a settings page by URL segment.
pub fn settings_by_path(path: &str) -> Option<&'static SettingsDescriptor> {
    SETTINGS.iter().copied().find(|d| d.path == path)
}
