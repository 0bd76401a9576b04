//! # contenthub-entity
//!
//! Declarative descriptions of ContentHub's content types.
//!
//! A [`schema::FieldSchema`] lists an entity's editable fields and drives
//! both the admin form model ([`schema::Draft`]) and server-side payload
//! preparation. The [`catalog`] binds each schema to a collection, its
//! filters, uniqueness rules and discriminator.

pub mod catalog;
pub mod schema;

pub use catalog::{
    Discriminator, DocumentKind, EntityDescriptor, FilterParam, SettingsDescriptor, UniqueKey,
    UniqueScope,
};
pub use schema::{
    Derivation, DeriveRule, Draft, FieldKind, FieldSchema, FieldSpec, Validator, WriteMode,
};
