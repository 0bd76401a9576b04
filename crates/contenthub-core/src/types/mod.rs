//! Core type definitions used across the ContentHub workspace.

pub mod document;
pub mod locale;
pub mod pagination;
pub mod query;
pub mod sorting;

pub use document::{Document, Fields, NewDocument};
pub use locale::{Locale, LocalizedText, resolve};
pub use pagination::{PageRequest, Pagination};
pub use query::{DocumentQuery, Predicate, normalize_search};
pub use sorting::{SortDirection, SortField};
