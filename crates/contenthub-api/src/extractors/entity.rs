//! Route-bound catalog descriptors.
//!
//! Every entity gets its own copy of the generic routes; the descriptor is
//! attached to those routes as a request extension.

use contenthub_entity::{EntityDescriptor, SettingsDescriptor};

/// The catalog entity served by the matched route.
#[derive(Debug, Clone, Copy)]
pub struct Entity(pub &'static EntityDescriptor);

/// The settings singleton served by the matched route.
#[derive(Debug, Clone, Copy)]
pub struct SettingsPage(pub &'static SettingsDescriptor);
