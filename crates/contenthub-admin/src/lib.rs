//! # contenthub-admin
//!
//! The admin side of ContentHub: a [`ContentClient`] abstraction over the
//! content API (with a reqwest-backed [`HttpContentClient`]) and the generic
//! [`CrudController`] that drives list, create, edit and delete for any
//! catalog entity.

pub mod client;
pub mod controller;

pub use client::{ContentClient, HttpContentClient, PendingImage};
pub use controller::{CrudController, ListState, ModalMode, ModalState};
