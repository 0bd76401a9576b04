//! States of the generic CRUD screen.

use contenthub_core::types::Document;
use contenthub_entity::Draft;

/// The item list.
#[derive(Debug, Clone)]
pub enum ListState {
    /// Showing the last fetched items.
    Idle(Vec<Document>),
    /// A fetch is in flight.
    Loading,
}

impl ListState {
    /// Items currently shown; empty while loading.
    pub fn items(&self) -> &[Document] {
        match self {
            Self::Idle(items) => items,
            Self::Loading => &[],
        }
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// What the open form will do on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    /// Insert a new document.
    Create,
    /// Patch the document with this id.
    Edit(String),
}

/// The create/edit form.
#[derive(Debug, Clone)]
pub enum ModalState {
    /// No form shown.
    Closed,
    /// Form shown and editable. `error` holds the last failed submission.
    Open {
        /// Create or edit.
        mode: ModalMode,
        /// Values being edited.
        draft: Draft,
        /// Message of the last failed submission.
        error: Option<String>,
    },
    /// Pending uploads and the write are in flight.
    Submitting {
        /// Create or edit.
        mode: ModalMode,
        /// Values being submitted.
        draft: Draft,
    },
}

impl ModalState {
    /// The draft of an open or submitting form.
    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Self::Open { draft, .. } | Self::Submitting { draft, .. } => Some(draft),
            Self::Closed => None,
        }
    }

    /// The error shown in an open form.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Open { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Whether the form is shown.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}
