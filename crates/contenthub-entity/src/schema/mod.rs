//! Field schemas: declaration, payload preparation and the form model.

pub mod derive;
pub mod field;
pub mod form;

pub use derive::{Derivation, DeriveRule, slugify};
pub use field::{FieldKind, FieldSchema, FieldSpec, Initial, OptionSource};
pub use form::{Affordance, Draft, FormField};

use contenthub_core::result::AppResult;
use contenthub_core::types::Fields;
use contenthub_core::types::document::strip_reserved;

/// Whether a payload creates a document or patches an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Full document; missing fields receive their initial values.
    Create,
    /// Partial replace of the fields present.
    Update,
}

/// Entity-specific validation that replaces the schema's required-field
/// check and may rewrite the payload before it is persisted.
pub type Validator = fn(&FieldSchema, &mut Fields, WriteMode) -> AppResult<()>;

impl FieldSchema {
    /// Turn a client payload into the attribute map to persist.
    ///
    /// Steps: drop reserved keys, coerce to the schema, fill derived
    /// targets, (create only) fill initial values, validate with `validator`
    /// or else the required-field check, and finally sync legacy aliases.
    /// The result is written as a single patch.
    pub fn prepare(
        &self,
        mut raw: Fields,
        mode: WriteMode,
        validator: Option<Validator>,
    ) -> AppResult<Fields> {
        strip_reserved(&mut raw);
        let mut fields = self.coerce(&raw)?;
        self.derive_missing(&mut fields, mode);
        if mode == WriteMode::Create {
            self.fill_initial(&mut fields);
        }
        match validator {
            Some(validate) => validate(self, &mut fields, mode)?,
            None => self.check_required(&fields, mode)?,
        }
        self.sync_aliases(&mut fields);
        Ok(fields)
    }
}
