// src/lib.rs

//! Stockroom: the core inventory contract shared by the HTTP server and the
//! client-side items store.
//!
//! The crate covers:
//!  - The [`Item`] entity and its closed [`Category`] set.
//!  - Validation and normalization of raw input records, with all field
//!    violations collected and reported together.
//!  - The [`ItemStore`] persistence operations (create, read, filtered
//!    list, partial update, delete) and the in-process [`MemoryStore`].
//!  - The fixed [`Envelope`] response wrapper every API outcome maps to.

pub mod envelope;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;

// --- Re-exports for the Public API ---

pub use crate::envelope::Envelope;
pub use crate::error::{StoreError, StoreResult};
pub use crate::model::{Category, Item, ItemDraft, ItemFilter, ItemInput, UnknownCategory};
pub use crate::store::{ItemStore, MemoryStore};
pub use crate::validate::{apply_patch, validate_create, ValidationErrors};
