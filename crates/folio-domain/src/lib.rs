//! Shared substructures for the folio item catalog
//!
//! This crate provides the record substructures every item type carries:
//! - Creator: a named contributor with a role from a closed vocabulary
//! - Attachment: a file or link associated with a record
//! - Note: a free-text annotation
//!
//! The item shapes themselves, the item-type registry, and tolerant record
//! construction live in `folio-core`.

pub mod attachment;
pub mod creator;
pub mod note;

pub use attachment::*;
pub use creator::*;
pub use note::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
