//! Typed bibliographic records for the folio item catalog
//!
//! This crate provides the item-type side of the catalog model:
//! - ItemType: the closed vocabulary of record discriminants
//! - registry: tag-to-shape resolution over a table populated once
//! - shapes: one record shape per item type, each with an explicit
//!   allow-list of accepted scalar fields
//! - Item: the sum over all shapes, with tolerant construction from
//!   external payloads and payload re-extraction
//!
//! Everything here is a pure transformation over in-memory data; fetching
//! payloads and persisting records belong to collaborating crates.

pub mod error;
pub mod item;
pub mod item_type;
pub mod payload;
pub mod registry;
pub mod shapes;

pub use error::ItemError;
pub use item::{Item, ItemCore};
pub use item_type::ItemType;
pub use payload::Payload;
pub use shapes::*;
