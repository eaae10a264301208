//! Concrete record shapes, one per item type
//!
//! Each shape pairs an item type discriminant with the scalar fields that
//! type accepts from a payload. The field enumerations are configuration
//! data mirroring the upstream catalog's schema; the mechanism consuming
//! them lives in `crate::item`.

pub mod communication;
pub mod legal;
pub mod media;
pub mod misc;
pub mod publishing;

pub use communication::*;
pub use legal::*;
pub use media::*;
pub use misc::*;
pub use publishing::*;

use crate::item_type::ItemType;

/// A concrete record shape: a fixed discriminant paired with an explicit
/// allow-list of the scalar fields the shape accepts, by wire name.
///
/// Identity fields (`key`, `version`) and the shared substructure
/// sequences (`creators`, `attachments`, `notes`, `seeAlso`) are common to
/// every shape and are not repeated in `FIELDS`.
pub trait ItemShape {
    /// The discriminant this shape is registered under.
    const ITEM_TYPE: ItemType;
    /// The type-specific scalar fields, by wire name.
    const FIELDS: &'static [&'static str];
}
