//! Shapes for catalog-internal record kinds
//!
//! Annotations, standalone attachments, and standalone notes are item
//! types of their own in the upstream catalog, alongside software.

use serde::{Deserialize, Serialize};

use crate::item::ItemCore;
use crate::item_type::ItemType;
use crate::shapes::ItemShape;

/// An annotation anchored inside another record's document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub annotation_type: Option<String>,
    pub annotation_text: Option<String>,
    pub annotation_comment: Option<String>,
    pub annotation_color: Option<String>,
    pub annotation_page_label: Option<String>,
    pub annotation_sort_index: Option<String>,
    pub annotation_position: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for AnnotationItem {
    const ITEM_TYPE: ItemType = ItemType::Annotation;
    const FIELDS: &'static [&'static str] = &[
        "annotation_type",
        "annotation_text",
        "annotation_comment",
        "annotation_color",
        "annotation_page_label",
        "annotation_sort_index",
        "annotation_position",
        "extra",
    ];
}

/// A standalone attachment record (as opposed to the `Attachment`
/// substructure carried by other records).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachmentItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub link_mode: Option<String>,
    pub content_type: Option<String>,
    pub charset: Option<String>,
    pub filename: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for AttachmentItem {
    const ITEM_TYPE: ItemType = ItemType::Attachment;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "link_mode",
        "content_type",
        "charset",
        "filename",
        "url",
        "access_date",
        "extra",
    ];
}

/// A standalone note record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub note: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for NoteItem {
    const ITEM_TYPE: ItemType = ItemType::Note;
    const FIELDS: &'static [&'static str] = &["note", "extra"];
}

/// A piece of software.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputerProgramItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub series_title: Option<String>,
    pub version_number: Option<String>,
    pub date: Option<String>,
    pub system: Option<String>,
    pub place: Option<String>,
    pub company: Option<String>,
    pub programming_language: Option<String>,
    #[serde(rename = "ISBN")]
    pub isbn: Option<String>,
    pub short_title: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub archive: Option<String>,
    pub archive_location: Option<String>,
    pub library_catalog: Option<String>,
    pub call_number: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for ComputerProgramItem {
    const ITEM_TYPE: ItemType = ItemType::ComputerProgram;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "series_title",
        "version_number",
        "date",
        "system",
        "place",
        "company",
        "programming_language",
        "ISBN",
        "short_title",
        "url",
        "access_date",
        "archive",
        "archive_location",
        "library_catalog",
        "call_number",
        "rights",
        "extra",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_shape_is_minimal() {
        assert_eq!(NoteItem::FIELDS, &["note", "extra"]);
    }
}
