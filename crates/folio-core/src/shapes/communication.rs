//! Shapes for correspondence and web-native writing

use serde::{Deserialize, Serialize};

use crate::item::ItemCore;
use crate::item_type::ItemType;
use crate::shapes::ItemShape;

/// A post on a blog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPostItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub blog_title: Option<String>,
    pub website_type: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub language: Option<String>,
    pub short_title: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for BlogPostItem {
    const ITEM_TYPE: ItemType = ItemType::BlogPost;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "blog_title",
        "website_type",
        "date",
        "url",
        "access_date",
        "language",
        "short_title",
        "rights",
        "extra",
    ];
}

/// An email message. Uses `subject` in place of a plain title.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub subject: Option<String>,
    pub abstract_note: Option<String>,
    pub date: Option<String>,
    pub short_title: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub language: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for EmailItem {
    const ITEM_TYPE: ItemType = ItemType::Email;
    const FIELDS: &'static [&'static str] = &[
        "subject",
        "abstract_note",
        "date",
        "short_title",
        "url",
        "access_date",
        "language",
        "rights",
        "extra",
    ];
}

/// A post on a discussion forum.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForumPostItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub forum_title: Option<String>,
    pub post_type: Option<String>,
    pub date: Option<String>,
    pub language: Option<String>,
    pub short_title: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for ForumPostItem {
    const ITEM_TYPE: ItemType = ItemType::ForumPost;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "forum_title",
        "post_type",
        "date",
        "language",
        "short_title",
        "url",
        "access_date",
        "rights",
        "extra",
    ];
}

/// An instant message or chat transcript.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InstantMessageItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub date: Option<String>,
    pub language: Option<String>,
    pub short_title: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for InstantMessageItem {
    const ITEM_TYPE: ItemType = ItemType::InstantMessage;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "date",
        "language",
        "short_title",
        "url",
        "access_date",
        "rights",
        "extra",
    ];
}

/// A written letter.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LetterItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub letter_type: Option<String>,
    pub date: Option<String>,
    pub language: Option<String>,
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

impl ItemShape for LetterItem {
    const ITEM_TYPE: ItemType = ItemType::Letter;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "letter_type",
        "date",
        "language",
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

/// A page on the web.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WebpageItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub website_title: Option<String>,
    pub website_type: Option<String>,
    pub date: Option<String>,
    pub short_title: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub language: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for WebpageItem {
    const ITEM_TYPE: ItemType = ItemType::Webpage;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "website_title",
        "website_type",
        "date",
        "short_title",
        "url",
        "access_date",
        "language",
        "rights",
        "extra",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_declares_subject_not_title() {
        assert!(EmailItem::FIELDS.contains(&"subject"));
        assert!(!EmailItem::FIELDS.contains(&"title"));
    }
}
