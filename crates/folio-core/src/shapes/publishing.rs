//! Shapes for print and scholarly publishing

use serde::{Deserialize, Serialize};

use crate::item::ItemCore;
use crate::item_type::ItemType;
use crate::shapes::ItemShape;

/// A published book.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub series: Option<String>,
    pub series_number: Option<String>,
    pub volume: Option<String>,
    pub number_of_volumes: Option<String>,
    pub edition: Option<String>,
    pub place: Option<String>,
    pub publisher: Option<String>,
    pub date: Option<String>,
    pub num_pages: Option<String>,
    pub language: Option<String>,
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

impl ItemShape for BookItem {
    const ITEM_TYPE: ItemType = ItemType::Book;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "series",
        "series_number",
        "volume",
        "number_of_volumes",
        "edition",
        "place",
        "publisher",
        "date",
        "num_pages",
        "language",
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

/// A chapter or other titled part of a book.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookSectionItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub book_title: Option<String>,
    pub series: Option<String>,
    pub series_number: Option<String>,
    pub volume: Option<String>,
    pub number_of_volumes: Option<String>,
    pub edition: Option<String>,
    pub place: Option<String>,
    pub publisher: Option<String>,
    pub date: Option<String>,
    pub pages: Option<String>,
    pub language: Option<String>,
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

impl ItemShape for BookSectionItem {
    const ITEM_TYPE: ItemType = ItemType::BookSection;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "book_title",
        "series",
        "series_number",
        "volume",
        "number_of_volumes",
        "edition",
        "place",
        "publisher",
        "date",
        "pages",
        "language",
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

/// An article in a peer-reviewed journal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalArticleItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub publication_title: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub pages: Option<String>,
    pub date: Option<String>,
    pub series: Option<String>,
    pub series_title: Option<String>,
    pub series_text: Option<String>,
    pub journal_abbreviation: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "DOI")]
    pub doi: Option<String>,
    #[serde(rename = "ISSN")]
    pub issn: Option<String>,
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

impl ItemShape for JournalArticleItem {
    const ITEM_TYPE: ItemType = ItemType::JournalArticle;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "publication_title",
        "volume",
        "issue",
        "pages",
        "date",
        "series",
        "series_title",
        "series_text",
        "journal_abbreviation",
        "language",
        "DOI",
        "ISSN",
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

/// An article in a popular magazine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MagazineArticleItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub publication_title: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub date: Option<String>,
    pub pages: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "ISSN")]
    pub issn: Option<String>,
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

impl ItemShape for MagazineArticleItem {
    const ITEM_TYPE: ItemType = ItemType::MagazineArticle;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "publication_title",
        "volume",
        "issue",
        "date",
        "pages",
        "language",
        "ISSN",
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

/// An article in a newspaper.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewspaperArticleItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub publication_title: Option<String>,
    pub place: Option<String>,
    pub edition: Option<String>,
    pub date: Option<String>,
    pub section: Option<String>,
    pub pages: Option<String>,
    pub language: Option<String>,
    pub short_title: Option<String>,
    #[serde(rename = "ISSN")]
    pub issn: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub archive: Option<String>,
    pub archive_location: Option<String>,
    pub library_catalog: Option<String>,
    pub call_number: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for NewspaperArticleItem {
    const ITEM_TYPE: ItemType = ItemType::NewspaperArticle;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "publication_title",
        "place",
        "edition",
        "date",
        "section",
        "pages",
        "language",
        "short_title",
        "ISSN",
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

/// An article in an encyclopedia.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EncyclopediaArticleItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub encyclopedia_title: Option<String>,
    pub series: Option<String>,
    pub series_number: Option<String>,
    pub volume: Option<String>,
    pub number_of_volumes: Option<String>,
    pub edition: Option<String>,
    pub place: Option<String>,
    pub publisher: Option<String>,
    pub date: Option<String>,
    pub pages: Option<String>,
    #[serde(rename = "ISBN")]
    pub isbn: Option<String>,
    pub short_title: Option<String>,
    pub url: Option<String>,
    pub access_date: Option<String>,
    pub language: Option<String>,
    pub archive: Option<String>,
    pub archive_location: Option<String>,
    pub library_catalog: Option<String>,
    pub call_number: Option<String>,
    pub rights: Option<String>,
    pub extra: Option<String>,
}

impl ItemShape for EncyclopediaArticleItem {
    const ITEM_TYPE: ItemType = ItemType::EncyclopediaArticle;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "encyclopedia_title",
        "series",
        "series_number",
        "volume",
        "number_of_volumes",
        "edition",
        "place",
        "publisher",
        "date",
        "pages",
        "ISBN",
        "short_title",
        "url",
        "access_date",
        "language",
        "archive",
        "archive_location",
        "library_catalog",
        "call_number",
        "rights",
        "extra",
    ];
}

/// An entry in a dictionary.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntryItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub dictionary_title: Option<String>,
    pub series: Option<String>,
    pub series_number: Option<String>,
    pub volume: Option<String>,
    pub number_of_volumes: Option<String>,
    pub edition: Option<String>,
    pub place: Option<String>,
    pub publisher: Option<String>,
    pub date: Option<String>,
    pub pages: Option<String>,
    pub language: Option<String>,
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

impl ItemShape for DictionaryEntryItem {
    const ITEM_TYPE: ItemType = ItemType::DictionaryEntry;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "dictionary_title",
        "series",
        "series_number",
        "volume",
        "number_of_volumes",
        "edition",
        "place",
        "publisher",
        "date",
        "pages",
        "language",
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

/// A paper in published conference proceedings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConferencePaperItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub date: Option<String>,
    pub proceedings_title: Option<String>,
    pub conference_name: Option<String>,
    pub place: Option<String>,
    pub publisher: Option<String>,
    pub volume: Option<String>,
    pub pages: Option<String>,
    pub series: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "DOI")]
    pub doi: Option<String>,
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

impl ItemShape for ConferencePaperItem {
    const ITEM_TYPE: ItemType = ItemType::ConferencePaper;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "date",
        "proceedings_title",
        "conference_name",
        "place",
        "publisher",
        "volume",
        "pages",
        "series",
        "language",
        "DOI",
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

/// A generic document that fits no more specific shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub publisher: Option<String>,
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

impl ItemShape for DocumentItem {
    const ITEM_TYPE: ItemType = ItemType::Document;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "publisher",
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

/// An unpublished manuscript.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ManuscriptItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub manuscript_type: Option<String>,
    pub place: Option<String>,
    pub date: Option<String>,
    pub num_pages: Option<String>,
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

impl ItemShape for ManuscriptItem {
    const ITEM_TYPE: ItemType = ItemType::Manuscript;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "manuscript_type",
        "place",
        "date",
        "num_pages",
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

/// A thesis or dissertation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThesisItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub thesis_type: Option<String>,
    pub university: Option<String>,
    pub place: Option<String>,
    pub date: Option<String>,
    pub num_pages: Option<String>,
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

impl ItemShape for ThesisItem {
    const ITEM_TYPE: ItemType = ItemType::Thesis;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "thesis_type",
        "university",
        "place",
        "date",
        "num_pages",
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

/// A technical report, working paper, or preprint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportItem {
    #[serde(flatten)]
    pub core: ItemCore,
    pub title: Option<String>,
    pub abstract_note: Option<String>,
    pub report_number: Option<String>,
    pub report_type: Option<String>,
    pub series_title: Option<String>,
    pub place: Option<String>,
    pub institution: Option<String>,
    pub date: Option<String>,
    pub pages: Option<String>,
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

impl ItemShape for ReportItem {
    const ITEM_TYPE: ItemType = ItemType::Report;
    const FIELDS: &'static [&'static str] = &[
        "title",
        "abstract_note",
        "report_number",
        "report_type",
        "series_title",
        "place",
        "institution",
        "date",
        "pages",
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_fields_keep_their_uppercase_wire_names() {
        assert!(BookItem::FIELDS.contains(&"ISBN"));
        assert!(JournalArticleItem::FIELDS.contains(&"DOI"));
        assert!(JournalArticleItem::FIELDS.contains(&"ISSN"));
        assert!(!JournalArticleItem::FIELDS.contains(&"doi"));
    }

    #[test]
    fn allow_lists_never_repeat_a_field() {
        let shapes: [&[&str]; 12] = [
            BookItem::FIELDS,
            BookSectionItem::FIELDS,
            JournalArticleItem::FIELDS,
            MagazineArticleItem::FIELDS,
            NewspaperArticleItem::FIELDS,
            EncyclopediaArticleItem::FIELDS,
            DictionaryEntryItem::FIELDS,
            ConferencePaperItem::FIELDS,
            DocumentItem::FIELDS,
            ManuscriptItem::FIELDS,
            ThesisItem::FIELDS,
            ReportItem::FIELDS,
        ];
        for fields in shapes {
            let unique: std::collections::HashSet<_> = fields.iter().collect();
            assert_eq!(unique.len(), fields.len());
        }
    }

    #[test]
    fn serialized_field_names_match_the_allow_list() {
        let item = JournalArticleItem {
            doi: Some("10.1234/example".to_string()),
            issn: Some("0028-0836".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["DOI"], "10.1234/example");
        assert_eq!(json["ISSN"], "0028-0836");
    }
}
