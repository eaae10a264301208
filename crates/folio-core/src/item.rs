//! The catalog record type and tolerant construction
//!
//! A record is built once — either from explicit field values or by
//! tolerant conversion from an external payload — and treated as an
//! immutable value by this crate thereafter. The payload conversion keeps
//! exactly the keys a shape declares, drops everything else, and defaults
//! every declared-but-absent field, so upstream schema drift never breaks
//! construction.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use folio_domain::{Attachment, Creator, Note};

use crate::error::ItemError;
use crate::item_type::ItemType;
use crate::payload::{filtered_entries, required_string, scalar_string, Payload};
use crate::registry;
use crate::shapes::*;

/// Identity fields and shared substructures carried by every record shape.
///
/// `key` and `version` are opaque markers assigned by the external system:
/// the key is the record's stable identifier, the version is compared by
/// callers for optimistic concurrency and never interpreted here. The
/// sequence fields are ordered (creator order is citation order) and every
/// record owns fresh, independent sequences.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemCore {
    pub key: String,
    pub version: String,
    #[serde(default)]
    pub creators: Vec<Creator>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(rename = "seeAlso", default)]
    pub see_also: Vec<String>,
}

impl ItemCore {
    /// Create a core with the two identity fields and empty sequences.
    pub fn new(key: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            version: version.into(),
            ..Default::default()
        }
    }
}

/// A typed catalog record, discriminated by item type.
///
/// The discriminant and the concrete field set are a fixed pairing: a
/// record's runtime shape always matches its `item_type()`. Serialized
/// form is internally tagged by the `item_type` wire field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "item_type", rename_all = "snake_case")]
pub enum Item {
    Annotation(AnnotationItem),
    Artwork(ArtworkItem),
    Attachment(AttachmentItem),
    AudioRecording(AudioRecordingItem),
    Bill(BillItem),
    BlogPost(BlogPostItem),
    Book(BookItem),
    BookSection(BookSectionItem),
    Case(CaseItem),
    ComputerProgram(ComputerProgramItem),
    ConferencePaper(ConferencePaperItem),
    DictionaryEntry(DictionaryEntryItem),
    Document(DocumentItem),
    Email(EmailItem),
    EncyclopediaArticle(EncyclopediaArticleItem),
    Film(FilmItem),
    ForumPost(ForumPostItem),
    Hearing(HearingItem),
    InstantMessage(InstantMessageItem),
    Interview(InterviewItem),
    JournalArticle(JournalArticleItem),
    Letter(LetterItem),
    MagazineArticle(MagazineArticleItem),
    Manuscript(ManuscriptItem),
    Map(MapItem),
    NewspaperArticle(NewspaperArticleItem),
    Note(NoteItem),
    Patent(PatentItem),
    Podcast(PodcastItem),
    Presentation(PresentationItem),
    RadioBroadcast(RadioBroadcastItem),
    Report(ReportItem),
    Statute(StatuteItem),
    Thesis(ThesisItem),
    TvBroadcast(TvBroadcastItem),
    VideoRecording(VideoRecordingItem),
    Webpage(WebpageItem),
}

/// Build one shape from a payload, keeping only what the shape declares.
fn build<T>(payload: &Payload) -> Result<T, ItemError>
where
    T: ItemShape + DeserializeOwned,
{
    let mut clean = Payload::new();
    clean.insert(
        "key".to_string(),
        Value::String(required_string(payload, "key")?),
    );
    clean.insert(
        "version".to_string(),
        Value::String(required_string(payload, "version")?),
    );
    for &name in T::FIELDS {
        if let Some(value) = payload.get(name).and_then(scalar_string) {
            clean.insert(name.to_string(), Value::String(value));
        }
    }
    insert_entries::<Creator>(&mut clean, payload, "creators");
    insert_entries::<Attachment>(&mut clean, payload, "attachments");
    insert_entries::<Note>(&mut clean, payload, "notes");
    insert_entries::<String>(&mut clean, payload, "seeAlso");
    Ok(serde_json::from_value(Value::Object(clean))?)
}

fn insert_entries<T: DeserializeOwned>(clean: &mut Payload, payload: &Payload, name: &str) {
    let entries = filtered_entries::<T>(payload, name);
    if !entries.is_empty() {
        clean.insert(name.to_string(), Value::Array(entries));
    }
}

impl Item {
    /// Tolerantly construct a record of the given shape from a payload.
    ///
    /// Payload keys the shape declares are taken without semantic
    /// validation; undeclared keys are silently discarded; declared
    /// fields absent from the payload stay at their default. Missing
    /// `key` or `version` fails — construction is all-or-nothing.
    pub fn from_payload(item_type: ItemType, payload: &Payload) -> Result<Item, ItemError> {
        let item = match item_type {
            ItemType::Annotation => Item::Annotation(build(payload)?),
            ItemType::Artwork => Item::Artwork(build(payload)?),
            ItemType::Attachment => Item::Attachment(build(payload)?),
            ItemType::AudioRecording => Item::AudioRecording(build(payload)?),
            ItemType::Bill => Item::Bill(build(payload)?),
            ItemType::BlogPost => Item::BlogPost(build(payload)?),
            ItemType::Book => Item::Book(build(payload)?),
            ItemType::BookSection => Item::BookSection(build(payload)?),
            ItemType::Case => Item::Case(build(payload)?),
            ItemType::ComputerProgram => Item::ComputerProgram(build(payload)?),
            ItemType::ConferencePaper => Item::ConferencePaper(build(payload)?),
            ItemType::DictionaryEntry => Item::DictionaryEntry(build(payload)?),
            ItemType::Document => Item::Document(build(payload)?),
            ItemType::Email => Item::Email(build(payload)?),
            ItemType::EncyclopediaArticle => Item::EncyclopediaArticle(build(payload)?),
            ItemType::Film => Item::Film(build(payload)?),
            ItemType::ForumPost => Item::ForumPost(build(payload)?),
            ItemType::Hearing => Item::Hearing(build(payload)?),
            ItemType::InstantMessage => Item::InstantMessage(build(payload)?),
            ItemType::Interview => Item::Interview(build(payload)?),
            ItemType::JournalArticle => Item::JournalArticle(build(payload)?),
            ItemType::Letter => Item::Letter(build(payload)?),
            ItemType::MagazineArticle => Item::MagazineArticle(build(payload)?),
            ItemType::Manuscript => Item::Manuscript(build(payload)?),
            ItemType::Map => Item::Map(build(payload)?),
            ItemType::NewspaperArticle => Item::NewspaperArticle(build(payload)?),
            ItemType::Note => Item::Note(build(payload)?),
            ItemType::Patent => Item::Patent(build(payload)?),
            ItemType::Podcast => Item::Podcast(build(payload)?),
            ItemType::Presentation => Item::Presentation(build(payload)?),
            ItemType::RadioBroadcast => Item::RadioBroadcast(build(payload)?),
            ItemType::Report => Item::Report(build(payload)?),
            ItemType::Statute => Item::Statute(build(payload)?),
            ItemType::Thesis => Item::Thesis(build(payload)?),
            ItemType::TvBroadcast => Item::TvBroadcast(build(payload)?),
            ItemType::VideoRecording => Item::VideoRecording(build(payload)?),
            ItemType::Webpage => Item::Webpage(build(payload)?),
        };
        Ok(item)
    }

    /// Resolve a tag through the registry and construct from a payload.
    pub fn from_tagged_payload(tag: &str, payload: &Payload) -> Result<Item, ItemError> {
        let item_type = registry::resolve(tag)?;
        Item::from_payload(item_type, payload)
    }

    /// The discriminant this record was constructed as.
    pub fn item_type(&self) -> ItemType {
        match self {
            Item::Annotation(_) => AnnotationItem::ITEM_TYPE,
            Item::Artwork(_) => ArtworkItem::ITEM_TYPE,
            Item::Attachment(_) => AttachmentItem::ITEM_TYPE,
            Item::AudioRecording(_) => AudioRecordingItem::ITEM_TYPE,
            Item::Bill(_) => BillItem::ITEM_TYPE,
            Item::BlogPost(_) => BlogPostItem::ITEM_TYPE,
            Item::Book(_) => BookItem::ITEM_TYPE,
            Item::BookSection(_) => BookSectionItem::ITEM_TYPE,
            Item::Case(_) => CaseItem::ITEM_TYPE,
            Item::ComputerProgram(_) => ComputerProgramItem::ITEM_TYPE,
            Item::ConferencePaper(_) => ConferencePaperItem::ITEM_TYPE,
            Item::DictionaryEntry(_) => DictionaryEntryItem::ITEM_TYPE,
            Item::Document(_) => DocumentItem::ITEM_TYPE,
            Item::Email(_) => EmailItem::ITEM_TYPE,
            Item::EncyclopediaArticle(_) => EncyclopediaArticleItem::ITEM_TYPE,
            Item::Film(_) => FilmItem::ITEM_TYPE,
            Item::ForumPost(_) => ForumPostItem::ITEM_TYPE,
            Item::Hearing(_) => HearingItem::ITEM_TYPE,
            Item::InstantMessage(_) => InstantMessageItem::ITEM_TYPE,
            Item::Interview(_) => InterviewItem::ITEM_TYPE,
            Item::JournalArticle(_) => JournalArticleItem::ITEM_TYPE,
            Item::Letter(_) => LetterItem::ITEM_TYPE,
            Item::MagazineArticle(_) => MagazineArticleItem::ITEM_TYPE,
            Item::Manuscript(_) => ManuscriptItem::ITEM_TYPE,
            Item::Map(_) => MapItem::ITEM_TYPE,
            Item::NewspaperArticle(_) => NewspaperArticleItem::ITEM_TYPE,
            Item::Note(_) => NoteItem::ITEM_TYPE,
            Item::Patent(_) => PatentItem::ITEM_TYPE,
            Item::Podcast(_) => PodcastItem::ITEM_TYPE,
            Item::Presentation(_) => PresentationItem::ITEM_TYPE,
            Item::RadioBroadcast(_) => RadioBroadcastItem::ITEM_TYPE,
            Item::Report(_) => ReportItem::ITEM_TYPE,
            Item::Statute(_) => StatuteItem::ITEM_TYPE,
            Item::Thesis(_) => ThesisItem::ITEM_TYPE,
            Item::TvBroadcast(_) => TvBroadcastItem::ITEM_TYPE,
            Item::VideoRecording(_) => VideoRecordingItem::ITEM_TYPE,
            Item::Webpage(_) => WebpageItem::ITEM_TYPE,
        }
    }

    /// The identity fields and shared substructures.
    pub fn core(&self) -> &ItemCore {
        match self {
            Item::Annotation(item) => &item.core,
            Item::Artwork(item) => &item.core,
            Item::Attachment(item) => &item.core,
            Item::AudioRecording(item) => &item.core,
            Item::Bill(item) => &item.core,
            Item::BlogPost(item) => &item.core,
            Item::Book(item) => &item.core,
            Item::BookSection(item) => &item.core,
            Item::Case(item) => &item.core,
            Item::ComputerProgram(item) => &item.core,
            Item::ConferencePaper(item) => &item.core,
            Item::DictionaryEntry(item) => &item.core,
            Item::Document(item) => &item.core,
            Item::Email(item) => &item.core,
            Item::EncyclopediaArticle(item) => &item.core,
            Item::Film(item) => &item.core,
            Item::ForumPost(item) => &item.core,
            Item::Hearing(item) => &item.core,
            Item::InstantMessage(item) => &item.core,
            Item::Interview(item) => &item.core,
            Item::JournalArticle(item) => &item.core,
            Item::Letter(item) => &item.core,
            Item::MagazineArticle(item) => &item.core,
            Item::Manuscript(item) => &item.core,
            Item::Map(item) => &item.core,
            Item::NewspaperArticle(item) => &item.core,
            Item::Note(item) => &item.core,
            Item::Patent(item) => &item.core,
            Item::Podcast(item) => &item.core,
            Item::Presentation(item) => &item.core,
            Item::RadioBroadcast(item) => &item.core,
            Item::Report(item) => &item.core,
            Item::Statute(item) => &item.core,
            Item::Thesis(item) => &item.core,
            Item::TvBroadcast(item) => &item.core,
            Item::VideoRecording(item) => &item.core,
            Item::Webpage(item) => &item.core,
        }
    }

    /// Mutable access to the core, for collaborators that edit records.
    pub fn core_mut(&mut self) -> &mut ItemCore {
        match self {
            Item::Annotation(item) => &mut item.core,
            Item::Artwork(item) => &mut item.core,
            Item::Attachment(item) => &mut item.core,
            Item::AudioRecording(item) => &mut item.core,
            Item::Bill(item) => &mut item.core,
            Item::BlogPost(item) => &mut item.core,
            Item::Book(item) => &mut item.core,
            Item::BookSection(item) => &mut item.core,
            Item::Case(item) => &mut item.core,
            Item::ComputerProgram(item) => &mut item.core,
            Item::ConferencePaper(item) => &mut item.core,
            Item::DictionaryEntry(item) => &mut item.core,
            Item::Document(item) => &mut item.core,
            Item::Email(item) => &mut item.core,
            Item::EncyclopediaArticle(item) => &mut item.core,
            Item::Film(item) => &mut item.core,
            Item::ForumPost(item) => &mut item.core,
            Item::Hearing(item) => &mut item.core,
            Item::InstantMessage(item) => &mut item.core,
            Item::Interview(item) => &mut item.core,
            Item::JournalArticle(item) => &mut item.core,
            Item::Letter(item) => &mut item.core,
            Item::MagazineArticle(item) => &mut item.core,
            Item::Manuscript(item) => &mut item.core,
            Item::Map(item) => &mut item.core,
            Item::NewspaperArticle(item) => &mut item.core,
            Item::Note(item) => &mut item.core,
            Item::Patent(item) => &mut item.core,
            Item::Podcast(item) => &mut item.core,
            Item::Presentation(item) => &mut item.core,
            Item::RadioBroadcast(item) => &mut item.core,
            Item::Report(item) => &mut item.core,
            Item::Statute(item) => &mut item.core,
            Item::Thesis(item) => &mut item.core,
            Item::TvBroadcast(item) => &mut item.core,
            Item::VideoRecording(item) => &mut item.core,
            Item::Webpage(item) => &mut item.core,
        }
    }

    /// The scalar fields this record's shape declares, by wire name.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Item::Annotation(_) => AnnotationItem::FIELDS,
            Item::Artwork(_) => ArtworkItem::FIELDS,
            Item::Attachment(_) => AttachmentItem::FIELDS,
            Item::AudioRecording(_) => AudioRecordingItem::FIELDS,
            Item::Bill(_) => BillItem::FIELDS,
            Item::BlogPost(_) => BlogPostItem::FIELDS,
            Item::Book(_) => BookItem::FIELDS,
            Item::BookSection(_) => BookSectionItem::FIELDS,
            Item::Case(_) => CaseItem::FIELDS,
            Item::ComputerProgram(_) => ComputerProgramItem::FIELDS,
            Item::ConferencePaper(_) => ConferencePaperItem::FIELDS,
            Item::DictionaryEntry(_) => DictionaryEntryItem::FIELDS,
            Item::Document(_) => DocumentItem::FIELDS,
            Item::Email(_) => EmailItem::FIELDS,
            Item::EncyclopediaArticle(_) => EncyclopediaArticleItem::FIELDS,
            Item::Film(_) => FilmItem::FIELDS,
            Item::ForumPost(_) => ForumPostItem::FIELDS,
            Item::Hearing(_) => HearingItem::FIELDS,
            Item::InstantMessage(_) => InstantMessageItem::FIELDS,
            Item::Interview(_) => InterviewItem::FIELDS,
            Item::JournalArticle(_) => JournalArticleItem::FIELDS,
            Item::Letter(_) => LetterItem::FIELDS,
            Item::MagazineArticle(_) => MagazineArticleItem::FIELDS,
            Item::Manuscript(_) => ManuscriptItem::FIELDS,
            Item::Map(_) => MapItem::FIELDS,
            Item::NewspaperArticle(_) => NewspaperArticleItem::FIELDS,
            Item::Note(_) => NoteItem::FIELDS,
            Item::Patent(_) => PatentItem::FIELDS,
            Item::Podcast(_) => PodcastItem::FIELDS,
            Item::Presentation(_) => PresentationItem::FIELDS,
            Item::RadioBroadcast(_) => RadioBroadcastItem::FIELDS,
            Item::Report(_) => ReportItem::FIELDS,
            Item::Statute(_) => StatuteItem::FIELDS,
            Item::Thesis(_) => ThesisItem::FIELDS,
            Item::TvBroadcast(_) => TvBroadcastItem::FIELDS,
            Item::VideoRecording(_) => VideoRecordingItem::FIELDS,
            Item::Webpage(_) => WebpageItem::FIELDS,
        }
    }

    /// The record's stable identifier.
    pub fn key(&self) -> &str {
        &self.core().key
    }

    /// The record's opaque version marker.
    pub fn version(&self) -> &str {
        &self.core().version
    }

    pub fn creators(&self) -> &[Creator] {
        &self.core().creators
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.core().attachments
    }

    pub fn notes(&self) -> &[Note] {
        &self.core().notes
    }

    /// Keys of related records, in order.
    pub fn see_also(&self) -> &[String] {
        &self.core().see_also
    }

    /// Whether this record's shape declares `name` at all.
    pub fn declares(&self, name: &str) -> bool {
        matches!(
            name,
            "key" | "version" | "item_type" | "creators" | "attachments" | "notes" | "seeAlso"
        ) || self.fields().contains(&name)
    }

    /// Read any scalar field by wire name.
    ///
    /// Returns the value for a set field, and `None` both for a declared
    /// field that is unset and for a name this shape never declares —
    /// generic code can probe any record for any known field uniformly.
    pub fn field(&self, name: &str) -> Option<String> {
        match name {
            "key" => Some(self.core().key.clone()),
            "version" => Some(self.core().version.clone()),
            "item_type" => Some(self.item_type().tag().to_string()),
            _ => {
                if !self.fields().contains(&name) {
                    return None;
                }
                match self.to_payload().remove(name) {
                    Some(Value::String(value)) => Some(value),
                    _ => None,
                }
            }
        }
    }

    /// Re-extract the record's declared fields into a payload mapping.
    ///
    /// The mapping carries the `item_type` tag, the identity fields, every
    /// set scalar field by wire name, and the non-empty substructure
    /// sequences. Feeding it back through `from_payload` reconstructs a
    /// record equal to this one.
    pub fn to_payload(&self) -> Payload {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map
                .into_iter()
                .filter(|(_, value)| !value.is_null())
                .filter(|(_, value)| !matches!(value, Value::Array(entries) if entries.is_empty()))
                .collect(),
            // A record always serializes to an object.
            _ => Payload::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::CreatorRole;
    use proptest::prelude::*;
    use rstest::rstest;
    use serde_json::json;

    fn as_payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    fn book_payload() -> Payload {
        as_payload(json!({
            "key": "ABC123",
            "version": "7",
            "title": "On Growth",
            "creators": [
                { "creator_type": "author", "first_name": "D'Arcy", "last_name": "Thompson" }
            ]
        }))
    }

    #[test]
    fn book_scenario_from_the_remote_api() {
        let item = Item::from_tagged_payload("book", &book_payload()).unwrap();

        assert_eq!(item.item_type(), ItemType::Book);
        assert_eq!(item.key(), "ABC123");
        assert_eq!(item.version(), "7");
        assert_eq!(item.creators().len(), 1);
        assert_eq!(item.creators()[0].role, CreatorRole::Author);
        assert_eq!(item.creators()[0].first_name.as_deref(), Some("D'Arcy"));
        assert_eq!(item.creators()[0].last_name.as_deref(), Some("Thompson"));
        assert!(item.attachments().is_empty());
        assert!(item.notes().is_empty());
        assert!(item.see_also().is_empty());

        let book = match item {
            Item::Book(book) => book,
            other => panic!("wrong shape: {other:?}"),
        };
        assert_eq!(book.title.as_deref(), Some("On Growth"));
        assert!(book.abstract_note.is_none());
        assert!(book.publisher.is_none());
        assert!(book.isbn.is_none());
        assert!(book.date.is_none());
        assert!(book.extra.is_none());
    }

    #[test]
    fn undeclared_keys_are_discarded_silently() {
        let mut noisy = book_payload();
        noisy.insert("junk".to_string(), json!("x"));
        noisy.insert("citation_count".to_string(), json!(42));

        let plain = Item::from_payload(ItemType::Book, &book_payload()).unwrap();
        let from_noisy = Item::from_payload(ItemType::Book, &noisy).unwrap();
        assert_eq!(plain, from_noisy);

        assert_eq!(from_noisy.field("junk"), None);
        assert!(!from_noisy.declares("junk"));
    }

    #[rstest]
    #[case("key")]
    #[case("version")]
    fn missing_identity_field_is_rejected(#[case] field: &'static str) {
        let mut payload = book_payload();
        payload.remove(field);
        let err = Item::from_payload(ItemType::Book, &payload).unwrap_err();
        match err {
            ItemError::MissingRequiredField(name) => assert_eq!(name, field),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_tag_is_rejected_before_construction() {
        let err = Item::from_tagged_payload("not_a_real_type", &book_payload()).unwrap_err();
        match err {
            ItemError::UnknownItemType(tag) => assert_eq!(tag, "not_a_real_type"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn every_item_type_constructs_from_a_minimal_payload() {
        let minimal = as_payload(json!({ "key": "K1", "version": "V1" }));
        for item_type in ItemType::ALL {
            let item = Item::from_payload(item_type, &minimal).unwrap();
            assert_eq!(item.item_type(), item_type);
            assert_eq!(item.key(), "K1");
            assert_eq!(item.version(), "V1");
            assert!(item.creators().is_empty());
        }
    }

    #[test]
    fn records_own_independent_sequences() {
        let one_payload = as_payload(json!({ "key": "K1", "version": "1" }));
        let two_payload = as_payload(json!({ "key": "K2", "version": "1" }));
        let mut one = Item::from_payload(ItemType::Book, &one_payload).unwrap();
        let two = Item::from_payload(ItemType::Book, &two_payload).unwrap();

        one.core_mut()
            .creators
            .push(Creator::new(CreatorRole::Author).with_names("Thompson", "D'Arcy"));

        assert_eq!(one.creators().len(), 1);
        assert!(two.creators().is_empty());
    }

    #[test]
    fn payload_round_trip_reconstructs_an_equal_record() {
        let payload = as_payload(json!({
            "key": "ABC123",
            "version": "7",
            "title": "On Growth",
            "num_pages": "793",
            "creators": [
                { "creator_type": "author", "first_name": "D'Arcy", "last_name": "Thompson" },
                { "creator_type": "editor", "name": "John Tyler Bonner" }
            ],
            "attachments": [
                { "title": "Scanned copy", "mimeType": "application/pdf", "snapshot": true }
            ],
            "notes": [
                { "title": "Reading note", "note": "Compare chapter on magnitude" }
            ],
            "seeAlso": ["DEF456", "GHI789"],
            "junk": "dropped on the floor"
        }));
        let item = Item::from_payload(ItemType::Book, &payload).unwrap();

        let extracted = item.to_payload();
        assert_eq!(extracted["item_type"], "book");
        assert!(!extracted.contains_key("junk"));
        assert!(!extracted.contains_key("publisher"));

        let rebuilt = Item::from_payload(ItemType::Book, &extracted).unwrap();
        assert_eq!(rebuilt, item);
    }

    #[test]
    fn to_payload_of_a_minimal_record_has_only_identity_and_tag() {
        let minimal = as_payload(json!({ "key": "K1", "version": "V1" }));
        let item = Item::from_payload(ItemType::Webpage, &minimal).unwrap();
        let payload = item.to_payload();
        assert_eq!(payload.len(), 3);
        assert_eq!(payload["item_type"], "webpage");
        assert_eq!(payload["key"], "K1");
        assert_eq!(payload["version"], "V1");
    }

    #[test]
    fn number_scalars_keep_their_literal_rendition() {
        let payload = as_payload(json!({ "key": "K1", "version": 7, "num_pages": 793 }));
        let item = Item::from_payload(ItemType::Book, &payload).unwrap();
        assert_eq!(item.version(), "7");
        assert_eq!(item.field("num_pages").as_deref(), Some("793"));
    }

    #[test]
    fn null_and_structured_values_in_scalar_position_mean_absent() {
        let payload = as_payload(json!({
            "key": "K1",
            "version": "1",
            "title": null,
            "publisher": ["not", "a", "scalar"]
        }));
        let item = Item::from_payload(ItemType::Book, &payload).unwrap();
        assert_eq!(item.field("title"), None);
        assert_eq!(item.field("publisher"), None);
    }

    #[test]
    fn field_probe_is_uniform_across_set_unset_and_undeclared() {
        let item = Item::from_tagged_payload("book", &book_payload()).unwrap();

        assert_eq!(item.field("title").as_deref(), Some("On Growth"));
        assert_eq!(item.field("rights"), None); // declared, unset
        assert_eq!(item.field("DOI"), None); // never declared for books
        assert_eq!(item.field("key").as_deref(), Some("ABC123"));
        assert_eq!(item.field("item_type").as_deref(), Some("book"));

        assert!(item.declares("rights"));
        assert!(!item.declares("DOI"));
    }

    #[test]
    fn payload_item_type_key_cannot_override_the_shape() {
        let mut payload = book_payload();
        payload.insert("item_type".to_string(), json!("film"));
        let item = Item::from_payload(ItemType::Book, &payload).unwrap();
        assert_eq!(item.item_type(), ItemType::Book);
    }

    #[test]
    fn malformed_substructure_entries_are_dropped_not_fatal() {
        let payload = as_payload(json!({
            "key": "K1",
            "version": "1",
            "creators": [
                { "creator_type": "author", "last_name": "Thompson" },
                { "creator_type": "time_traveller", "last_name": "Nobody" },
                "not even an object"
            ],
            "attachments": "not a list"
        }));
        let item = Item::from_payload(ItemType::Book, &payload).unwrap();
        assert_eq!(item.creators().len(), 1);
        assert_eq!(item.creators()[0].last_name.as_deref(), Some("Thompson"));
        assert!(item.attachments().is_empty());
    }

    #[test]
    fn serde_form_is_internally_tagged() {
        let item = Item::from_tagged_payload("book", &book_payload()).unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["item_type"], "book");
        assert_eq!(value["key"], "ABC123");

        let back: Item = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn explicit_construction_with_struct_literals() {
        let item = Item::Book(BookItem {
            core: ItemCore::new("ABC123", "7"),
            title: Some("On Growth".to_string()),
            ..Default::default()
        });
        assert_eq!(item.key(), "ABC123");
        assert_eq!(item.field("title").as_deref(), Some("On Growth"));
    }

    fn is_declared_for_book(name: &str) -> bool {
        matches!(
            name,
            "key" | "version" | "item_type" | "creators" | "attachments" | "notes" | "seeAlso"
        ) || BookItem::FIELDS.contains(&name)
    }

    proptest! {
        #[test]
        fn undeclared_keys_never_change_the_record(
            junk in proptest::collection::hash_map("[a-z_]{1,12}", "[a-zA-Z0-9 ]{0,12}", 0..8)
        ) {
            let base = book_payload();
            let expected = Item::from_payload(ItemType::Book, &base).unwrap();

            let mut noisy = base.clone();
            for (name, value) in junk {
                if !is_declared_for_book(&name) {
                    noisy.insert(name, Value::String(value));
                }
            }
            let actual = Item::from_payload(ItemType::Book, &noisy).unwrap();
            prop_assert_eq!(expected, actual);
        }
    }
}
