//! Item type vocabulary

use serde::{Deserialize, Serialize};

use crate::error::ItemError;
use crate::registry;

/// Discriminant tag selecting a record's field shape.
///
/// The vocabulary is closed: every variant has exactly one record shape,
/// fixed at compile time. The wire form is the snake_case tag
/// (e.g. `"journal_article"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Annotation,
    Artwork,
    Attachment,
    AudioRecording,
    Bill,
    BlogPost,
    Book,
    BookSection,
    Case,
    ComputerProgram,
    ConferencePaper,
    DictionaryEntry,
    Document,
    Email,
    EncyclopediaArticle,
    Film,
    ForumPost,
    Hearing,
    InstantMessage,
    Interview,
    JournalArticle,
    Letter,
    MagazineArticle,
    Manuscript,
    Map,
    NewspaperArticle,
    Note,
    Patent,
    Podcast,
    Presentation,
    RadioBroadcast,
    Report,
    Statute,
    Thesis,
    TvBroadcast,
    VideoRecording,
    Webpage,
}

impl ItemType {
    /// Every item type in the vocabulary, in tag order.
    pub const ALL: [ItemType; 37] = [
        ItemType::Annotation,
        ItemType::Artwork,
        ItemType::Attachment,
        ItemType::AudioRecording,
        ItemType::Bill,
        ItemType::BlogPost,
        ItemType::Book,
        ItemType::BookSection,
        ItemType::Case,
        ItemType::ComputerProgram,
        ItemType::ConferencePaper,
        ItemType::DictionaryEntry,
        ItemType::Document,
        ItemType::Email,
        ItemType::EncyclopediaArticle,
        ItemType::Film,
        ItemType::ForumPost,
        ItemType::Hearing,
        ItemType::InstantMessage,
        ItemType::Interview,
        ItemType::JournalArticle,
        ItemType::Letter,
        ItemType::MagazineArticle,
        ItemType::Manuscript,
        ItemType::Map,
        ItemType::NewspaperArticle,
        ItemType::Note,
        ItemType::Patent,
        ItemType::Podcast,
        ItemType::Presentation,
        ItemType::RadioBroadcast,
        ItemType::Report,
        ItemType::Statute,
        ItemType::Thesis,
        ItemType::TvBroadcast,
        ItemType::VideoRecording,
        ItemType::Webpage,
    ];

    /// The stable wire tag for this item type.
    pub fn tag(&self) -> &'static str {
        match self {
            ItemType::Annotation => "annotation",
            ItemType::Artwork => "artwork",
            ItemType::Attachment => "attachment",
            ItemType::AudioRecording => "audio_recording",
            ItemType::Bill => "bill",
            ItemType::BlogPost => "blog_post",
            ItemType::Book => "book",
            ItemType::BookSection => "book_section",
            ItemType::Case => "case",
            ItemType::ComputerProgram => "computer_program",
            ItemType::ConferencePaper => "conference_paper",
            ItemType::DictionaryEntry => "dictionary_entry",
            ItemType::Document => "document",
            ItemType::Email => "email",
            ItemType::EncyclopediaArticle => "encyclopedia_article",
            ItemType::Film => "film",
            ItemType::ForumPost => "forum_post",
            ItemType::Hearing => "hearing",
            ItemType::InstantMessage => "instant_message",
            ItemType::Interview => "interview",
            ItemType::JournalArticle => "journal_article",
            ItemType::Letter => "letter",
            ItemType::MagazineArticle => "magazine_article",
            ItemType::Manuscript => "manuscript",
            ItemType::Map => "map",
            ItemType::NewspaperArticle => "newspaper_article",
            ItemType::Note => "note",
            ItemType::Patent => "patent",
            ItemType::Podcast => "podcast",
            ItemType::Presentation => "presentation",
            ItemType::RadioBroadcast => "radio_broadcast",
            ItemType::Report => "report",
            ItemType::Statute => "statute",
            ItemType::Thesis => "thesis",
            ItemType::TvBroadcast => "tv_broadcast",
            ItemType::VideoRecording => "video_recording",
            ItemType::Webpage => "webpage",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for ItemType {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        registry::resolve(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_matches_serde_wire_form() {
        for item_type in ItemType::ALL {
            let json = serde_json::to_string(&item_type).unwrap();
            assert_eq!(json, format!("\"{}\"", item_type.tag()));
            let back: ItemType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, item_type);
        }
    }

    #[test]
    fn display_writes_the_tag() {
        assert_eq!(ItemType::JournalArticle.to_string(), "journal_article");
        assert_eq!(ItemType::TvBroadcast.to_string(), "tv_broadcast");
    }
}
