//! Creator representation and the creator-role vocabulary

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a known creator role.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown creator role: '{0}'")]
pub struct UnknownCreatorRole(pub String);

/// Role a creator plays on a work, drawn from a closed vocabulary.
///
/// The wire form is the snake_case tag (e.g. `"series_editor"`), matching
/// the field names used by the catalog's remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum CreatorRole {
    Artist,
    Contributor,
    Performer,
    Composer,
    WordsBy,
    Sponsor,
    Cosponsor,
    Author,
    Commenter,
    Editor,
    Translator,
    SeriesEditor,
    BookAuthor,
    Counsel,
    Programmer,
    ReviewedAuthor,
    Recipient,
    Director,
    Scriptwriter,
    Producer,
    Interviewee,
    Interviewer,
    Cartographer,
    Inventor,
    AttorneyAgent,
    Podcaster,
    Guest,
    Presenter,
    CastMember,
}

impl CreatorRole {
    /// Every role in the vocabulary, in declaration order.
    pub const ALL: [CreatorRole; 29] = [
        CreatorRole::Artist,
        CreatorRole::Contributor,
        CreatorRole::Performer,
        CreatorRole::Composer,
        CreatorRole::WordsBy,
        CreatorRole::Sponsor,
        CreatorRole::Cosponsor,
        CreatorRole::Author,
        CreatorRole::Commenter,
        CreatorRole::Editor,
        CreatorRole::Translator,
        CreatorRole::SeriesEditor,
        CreatorRole::BookAuthor,
        CreatorRole::Counsel,
        CreatorRole::Programmer,
        CreatorRole::ReviewedAuthor,
        CreatorRole::Recipient,
        CreatorRole::Director,
        CreatorRole::Scriptwriter,
        CreatorRole::Producer,
        CreatorRole::Interviewee,
        CreatorRole::Interviewer,
        CreatorRole::Cartographer,
        CreatorRole::Inventor,
        CreatorRole::AttorneyAgent,
        CreatorRole::Podcaster,
        CreatorRole::Guest,
        CreatorRole::Presenter,
        CreatorRole::CastMember,
    ];

    /// The stable wire tag for this role.
    pub fn tag(&self) -> &'static str {
        match self {
            CreatorRole::Artist => "artist",
            CreatorRole::Contributor => "contributor",
            CreatorRole::Performer => "performer",
            CreatorRole::Composer => "composer",
            CreatorRole::WordsBy => "words_by",
            CreatorRole::Sponsor => "sponsor",
            CreatorRole::Cosponsor => "cosponsor",
            CreatorRole::Author => "author",
            CreatorRole::Commenter => "commenter",
            CreatorRole::Editor => "editor",
            CreatorRole::Translator => "translator",
            CreatorRole::SeriesEditor => "series_editor",
            CreatorRole::BookAuthor => "book_author",
            CreatorRole::Counsel => "counsel",
            CreatorRole::Programmer => "programmer",
            CreatorRole::ReviewedAuthor => "reviewed_author",
            CreatorRole::Recipient => "recipient",
            CreatorRole::Director => "director",
            CreatorRole::Scriptwriter => "scriptwriter",
            CreatorRole::Producer => "producer",
            CreatorRole::Interviewee => "interviewee",
            CreatorRole::Interviewer => "interviewer",
            CreatorRole::Cartographer => "cartographer",
            CreatorRole::Inventor => "inventor",
            CreatorRole::AttorneyAgent => "attorney_agent",
            CreatorRole::Podcaster => "podcaster",
            CreatorRole::Guest => "guest",
            CreatorRole::Presenter => "presenter",
            CreatorRole::CastMember => "cast_member",
        }
    }

    /// Look up a role by its wire tag.
    pub fn from_tag(tag: &str) -> Option<CreatorRole> {
        CreatorRole::ALL.iter().copied().find(|role| role.tag() == tag)
    }
}

impl std::fmt::Display for CreatorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for CreatorRole {
    type Err = UnknownCreatorRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CreatorRole::from_tag(s).ok_or_else(|| UnknownCreatorRole(s.to_string()))
    }
}

/// A named contributor to a work.
///
/// Either the two-field form (`last_name` + `first_name`) or the single
/// `name` form is populated; `field_mode` records which mode the upstream
/// system used. Exclusivity is a caller contract, not enforced here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Creator {
    #[serde(rename = "creator_type")]
    pub role: CreatorRole,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub field_mode: Option<String>,
    pub name: Option<String>,
}

impl Creator {
    /// Create a creator with just a role.
    pub fn new(role: CreatorRole) -> Self {
        Self {
            role,
            last_name: None,
            first_name: None,
            field_mode: None,
            name: None,
        }
    }

    /// Builder method to set the two-field name form.
    pub fn with_names(mut self, last: impl Into<String>, first: impl Into<String>) -> Self {
        self.last_name = Some(last.into());
        self.first_name = Some(first.into());
        self
    }

    /// Builder method to set the single display-name form.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder method to set the naming-mode flag.
    pub fn with_field_mode(mut self, mode: impl Into<String>) -> Self {
        self.field_mode = Some(mode.into());
        self
    }

    /// Format as "First Last" (or the single name) for display.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (None, Some(last)) => last.clone(),
            (Some(first), None) => first.clone(),
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn every_role_tag_round_trips() {
        for role in CreatorRole::ALL {
            assert_eq!(CreatorRole::from_tag(role.tag()), Some(role));
        }
    }

    #[test]
    fn role_tags_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for role in CreatorRole::ALL {
            assert!(seen.insert(role.tag()), "duplicate tag: {}", role.tag());
        }
    }

    #[rstest]
    #[case(CreatorRole::WordsBy, "words_by")]
    #[case(CreatorRole::SeriesEditor, "series_editor")]
    #[case(CreatorRole::AttorneyAgent, "attorney_agent")]
    #[case(CreatorRole::CastMember, "cast_member")]
    fn multi_word_roles_use_snake_case(#[case] role: CreatorRole, #[case] tag: &str) {
        assert_eq!(role.tag(), tag);
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, format!("\"{}\"", tag));
    }

    #[test]
    fn unknown_role_is_an_error() {
        let err = "narrator".parse::<CreatorRole>().unwrap_err();
        assert_eq!(err, UnknownCreatorRole("narrator".to_string()));
    }

    #[test]
    fn creator_deserializes_from_wire_form() {
        let creator: Creator = serde_json::from_str(
            r#"{"creator_type":"author","first_name":"D'Arcy","last_name":"Thompson"}"#,
        )
        .unwrap();
        assert_eq!(creator.role, CreatorRole::Author);
        assert_eq!(creator.first_name.as_deref(), Some("D'Arcy"));
        assert_eq!(creator.last_name.as_deref(), Some("Thompson"));
        assert!(creator.name.is_none());
        assert!(creator.field_mode.is_none());
    }

    #[test]
    fn creator_without_role_fails_to_deserialize() {
        let result = serde_json::from_str::<Creator>(r#"{"last_name":"Thompson"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn display_name_prefers_single_name_form() {
        let two_field = Creator::new(CreatorRole::Author).with_names("Thompson", "D'Arcy");
        assert_eq!(two_field.display_name(), "D'Arcy Thompson");

        let single = Creator::new(CreatorRole::Performer).with_name("The Kronos Quartet");
        assert_eq!(single.display_name(), "The Kronos Quartet");
    }
}
