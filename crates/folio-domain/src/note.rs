//! Note representation

use serde::{Deserialize, Serialize};

/// A free-text annotation attached to a catalog record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Note {
    pub title: Option<String>,
    pub note: String,
}

impl Note {
    /// Create a note from its body text.
    pub fn new(note: impl Into<String>) -> Self {
        Self {
            title: None,
            note: note.into(),
        }
    }

    /// Builder method to set the note title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_body_is_required() {
        let note = Note::new("Compare with the 1917 edition").with_title("Reading note");
        assert_eq!(note.note, "Compare with the 1917 edition");
        assert_eq!(note.title.as_deref(), Some("Reading note"));

        let result = serde_json::from_str::<Note>(r#"{"title":"empty"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn untitled_note_round_trips() {
        let note = Note::new("Margin scribble");
        let json = serde_json::to_string(&note).unwrap();
        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(back, note);
    }
}
