//! Attachment representation

use serde::{Deserialize, Serialize};

/// A file or link associated with a catalog record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Attachment {
    pub title: String,
    pub snapshot: Option<bool>,
    #[serde(rename = "mimeType")]
    pub mime_type: Option<String>,
    pub url: Option<String>,
    pub proxy: Option<bool>,
}

impl Attachment {
    /// Create an attachment with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snapshot: None,
            mime_type: None,
            url: None,
            proxy: None,
        }
    }

    /// Builder method to set the source URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Builder method to set the MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Builder method to mark the attachment as a local snapshot.
    pub fn as_snapshot(mut self) -> Self {
        self.snapshot = Some(true);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_builders() {
        let attachment = Attachment::new("Full Text PDF")
            .with_url("https://example.org/paper.pdf")
            .with_mime_type("application/pdf")
            .as_snapshot();
        assert_eq!(attachment.title, "Full Text PDF");
        assert_eq!(attachment.snapshot, Some(true));
        assert_eq!(attachment.mime_type.as_deref(), Some("application/pdf"));
        assert!(attachment.proxy.is_none());
    }

    #[test]
    fn mime_type_uses_camel_case_wire_name() {
        let attachment = Attachment::new("Snapshot").with_mime_type("text/html");
        let json = serde_json::to_value(&attachment).unwrap();
        assert_eq!(json["mimeType"], "text/html");

        let back: Attachment = serde_json::from_value(json).unwrap();
        assert_eq!(back, attachment);
    }

    #[test]
    fn attachment_without_title_fails_to_deserialize() {
        let result = serde_json::from_str::<Attachment>(r#"{"url":"https://example.org"}"#);
        assert!(result.is_err());
    }
}
