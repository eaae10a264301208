//! Error types for tag resolution and record construction

use thiserror::Error;

/// Error from resolving an item type tag or constructing a record.
///
/// All variants are deterministic functions of the input; nothing is
/// retried internally and no partial record is ever returned.
#[derive(Debug, Error)]
pub enum ItemError {
    /// The tag is not present in the item type registry. The payload is
    /// unprocessable until the caller consults an updated vocabulary.
    #[error("unknown item type: '{0}'")]
    UnknownItemType(String),

    /// An identity field was absent from the payload. Indicates a
    /// malformed or truncated upstream payload.
    #[error("missing required field: '{0}'")]
    MissingRequiredField(&'static str),

    /// A cleaned payload failed strict deserialization into its shape.
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_name_the_offending_input() {
        let err = ItemError::UnknownItemType("not_a_real_type".to_string());
        assert_eq!(err.to_string(), "unknown item type: 'not_a_real_type'");

        let err = ItemError::MissingRequiredField("key");
        assert_eq!(err.to_string(), "missing required field: 'key'");
    }
}
