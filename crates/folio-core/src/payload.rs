//! Raw payload handling
//!
//! A payload is an external, untrusted mapping of field name to value —
//! typically a JSON document from a remote catalog API. Its shape and
//! completeness are not guaranteed; the helpers here extract what a record
//! shape declares and leave everything else behind.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ItemError;

/// Mapping of field name to value, as received from an external system.
pub type Payload = serde_json::Map<String, Value>;

/// Render a scalar value as the string the record field stores.
///
/// Strings are taken verbatim; numbers and bools keep their literal JSON
/// rendition (no semantic interpretation). Null means absent. Arrays and
/// objects are not representable in a scalar field and yield `None`.
pub(crate) fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Extract a required identity field from a payload.
pub(crate) fn required_string(payload: &Payload, name: &'static str) -> Result<String, ItemError> {
    payload
        .get(name)
        .and_then(scalar_string)
        .ok_or(ItemError::MissingRequiredField(name))
}

/// Keep only the entries of the array at `name` that deserialize as `T`,
/// preserving payload order. Anything else — a missing key, a non-array
/// value, a malformed entry — is dropped under the same tolerance policy
/// that discards undeclared keys.
pub(crate) fn filtered_entries<T: DeserializeOwned>(payload: &Payload, name: &str) -> Vec<Value> {
    match payload.get(name) {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter(|entry| serde_json::from_value::<T>((*entry).clone()).is_ok())
            .cloned()
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::Creator;
    use serde_json::json;

    fn as_payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn scalars_keep_their_literal_rendition() {
        assert_eq!(scalar_string(&json!("On Growth")), Some("On Growth".to_string()));
        assert_eq!(scalar_string(&json!(7)), Some("7".to_string()));
        assert_eq!(scalar_string(&json!(true)), Some("true".to_string()));
        assert_eq!(scalar_string(&json!(null)), None);
        assert_eq!(scalar_string(&json!(["x"])), None);
        assert_eq!(scalar_string(&json!({"x": 1})), None);
    }

    #[test]
    fn required_string_names_the_missing_field() {
        let payload = as_payload(json!({ "version": "7" }));
        let err = required_string(&payload, "key").unwrap_err();
        match err {
            ItemError::MissingRequiredField(field) => assert_eq!(field, "key"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_entries_are_dropped_in_order() {
        let payload = as_payload(json!({
            "creators": [
                { "creator_type": "author", "last_name": "Thompson" },
                { "creator_type": "narrator", "last_name": "Nobody" },
                { "last_name": "Roleless" },
                { "creator_type": "editor", "name": "The Editors" }
            ]
        }));
        let kept = filtered_entries::<Creator>(&payload, "creators");
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0]["creator_type"], "author");
        assert_eq!(kept[1]["creator_type"], "editor");
    }

    #[test]
    fn non_array_substructures_are_dropped_wholesale() {
        let payload = as_payload(json!({ "creators": "garbage" }));
        assert!(filtered_entries::<Creator>(&payload, "creators").is_empty());
        assert!(filtered_entries::<Creator>(&payload, "absent").is_empty());
    }
}
