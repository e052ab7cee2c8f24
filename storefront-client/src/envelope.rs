//! Response-envelope decoder.
//!
//! The backend wraps some responses under a `data` or `content` key and
//! returns others as bare objects. This module unwraps a body by a fixed
//! priority order and fails loudly on anything else, instead of guessing
//! at the first list-shaped value it can find.
use serde_json::Value;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EnvelopeError {
    #[error("unrecognized response shape, expected a JSON object: {0}")]
    UnrecognizedShape(String),
}

/// Unwraps a response body.
///
/// Priority order:
/// 1. an object with a `data` key yields that value,
/// 2. an object with a `content` key yields that value,
/// 3. any other object yields itself.
///
/// Anything that is not a JSON object is an [`EnvelopeError`].
pub fn unwrap(value: Value) -> Result<Value, EnvelopeError> {
    match value {
        Value::Object(mut object) => {
            if let Some(inner) = object.remove("data") {
                return Ok(inner);
            }
            if let Some(inner) = object.remove("content") {
                return Ok(inner);
            }
            Ok(Value::Object(object))
        }
        other => Err(EnvelopeError::UnrecognizedShape(shape_of(&other).to_string())),
    }
}

fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_key_wins_over_content() {
        let body = json!({"data": {"id": "1"}, "content": [{"id": "2"}]});
        assert_eq!(unwrap(body).unwrap(), json!({"id": "1"}));
    }

    #[test]
    fn content_key_unwraps_paginated_listings() {
        let body = json!({"content": [{"id": "2"}], "totalElements": 1});
        assert_eq!(unwrap(body).unwrap(), json!([{"id": "2"}]));
    }

    #[test]
    fn bare_object_passes_through() {
        let body = json!({"id": "3", "name": "Acme"});
        assert_eq!(unwrap(body.clone()).unwrap(), body);
    }

    #[test]
    fn non_object_shapes_fail_loudly() {
        assert_eq!(
            unwrap(json!([1, 2, 3])),
            Err(EnvelopeError::UnrecognizedShape("array".to_string()))
        );
        assert_eq!(
            unwrap(json!("ok")),
            Err(EnvelopeError::UnrecognizedShape("string".to_string()))
        );
        assert!(unwrap(Value::Null).is_err());
    }
}
