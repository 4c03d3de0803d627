//! Presence checks and decoding helpers for JSON request bodies.
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::{Map, Value};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("request body is empty")]
    EmptyBody,
    #[error("request body is not valid JSON")]
    Malformed(#[source] serde_json::Error),
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("invalid field: {0}")]
    InvalidField(#[source] serde_json::Error),
}

/// Parse a body that must hold a JSON object with at least one key.
///
/// A missing body, `null`, and `{}` all count as empty.
pub fn parse_object(body: &[u8]) -> Result<Map<String, Value>, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::EmptyBody);
    }

    match serde_json::from_slice::<Value>(body).map_err(ValidationError::Malformed)? {
        Value::Null => Err(ValidationError::EmptyBody),
        Value::Object(map) if map.is_empty() => Err(ValidationError::EmptyBody),
        Value::Object(map) => Ok(map),
        _ => Err(ValidationError::NotAnObject),
    }
}

/// Decode a typed payload out of a non-empty JSON object body.
pub fn parse_payload<T: DeserializeOwned>(body: &[u8]) -> Result<T, ValidationError> {
    decode_object(parse_object(body)?)
}

/// Decode typed fields out of an already-parsed object.
pub fn decode_object<T: DeserializeOwned>(map: Map<String, Value>) -> Result<T, ValidationError> {
    serde_json::from_value(Value::Object(map)).map_err(ValidationError::InvalidField)
}

/// A required text field: absent, `null`, and `""` are all missing.
pub fn required_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Path identifiers that are not integers never match a row.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Distinguish an explicit `null` (`Some(None)`) from an absent field (`None`).
///
/// Use together with `#[serde(default)]`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
