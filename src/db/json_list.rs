//! Codec for list-valued columns stored as JSON text.
use serde_json::Value;

/// Parse a stored JSON array.
///
/// String entries are kept as-is and numeric entries are rendered as strings;
/// any other entry is skipped. NULL, empty text, and anything that is not a
/// JSON array decode to an empty list.
pub fn decode(raw: Option<&str>) -> Vec<String> {
    let Some(text) = raw.filter(|t| !t.is_empty()) else {
        return Vec::new();
    };

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Serialize a list for storage.
pub fn encode(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}
