//! JSON text to `JsonNode` conversion.
//!
//! Parsing raw JSON syntax is delegated to `serde_json`. This module only
//! converts the resulting `serde_json::Value` into the crate's own closed node
//! representation.
//!
//! # Example
//!
//! ```
//! use jsonnav::document::parser::parse_json;
//!
//! let json = r#"{"name": "Alice", "age": 30}"#;
//! let root = parse_json(json).unwrap();
//! assert!(root.value().is_object());
//! ```

use super::node::{JsonNode, JsonNumber, JsonValue};
use anyhow::{Context, Result};
use serde_json::{Number, Value as SerdeValue};

/// Parses a JSON string into a `JsonNode` tree.
///
/// Integers that fit in `i64` are kept exact; every other number (including
/// `u64` values above `i64::MAX`) is stored as `f64`.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON.
///
/// ```
/// use jsonnav::document::parser::parse_json;
///
/// let invalid_json = r#"{"unclosed": "#;
/// assert!(parse_json(invalid_json).is_err());
/// ```
pub fn parse_json(json_str: &str) -> Result<JsonNode> {
    let serde_value: SerdeValue = serde_json::from_str(json_str).context("Failed to parse JSON")?;
    Ok(parse_value(&serde_value))
}

/// Converts a `serde_json::Value` into a `JsonNode`.
pub fn parse_value(value: &SerdeValue) -> JsonNode {
    let json_value = match value {
        SerdeValue::Object(map) => {
            let entries = map
                .iter()
                .map(|(k, v)| (k.clone(), parse_value(v)))
                .collect();
            JsonValue::Object(entries)
        }
        SerdeValue::Array(arr) => JsonValue::Array(arr.iter().map(parse_value).collect()),
        SerdeValue::String(s) => JsonValue::String(s.clone()),
        SerdeValue::Number(n) => JsonValue::Number(convert_number(n)),
        SerdeValue::Bool(b) => JsonValue::Boolean(*b),
        SerdeValue::Null => JsonValue::Null,
    };

    JsonNode::new(json_value)
}

fn convert_number(n: &Number) -> JsonNumber {
    match n.as_i64() {
        Some(i) => JsonNumber::Integer(i),
        None => JsonNumber::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}
