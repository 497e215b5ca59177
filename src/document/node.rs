//! JSON node representation used by the navigator.
//!
//! This module provides the closed tagged union that every parsed document is
//! converted into. Nodes are immutable once built: the navigator only ever
//! borrows them, so a single tree can be queried from many threads at once.
//!
//! # Example
//!
//! ```
//! use jsonnav::document::node::{JsonNode, JsonValue, JsonNumber};
//! use indexmap::IndexMap;
//!
//! let mut map = IndexMap::new();
//! map.insert("name".to_string(), JsonNode::new(JsonValue::String("jsonnav".to_string())));
//! map.insert("version".to_string(), JsonNode::new(JsonValue::Number(JsonNumber::Integer(1))));
//! let object = JsonNode::new(JsonValue::Object(map));
//!
//! assert!(object.value().is_object());
//! ```

use indexmap::IndexMap;
use std::fmt;

/// Represents JSON numbers (integer or float)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonNumber {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonNumber::Integer(i) => write!(f, "{}", i),
            JsonNumber::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl JsonNumber {
    pub fn as_f64(&self) -> f64 {
        match self {
            JsonNumber::Integer(i) => *i as f64,
            JsonNumber::Float(f) => *f,
        }
    }

    /// Returns the number as an `i64` when it holds an integral value.
    ///
    /// Floats qualify only when they have no fractional part and fit in `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonNumber::Integer(i) => Some(*i),
            JsonNumber::Float(f) => {
                // 2^63 is exactly representable, so the upper bound is exclusive.
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }
}

/// The kind of a node, independent of the concrete tree representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl NodeKind {
    /// Returns true for kinds that can serve as the root of a query.
    pub fn is_container(&self) -> bool {
        matches!(self, NodeKind::Object | NodeKind::Array)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Object => "object",
            NodeKind::Array => "array",
            NodeKind::String => "string",
            NodeKind::Number => "number",
            NodeKind::Boolean => "boolean",
            NodeKind::Null => "null",
        };
        f.write_str(name)
    }
}

/// A JSON value.
///
/// Objects and arrays contain `JsonNode` instances. Key order is preserved
/// for display, but lookups never depend on it.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// A JSON object containing key-value pairs
    Object(IndexMap<String, JsonNode>),
    /// A JSON array containing ordered values
    Array(Vec<JsonNode>),
    String(String),
    Number(JsonNumber),
    Boolean(bool),
    Null,
}

impl JsonValue {
    /// Returns true if this value is an object.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonnav::document::node::{JsonValue, JsonNumber};
    /// use indexmap::IndexMap;
    ///
    /// let obj = JsonValue::Object(IndexMap::new());
    /// assert!(obj.is_object());
    ///
    /// let num = JsonValue::Number(JsonNumber::Integer(42));
    /// assert!(!num.is_object());
    /// ```
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// Returns true if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns the kind tag of this value.
    pub fn kind(&self) -> NodeKind {
        match self {
            JsonValue::Object(_) => NodeKind::Object,
            JsonValue::Array(_) => NodeKind::Array,
            JsonValue::String(_) => NodeKind::String,
            JsonValue::Number(_) => NodeKind::Number,
            JsonValue::Boolean(_) => NodeKind::Boolean,
            JsonValue::Null => NodeKind::Null,
        }
    }
}

/// A single node in a parsed JSON tree.
///
/// `JsonNode` wraps a `JsonValue`. It is the unit the navigator walks and the
/// unit handed back by raw accessors such as `get_array` and `get_object`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonNode {
    pub(crate) value: JsonValue,
}

impl JsonNode {
    /// Creates a new `JsonNode` with the given value.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonnav::document::node::{JsonNode, JsonValue};
    ///
    /// let node = JsonNode::new(JsonValue::Boolean(true));
    /// assert!(matches!(node.value(), JsonValue::Boolean(true)));
    /// ```
    pub fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// Returns an immutable reference to the node's value.
    pub fn value(&self) -> &JsonValue {
        &self.value
    }

    /// Consumes the node and returns its value.
    pub fn into_value(self) -> JsonValue {
        self.value
    }
}

impl From<JsonValue> for JsonNode {
    fn from(value: JsonValue) -> Self {
        JsonNode::new(value)
    }
}
