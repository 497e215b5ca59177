//! Read-only capabilities the navigator needs from a tree node.
//!
//! The navigator and the typed accessors are written against `TreeNode`
//! rather than a concrete JSON library. Two adapters ship with the crate:
//! the crate's own [`JsonNode`] and `serde_json::Value`.

use super::node::{JsonNode, JsonValue, NodeKind};
use serde_json::Value as SerdeValue;

/// A node of an immutable JSON-like tree.
pub trait TreeNode: Sized {
    /// Returns the kind tag of this node.
    fn kind(&self) -> NodeKind;

    /// Looks up a property on an object node. Non-objects yield `None`.
    fn property(&self, name: &str) -> Option<&Self>;

    /// Returns the children of an array node. Non-arrays yield `None`.
    fn elements(&self) -> Option<&[Self]>;

    /// Returns the element at `index` of an array node.
    fn element(&self, index: usize) -> Option<&Self> {
        self.elements()?.get(index)
    }

    fn as_str(&self) -> Option<&str>;

    fn as_bool(&self) -> Option<bool>;

    /// Returns the number as an `i64` if it is integral and in range.
    fn as_i64(&self) -> Option<i64>;

    fn as_f64(&self) -> Option<f64>;

    fn is_null(&self) -> bool {
        self.kind() == NodeKind::Null
    }
}

impl TreeNode for JsonNode {
    fn kind(&self) -> NodeKind {
        self.value.kind()
    }

    fn property(&self, name: &str) -> Option<&Self> {
        match &self.value {
            JsonValue::Object(props) => props.get(name),
            _ => None,
        }
    }

    fn elements(&self) -> Option<&[Self]> {
        match &self.value {
            JsonValue::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    fn as_str(&self) -> Option<&str> {
        match &self.value {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match self.value {
            JsonValue::Boolean(b) => Some(b),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match &self.value {
            JsonValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match &self.value {
            JsonValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }
}

impl TreeNode for SerdeValue {
    fn kind(&self) -> NodeKind {
        match self {
            SerdeValue::Object(_) => NodeKind::Object,
            SerdeValue::Array(_) => NodeKind::Array,
            SerdeValue::String(_) => NodeKind::String,
            SerdeValue::Number(_) => NodeKind::Number,
            SerdeValue::Bool(_) => NodeKind::Boolean,
            SerdeValue::Null => NodeKind::Null,
        }
    }

    fn property(&self, name: &str) -> Option<&Self> {
        self.as_object()?.get(name)
    }

    fn elements(&self) -> Option<&[Self]> {
        self.as_array().map(Vec::as_slice)
    }

    fn as_str(&self) -> Option<&str> {
        SerdeValue::as_str(self)
    }

    fn as_bool(&self) -> Option<bool> {
        SerdeValue::as_bool(self)
    }

    fn as_i64(&self) -> Option<i64> {
        let number = match self {
            SerdeValue::Number(n) => n,
            _ => return None,
        };
        if let Some(i) = number.as_i64() {
            return Some(i);
        }
        // u64 beyond i64::MAX has no i64 form; integral floats do.
        if number.is_u64() {
            return None;
        }
        let f = number.as_f64()?;
        if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
            Some(f as i64)
        } else {
            None
        }
    }

    fn as_f64(&self) -> Option<f64> {
        SerdeValue::as_f64(self)
    }
}
