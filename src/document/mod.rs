//! Parsed JSON trees.
//!
//! `node` holds the closed node representation, `access` the capability trait
//! the navigator is written against, and `parser` the conversion from
//! `serde_json` output into nodes.

pub mod access;
pub mod node;
pub mod parser;

pub use access::TreeNode;
pub use node::{JsonNode, JsonNumber, JsonValue, NodeKind};
pub use parser::{parse_json, parse_value};
