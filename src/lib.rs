//! Fallback-tolerant navigation of parsed JSON trees.
//!
//! Paths use a compact dot/bracket syntax such as
//! `staff.groups[0].team_leader.name`. A malformed path is reported as a
//! [`jsonpath::PathError`]; every data-shape problem (missing key, JSON null,
//! wrong kind, index out of range) yields the caller's fallback instead.
//!
//! ```
//! use jsonnav::{Document, Navigate};
//!
//! let doc = Document::parse(r#"{"staff": {"groups": [{"team_leader": {"name": "Ada"}}]}}"#).unwrap();
//! assert_eq!(doc.get_string("staff.groups[0].team_leader.name", "").unwrap(), "Ada");
//! assert_eq!(doc.get_string("staff.groups[5].team_leader.name", "n/a").unwrap(), "n/a");
//! assert!(doc.get_string("staff.groups[x]", "").is_err());
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod jsonpath;
pub mod query;

pub use document::{JsonNode, JsonValue, NodeKind, TreeNode};
pub use jsonpath::{JsonPath, PathCache, PathError};
pub use query::{Document, JsonQuery, Navigate};
