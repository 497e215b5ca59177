//! Owned documents.
//!
//! A `Document` owns a parsed `JsonNode` tree and implements [`Navigate`], so
//! every typed accessor is available directly on it.
//!
//! # Example
//!
//! ```
//! use jsonnav::query::{Document, Navigate};
//!
//! let (ok, doc) = Document::try_parse(r#"{"a": [[1,2],[3,4]]}"#);
//! assert!(ok);
//! assert_eq!(doc.get_int("a[1][0]", -1).unwrap(), 3);
//!
//! let (ok, broken) = Document::try_parse("{not json");
//! assert!(!ok);
//! assert_eq!(broken.get_int("a[1][0]", -1).unwrap(), -1);
//! ```

use super::accessors::{JsonQuery, Navigate};
use crate::document::node::JsonNode;
use crate::document::parser::{parse_json, parse_value};
use crate::jsonpath::PathCache;
use anyhow::Result;
use serde_json::Value as SerdeValue;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// A parsed JSON document ready for path queries.
#[derive(Debug, Clone, Default)]
pub struct Document {
    root: Option<JsonNode>,
    cache: Option<Arc<PathCache>>,
}

impl Document {
    /// Parses JSON text into a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON.
    pub fn parse(json: &str) -> Result<Self> {
        Ok(Self::from_node(parse_json(json)?))
    }

    /// Parses JSON text, reporting failure as `false` instead of an error.
    ///
    /// On failure the returned document has a neutral root, so every query on
    /// it yields its fallback.
    pub fn try_parse(json: &str) -> (bool, Self) {
        match Self::parse(json) {
            Ok(doc) => (true, doc),
            Err(err) => {
                debug!(error = %format!("{:#}", err), "document construction failed");
                (false, Self::empty())
            }
        }
    }

    /// Wraps an existing node tree.
    pub fn from_node(root: JsonNode) -> Self {
        Self {
            root: Some(root),
            cache: None,
        }
    }

    /// Converts an already-parsed `serde_json::Value`.
    pub fn from_value(value: &SerdeValue) -> Self {
        Self::from_node(parse_value(value))
    }

    /// A document with a neutral root.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shares `cache` for parsing the paths queried on this document and on
    /// any query derived from it with `use_node`.
    pub fn with_path_cache(mut self, cache: Arc<PathCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Returns a borrowed query over the whole document.
    pub fn query(&self) -> JsonQuery<'_> {
        JsonQuery::from_option(self.root.as_ref()).with_cache(self.cache.as_deref())
    }

    pub fn into_root(self) -> Option<JsonNode> {
        self.root
    }
}

impl Navigate for Document {
    type Node = JsonNode;

    fn root(&self) -> Option<&JsonNode> {
        self.root.as_ref()
    }

    fn path_cache(&self) -> Option<&PathCache> {
        self.cache.as_deref()
    }
}

impl FromStr for Document {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<JsonNode> for Document {
    fn from(root: JsonNode) -> Self {
        Self::from_node(root)
    }
}
