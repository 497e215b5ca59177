//! Typed accessors with fallback values.
//!
//! Every accessor parses the path first, then locates the node, then coerces
//! it. Only a malformed path produces an `Err`; a missing key, a null on the
//! way, a wrong node kind or an index out of range all yield the fallback (or
//! `None` for the raw `get_array` / `get_object` accessors).
//!
//! # Example
//!
//! ```
//! use jsonnav::query::{Document, Navigate};
//!
//! let doc = Document::parse(r#"{"items":[{"name":"A"},{"name":"B"}]}"#).unwrap();
//! let items = doc.get_array("items").unwrap().unwrap();
//! assert_eq!(items.len(), 2);
//! assert_eq!(doc.use_node(&items[1]).get_string("name", "").unwrap(), "B");
//! assert_eq!(doc.get_string("missing", "none").unwrap(), "none");
//! ```

use super::navigator::Navigator;
use crate::document::access::TreeNode;
use crate::document::node::{JsonNode, NodeKind};
use crate::jsonpath::{JsonPath, PathCache, PathError, Parser};
use std::sync::Arc;
use tracing::debug;

/// Anything that exposes a root node can be queried by path.
///
/// Implementors provide the root (or `None` for a neutral root, on which every
/// query falls back) and optionally a shared path cache.
pub trait Navigate {
    type Node: TreeNode;

    /// Returns the root node, or `None` for a neutral root.
    fn root(&self) -> Option<&Self::Node>;

    /// Returns the path cache used to parse paths, if any.
    fn path_cache(&self) -> Option<&PathCache> {
        None
    }

    /// Parses `path`, going through the path cache when one is attached.
    fn parse_path(&self, path: &str) -> Result<Arc<JsonPath>, PathError> {
        match self.path_cache() {
            Some(cache) => cache.get_or_parse(path),
            None => Parser::parse(path).map(Arc::new),
        }
    }

    /// Returns the node at `path` regardless of its kind.
    fn resolve(&self, path: &str) -> Result<Option<&Self::Node>, PathError> {
        // Parse before looking at the root so syntax errors surface even on a
        // neutral root.
        let parsed = self.parse_path(path)?;
        Ok(self
            .root()
            .and_then(|root| Navigator::new(root).locate(&parsed)))
    }

    /// Returns whether `path` resolves to any node, including a JSON null.
    fn contains(&self, path: &str) -> Result<bool, PathError> {
        Ok(self.resolve(path)?.is_some())
    }

    /// Returns the string at `path` without copying, or `fallback`.
    fn get_str<'s>(&'s self, path: &str, fallback: &'s str) -> Result<&'s str, PathError> {
        Ok(self
            .resolve(path)?
            .and_then(TreeNode::as_str)
            .unwrap_or(fallback))
    }

    /// Returns the string at `path`, or `fallback`.
    fn get_string(&self, path: &str, fallback: &str) -> Result<String, PathError> {
        self.get_str(path, fallback).map(str::to_string)
    }

    /// Returns the number at `path` as an `i32`, or `fallback`.
    ///
    /// Integral floats such as `3.0` qualify; fractional or out-of-range
    /// numbers do not.
    fn get_int(&self, path: &str, fallback: i32) -> Result<i32, PathError> {
        Ok(self
            .resolve(path)?
            .and_then(TreeNode::as_i64)
            .and_then(|i| i32::try_from(i).ok())
            .unwrap_or(fallback))
    }

    /// Returns the number at `path` as an `i64`, or `fallback`.
    fn get_i64(&self, path: &str, fallback: i64) -> Result<i64, PathError> {
        Ok(self
            .resolve(path)?
            .and_then(TreeNode::as_i64)
            .unwrap_or(fallback))
    }

    /// Returns the number at `path` as an `f64`, or `fallback`.
    fn get_f64(&self, path: &str, fallback: f64) -> Result<f64, PathError> {
        Ok(self
            .resolve(path)?
            .and_then(TreeNode::as_f64)
            .unwrap_or(fallback))
    }

    /// Returns the boolean at `path`, or `fallback`.
    fn get_bool(&self, path: &str, fallback: bool) -> Result<bool, PathError> {
        Ok(self
            .resolve(path)?
            .and_then(TreeNode::as_bool)
            .unwrap_or(fallback))
    }

    /// Returns the children of the array at `path`.
    ///
    /// `None` means "not an array here", which is distinct from `Some(&[])`.
    fn get_array(&self, path: &str) -> Result<Option<&[Self::Node]>, PathError> {
        Ok(self.resolve(path)?.and_then(TreeNode::elements))
    }

    /// Returns the children of the root itself when it is an array.
    fn root_array(&self) -> Option<&[Self::Node]> {
        self.root().and_then(TreeNode::elements)
    }

    /// Returns the object node at `path`.
    fn get_object(&self, path: &str) -> Result<Option<&Self::Node>, PathError> {
        Ok(self
            .resolve(path)?
            .filter(|node| node.kind() == NodeKind::Object))
    }

    /// Rewraps a located node as the root of a new query.
    ///
    /// Objects and arrays become the new root. Anything else (a scalar, a JSON
    /// null, or no node at all) gives a neutral root on which every query falls
    /// back, so this never fails.
    fn use_node<'s>(&'s self, node: impl Into<Option<&'s Self::Node>>) -> JsonQuery<'s, Self::Node>
    where
        Self::Node: 's,
    {
        JsonQuery::from_option(node.into()).with_cache(self.path_cache())
    }
}

/// A borrowed, queryable view over a node.
#[derive(Debug)]
pub struct JsonQuery<'a, N: TreeNode = JsonNode> {
    root: Option<&'a N>,
    cache: Option<&'a PathCache>,
}

impl<'a, N: TreeNode> JsonQuery<'a, N> {
    /// Creates a query over `node`.
    ///
    /// Only object and array nodes can act as a root; any other node gives a
    /// neutral root.
    pub fn over(node: &'a N) -> Self {
        Self::from_option(Some(node))
    }

    /// Like [`JsonQuery::over`], treating `None` as a neutral root.
    pub fn from_option(node: Option<&'a N>) -> Self {
        let root = match node {
            Some(node) if node.kind().is_container() => Some(node),
            Some(node) => {
                debug!(kind = %node.kind(), "node cannot act as a root; using a neutral root");
                None
            }
            None => None,
        };
        JsonQuery { root, cache: None }
    }

    /// A query on which every path falls back.
    pub fn neutral() -> Self {
        JsonQuery {
            root: None,
            cache: None,
        }
    }

    /// Attaches a path cache to this query.
    pub fn with_cache(mut self, cache: Option<&'a PathCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn is_neutral(&self) -> bool {
        self.root.is_none()
    }
}

impl<N: TreeNode> Clone for JsonQuery<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: TreeNode> Copy for JsonQuery<'_, N> {}

impl<N: TreeNode> Navigate for JsonQuery<'_, N> {
    type Node = N;

    fn root(&self) -> Option<&N> {
        self.root
    }

    fn path_cache(&self) -> Option<&PathCache> {
        self.cache
    }
}
