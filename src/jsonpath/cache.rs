//! Bounded cache of parsed paths.
//!
//! Parsing is cheap, but callers that issue the same literal paths in a hot
//! loop can share a `PathCache` between documents. The cache is guarded by a
//! mutex so one instance can be shared across threads.

use super::ast::JsonPath;
use super::error::PathError;
use super::parser::Parser;
use indexmap::IndexMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Thread-safe cache mapping path strings to parsed paths.
///
/// Only successful parses are stored. When full, the oldest entry is evicted.
#[derive(Debug)]
pub struct PathCache {
    capacity: usize,
    entries: Mutex<IndexMap<String, Arc<JsonPath>>>,
}

impl PathCache {
    /// Creates a cache holding at most `capacity` paths. Zero disables storage.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(IndexMap::new()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Returns the parsed form of `path`, parsing and storing it on a miss.
    ///
    /// # Errors
    ///
    /// Returns the parser's error for malformed paths; these are never cached.
    pub fn get_or_parse(&self, path: &str) -> Result<Arc<JsonPath>, PathError> {
        if let Some(parsed) = self.lock().get(path) {
            return Ok(Arc::clone(parsed));
        }

        // Parse outside the lock; a concurrent miss on the same path just
        // stores an equal value twice.
        let parsed = Arc::new(Parser::parse(path)?);
        if self.capacity == 0 {
            return Ok(parsed);
        }

        let mut entries = self.lock();
        if entries.len() >= self.capacity && !entries.contains_key(path) {
            entries.shift_remove_index(0);
        }
        entries.insert(path.to_string(), Arc::clone(&parsed));
        Ok(parsed)
    }

    fn lock(&self) -> MutexGuard<'_, IndexMap<String, Arc<JsonPath>>> {
        // Entries are immutable once inserted, so a poisoned map is still valid.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for PathCache {
    fn default() -> Self {
        Self::new(256)
    }
}
