//! Parsed representation of a navigation path.

use std::fmt;

/// One dot-delimited piece of a path: a property name followed by zero or
/// more array indices, applied left to right after the property lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Property looked up on the current object. Never empty, never contains `[`.
    pub property: String,
    /// Indices applied in order to the looked-up value.
    pub indices: Vec<usize>,
}

impl Segment {
    /// Creates a plain property access.
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            property: name.into(),
            indices: Vec::new(),
        }
    }

    /// Creates a property access followed by the given indices.
    pub fn indexed(name: impl Into<String>, indices: Vec<usize>) -> Self {
        Self {
            property: name.into(),
            indices,
        }
    }

    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.property)?;
        for index in &self.indices {
            write!(f, "[{}]", index)?;
        }
        Ok(())
    }
}

/// A complete navigation path. Always holds at least one segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsonPath {
    segments: Vec<Segment>,
}

impl JsonPath {
    /// Creates a path from already-validated segments.
    ///
    /// Returns `None` when `segments` is empty.
    pub fn new(segments: Vec<Segment>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns whether the path has no segments (never true for a constructed path).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
