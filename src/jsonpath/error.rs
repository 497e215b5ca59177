//! Error types for path parsing.

use thiserror::Error;

/// A malformed path string.
///
/// This is the only error the query layer surfaces: a bad path is a mistake
/// in the calling code, whereas every data-shape problem degrades to a
/// fallback value. Positions are character offsets into the whole path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Unexpected character at a specific position.
    #[error("invalid path syntax: unexpected '{found}' at position {position}, expected {expected}")]
    UnexpectedToken {
        position: usize,
        found: String,
        expected: String,
    },
    /// Input ended in the middle of a segment.
    #[error("invalid path syntax: unexpected end of path, expected {expected}")]
    UnexpectedEnd { expected: String },
    /// Any other syntax problem.
    #[error("invalid path syntax: {message}")]
    InvalidSyntax { message: String },
}
