//! Path queries over parsed trees.
//!
//! `navigator` walks a tree along a parsed path, `accessors` layers typed
//! getters with fallbacks on top, and `document` provides an owned root.

pub mod accessors;
pub mod document;
pub mod navigator;

pub use accessors::{JsonQuery, Navigate};
pub use document::Document;
pub use navigator::Navigator;
