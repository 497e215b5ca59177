//! Path syntax for navigating JSON trees.
//!
//! # Supported Syntax
//!
//! - `name` - Property lookup on an object
//! - `name[0]` - Property lookup followed by an array index
//! - `name[0][2]` - Several indices, applied left to right
//! - `a.b.c` - Dot-separated segments
//!
//! There is no escaping, quoting, whitespace trimming or wildcard support.
//! A dot always separates segments.
//!
//! # Examples
//!
//! ```
//! // staff.groups[0].team_leader.name
//! // order_lines[0].available_attributes[1]
//! // matrix[1][0]
//! ```

pub mod ast;
pub mod cache;
pub mod error;
pub mod parser;

pub use ast::{JsonPath, Segment};
pub use cache::PathCache;
pub use error::PathError;
pub use parser::Parser;
