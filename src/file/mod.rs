//! File I/O for JSON documents.
//!
//! This module provides functionality to load JSON text and documents from
//! disk or stdin, including gzip-compressed input.

pub mod loader;
