//! JSON document loading.
//!
//! This module reads JSON text from files or stdin, transparently
//! decompressing gzip input, and builds `Document`s from it.

use crate::query::Document;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Reads the JSON text of a file.
///
/// Files ending in `.gz` are decompressed first.
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - A `.gz` file is not valid gzip
/// - The contents are not valid UTF-8
pub fn load_text_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    if is_gzipped {
        read_gzipped_file(path_ref)
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))
    }
}

/// Loads and parses a JSON file into a `Document`.
///
/// # Examples
///
/// ```no_run
/// use jsonnav::file::loader::load_document_file;
/// use jsonnav::query::Navigate;
///
/// let doc = load_document_file("config.json").unwrap();
/// let name = doc.get_string("service.name", "unknown").unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn load_document_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path_ref = path.as_ref();
    let content = load_text_file(path_ref)?;
    Document::parse(&content)
        .with_context(|| format!("Failed to parse JSON from {}", path_ref.display()))
}

/// Reads JSON text from standard input until EOF.
///
/// Gzip input is detected by its magic bytes.
pub fn load_text_from_stdin() -> Result<String> {
    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;
    decode_bytes(buffer)
}

/// Loads and parses JSON from standard input into a `Document`.
pub fn load_document_from_stdin() -> Result<Document> {
    let content = load_text_from_stdin()?;
    Document::parse(&content).context("Failed to parse JSON from stdin")
}

/// Turns raw bytes into text, decompressing gzip data.
fn decode_bytes(buffer: Vec<u8>) -> Result<String> {
    if buffer.starts_with(&GZIP_MAGIC) {
        decompress_gzip(buffer.as_slice()).context("Failed to decompress gzipped input")
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in input")
    }
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file(path: &Path) -> Result<String> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open gzipped file {}", path.display()))?;
    decompress_gzip(file).context("Failed to decompress gzipped file - file may be corrupted")
}

fn decompress_gzip<R: Read>(reader: R) -> Result<String> {
    let mut decoder = GzDecoder::new(reader);
    let mut content = String::new();
    decoder.read_to_string(&mut content)?;
    Ok(content)
}
