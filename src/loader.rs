//! Reading input files, with transparent gzip decompression.
//!
//! Compression is detected from the file name only: a path ending in `.gz`
//! is always run through a gzip decoder, anything else is read as-is.

use crate::error::ParseError;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Returns `ParseError::FileNotFound` if nothing exists at `path`.
pub fn ensure_exists(path: &Path) -> Result<(), ParseError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ParseError::file_not_found(display_path(path)))
    }
}

/// Checks whether the path names a gzip-compressed file.
pub fn is_compressed(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Reads the whole file into memory, decompressing it when needed.
///
/// # Errors
///
/// - `ParseError::FileNotFound` if the file does not exist
/// - `ParseError::ReadError` if the file cannot be opened or read
/// - `ParseError::DecompressError` if a `.gz` file is not valid gzip data
pub fn read_source(path: &Path) -> Result<Vec<u8>, ParseError> {
    ensure_exists(path)?;

    if !is_compressed(path) {
        return fs::read(path).map_err(|e| ParseError::read_error(display_path(path), e));
    }

    let file = File::open(path).map_err(|e| ParseError::read_error(display_path(path), e))?;
    let mut decoder = GzDecoder::new(file);
    let mut content = Vec::new();
    decoder
        .read_to_end(&mut content)
        .map_err(|e| ParseError::decompress_error(display_path(path), e))?;

    Ok(content)
}

pub(crate) fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
