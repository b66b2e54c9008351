#![allow(clippy::result_large_err)]

use chanwatch_core::KeywordMap;
use std::fs;
use std::path::Path;

use crate::errors::{encode_error, io_error, malformed_store, Result};
use crate::persist::atomic::atomic_write;

/// Read a keyword file.
///
/// `Ok(None)` when the file does not exist. Unreadable files and content
/// that is not an object of string arrays are errors; deciding to degrade
/// is the caller's business.
pub fn read_keyword_file(path: &Path) -> Result<Option<KeywordMap>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(io_error("read_store", path, e)),
    };

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| malformed_store(path, e))
}

/// Serialize `keywords` and atomically replace the file at `path`.
pub fn write_keyword_file(path: &Path, keywords: &KeywordMap) -> Result<()> {
    let mut content = serde_json::to_vec_pretty(keywords).map_err(|e| encode_error(path, e))?;
    content.push(b'\n');
    atomic_write(path, &content)
}
