//! Error handling for chanwatch-store
//!
//! Wraps chanwatch-core ExError with store-specific helpers

use chanwatch_core::errors::{ChanwatchError, ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error for a file operation
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    let kind = if err.kind() == std::io::ErrorKind::NotFound {
        ExErrorKind::NotFound
    } else {
        ExErrorKind::Io
    };
    ExError::new(kind)
        .with_op(operation)
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}

/// Create an error for a keyword file that is not valid JSON or has the wrong shape
pub fn malformed_store(path: &Path, err: serde_json::Error) -> ExError {
    ExError::from(ChanwatchError::Serialization {
        message: format!("Malformed keyword file: {}", err),
    })
    .with_op("store_parse")
    .with_path(path.display().to_string())
}

/// Create an error for a keyword map that could not be encoded
pub fn encode_error(path: &Path, err: serde_json::Error) -> ExError {
    ExError::from(ChanwatchError::Serialization {
        message: err.to_string(),
    })
    .with_op("store_encode")
    .with_path(path.display().to_string())
}
