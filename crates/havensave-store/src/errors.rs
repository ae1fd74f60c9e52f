//! Error handling for havensave-store
//!
//! Wraps havensave-core ExError with filesystem-specific helpers

use havensave_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a missing-source error for a backup request
pub fn source_missing(path: &Path) -> ExError {
    ExError::new(ExErrorKind::SourceMissing)
        .with_op("create_backup")
        .with_path(path.display().to_string())
        .with_message("Source directory does not exist")
}

/// Create a missing-archive error for a restore request
pub fn archive_missing(path: &Path) -> ExError {
    ExError::new(ExErrorKind::ArchiveMissing)
        .with_op("restore")
        .with_path(path.display().to_string())
        .with_message("Archive does not exist")
}

/// Create an archive write failure
pub fn archive_write(path: &Path, cause: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::ArchiveWrite)
        .with_op("create_backup")
        .with_path(path.display().to_string())
        .with_message(format!("Failed to write archive: {}", cause))
}

/// Create an extraction failure
pub fn extract_error(path: &Path, cause: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Extract)
        .with_op("restore")
        .with_path(path.display().to_string())
        .with_message(format!("Failed to extract archive: {}", cause))
}

/// Create a per-archive deletion failure
pub fn delete_error(path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Delete)
        .with_op("prune")
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}

/// Create an input validation error
pub fn invalid_input(operation: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op(operation.to_string())
        .with_message(reason.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
