//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`SeqMonError`] which covers every failure mode of seqmon.
//! It uses `thiserror` for ergonomic error definitions and includes named
//! constructors for the common failure scenarios.
//!
//! # Public API
//! - [`SeqMonError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, SeqMonError>`
//!
//! # Error Categories
//! - **Path input**: empty paths, paths without a file name, non-UTF-8 names
//! - **Directory monitoring**: missing roots, walk and I/O errors
//! - **Configuration**: unreadable, unparseable or unwritable config files
//!
//! An unparseable file name or a delete of an untracked path is *not* an error:
//! the engine reports those through its outcome types instead.

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for seqmon
#[derive(Error, Debug)]
pub enum SeqMonError {
    // Path input errors
    #[error("Empty path given")]
    EmptyPath,

    #[error("Path has no file name: {path}")]
    MissingFileName { path: PathBuf },

    #[error("Invalid UTF-8 in file name: {path}")]
    InvalidUtf8Path { path: PathBuf },

    // Directory monitoring errors
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Failed to read metadata for '{path}': {source}")]
    MetadataFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration errors
    #[error("Could not find configuration directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid poll interval: {interval_ms}ms. Use a value of at least 10ms")]
    InvalidPollInterval { interval_ms: u64 },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using SeqMonError
pub type Result<T> = std::result::Result<T, SeqMonError>;

impl SeqMonError {
    /// Create a missing file name error
    pub fn missing_file_name(path: impl Into<PathBuf>) -> Self {
        Self::MissingFileName { path: path.into() }
    }

    /// Create an invalid UTF-8 path error
    pub fn invalid_utf8_path(path: impl Into<PathBuf>) -> Self {
        Self::InvalidUtf8Path { path: path.into() }
    }

    /// Create a not-a-directory error
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Create a metadata failure error
    pub fn metadata_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::MetadataFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config write failed error
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid poll interval error
    pub fn invalid_poll_interval(interval_ms: u64) -> Self {
        Self::InvalidPollInterval { interval_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SeqMonError::EmptyPath;
        assert_eq!(err.to_string(), "Empty path given");
    }

    #[test]
    fn test_not_a_directory_error() {
        let err = SeqMonError::not_a_directory("/renders/missing");
        assert_eq!(err.to_string(), "Not a directory: /renders/missing");
    }

    #[test]
    fn test_missing_file_name_error() {
        let err = SeqMonError::missing_file_name("/");
        assert_eq!(err.to_string(), "Path has no file name: /");
    }

    #[test]
    fn test_metadata_failed() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = SeqMonError::metadata_failed("/renders/frame_001.exr", io_err);
        assert!(err.to_string().contains("/renders/frame_001.exr"));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_config_read_failed() {
        let path = PathBuf::from("/test/config.json");
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = SeqMonError::config_read_failed(&path, io_err);
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("access denied"));
    }

    #[test]
    fn test_config_parse_failed() {
        let path = PathBuf::from("/test/config.json");
        let json_err = serde_json::from_str::<serde_json::Value>("{ invalid json").unwrap_err();
        let err = SeqMonError::config_parse_failed(&path, json_err);
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_config_write_failed() {
        let path = PathBuf::from("/test/config.json");
        let io_err = std::io::Error::new(std::io::ErrorKind::OutOfMemory, "no space left");
        let err = SeqMonError::config_write_failed(&path, io_err);
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("no space left"));
    }

    #[test]
    fn test_invalid_poll_interval() {
        let err = SeqMonError::invalid_poll_interval(0);
        assert!(err.to_string().contains("0ms"));
    }
}
