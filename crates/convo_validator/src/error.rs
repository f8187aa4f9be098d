//! Error types for loading validation inputs.
//!
//! Per-record violations are not errors: they are collected into the
//! [`ValidationReport`](crate::ValidationReport). Only failures that stop a
//! run from completing are represented here.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that prevent a validation run from completing.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Schema file does not exist
    #[error("Schema file not found: {}", .0.display())]
    SchemaNotFound(PathBuf),

    /// Schema file could not be parsed as structured data
    #[error("Schema file {} is not valid {format}: {reason}", .path.display())]
    SchemaParse {
        path: PathBuf,
        format: &'static str,
        reason: String,
    },

    /// Schema document is not a usable JSON Schema
    #[error("Invalid JSON Schema in {}: {reason}", .path.display())]
    InvalidSchema { path: PathBuf, reason: String },

    /// Schema file extension is not recognized
    #[error("Unsupported schema file format: {0}")]
    UnsupportedFormat(String),

    /// Schema file has no extension
    #[error("Invalid or missing file extension: {}", .0.display())]
    InvalidExtension(PathBuf),

    /// Data file does not exist
    #[error("Data file not found: {}", .0.display())]
    DataNotFound(PathBuf),

    /// Data file has no header row
    #[error("Data file is empty: {}", .0.display())]
    EmptyData(PathBuf),

    /// Data file could not be parsed as CSV
    #[error("Malformed data file {}: {reason}", .path.display())]
    MalformedData { path: PathBuf, reason: String },

    /// File I/O error
    #[error("File I/O error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Creates a new I/O error for a path.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new malformed-data error.
    pub fn malformed(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Self::MalformedData {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Returns true if the failure concerns the schema file.
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Self::SchemaNotFound(_)
                | Self::SchemaParse { .. }
                | Self::InvalidSchema { .. }
                | Self::UnsupportedFormat(_)
                | Self::InvalidExtension(_)
        )
    }
}
