//! Error types for the core text-processing components.
//!
//! Classification itself never fails; errors only arise while building a
//! classifier from user-supplied keyword lists.

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Main error type for core construction.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// A keyword list was empty
    #[error("Keyword list '{0}' must contain at least one keyword")]
    EmptyKeywordList(String),

    /// A keyword was blank after trimming
    #[error("Keyword list '{list}' contains a blank keyword at position {position}")]
    BlankKeyword {
        /// Name of the list ("positive" or "negative")
        list: String,
        /// Zero-based index of the offending keyword
        position: usize,
    },

    /// Unknown sentiment label text
    #[error("Unknown sentiment label: {0}")]
    UnknownLabel(String),
}
