//! Defines the custom error types and `Result` alias for the crate.
use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all fallible operations in the `rdocs` library.
#[derive(Error, Debug)]
pub enum RdocsError {
    /// A directory or file could not be created, read, or written.
    #[error("File system error at '{}': {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A collection file exists but does not hold the expected JSON object of documents.
    #[error("Corrupt collection file '{}': {reason}", .path.display())]
    CorruptStore { path: PathBuf, reason: String },

    /// An error that occurred while encoding documents to JSON.
    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    /// A database or collection name that cannot be mapped to a path.
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// The value handed to `insert` is not a JSON object.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// The value used as a filter is not a JSON object.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}

impl RdocsError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::CorruptStore {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_name(name: &str, reason: &str) -> Self {
        Self::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// A specialized `Result` type for rdocs operations.
pub type Result<T> = std::result::Result<T, RdocsError>;
