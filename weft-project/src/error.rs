//! Error types for project model operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ProjectError.
pub type Result<T> = std::result::Result<T, ProjectError>;

/// Errors that can occur while resolving or reading project items.
#[derive(Error, Debug)]
pub enum ProjectError {
    /// A logical path violated the lookup contract.
    #[error("invalid logical path '{path}': {reason}")]
    InvalidLogicalPath {
        path: String,
        reason: &'static str,
    },

    /// Tried to read an item that has no backing content.
    #[error("no template item exists at '{path}'")]
    NotFound { path: String },

    /// Failed to read a file.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A logical path resolved outside the project root.
    #[error("path '{path}' escapes the project root")]
    PathEscapesRoot { path: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProjectError {
    /// Create an InvalidLogicalPath error.
    pub fn invalid_logical_path(path: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidLogicalPath {
            path: path.into(),
            reason,
        }
    }

    /// Create a NotFound error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a FileRead error.
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }
}
