//! Error types for import resolution.

use thiserror::Error;
use weft_project::ProjectError;

/// Result type alias using ImportError.
pub type Result<T> = std::result::Result<T, ImportError>;

/// Errors surfaced by import resolution.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The target item violated the resolver's contract.
    #[error("invalid import target: {reason}")]
    InvalidTarget { reason: String },

    /// A file-system probe failed while discovering imports.
    ///
    /// The underlying failure is carried unmodified as the source; a
    /// partial import list is never returned in its place.
    #[error("import discovery failed: {0}")]
    Discovery(#[from] ProjectError),
}

impl ImportError {
    /// Create an InvalidTarget error.
    pub fn invalid_target(reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            reason: reason.into(),
        }
    }
}
