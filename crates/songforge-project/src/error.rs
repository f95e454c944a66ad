//! Error types for the data model and persistence.

use thiserror::Error;

/// Result type for data-model operations.
pub type ProjectResult<T> = Result<T, ProjectError>;

/// Errors that can occur while persisting or loading projects.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// Workspace path could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored document is not a valid project.
    #[error("malformed project document: {0}")]
    Format(#[from] serde_json::Error),
}
