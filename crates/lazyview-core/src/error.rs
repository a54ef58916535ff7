//! Error types for LazyView

use thiserror::Error;

/// Main error type for LazyView operations
#[derive(Error, Debug)]
pub enum LazyViewError {
    /// Shared data accessed with no enclosing provider
    #[error("Shared data context unavailable: `{0}` called outside a DataProvider")]
    ContextUnavailable(&'static str),

    /// Gallery manifest parsed but contains unusable entries
    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    /// Gallery manifest is not valid JSON
    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using LazyViewError
pub type LazyViewResult<T> = Result<T, LazyViewError>;
