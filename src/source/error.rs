//! Plugin source error types.

use thiserror::Error;

/// Result type for plugin source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while listing plugins from a source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Remote server answered with an error status.
    #[error("CI API error: {message} (status: {status})")]
    Api { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Archive could not be read.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Background scan task failed.
    #[error("Scan task failed: {0}")]
    Task(String),
}

impl SourceError {
    /// Whether the error means the resource is absent rather than unreachable.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Api { status, .. } => *status == 404,
            Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
