//! Catalog error types.

use thiserror::Error;

use crate::source::SourceError;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while assembling the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A whole source failed, so no complete catalog can be produced.
    #[error("Unable to load plugin catalog: source '{source_name}' failed: {error}")]
    Unavailable {
        source_name: String,
        #[source]
        error: SourceError,
    },
}

impl CatalogError {
    /// Wrap the failure of a named source.
    pub fn unavailable(source_name: impl Into<String>, error: SourceError) -> Self {
        Self::Unavailable { source_name: source_name.into(), error }
    }
}
