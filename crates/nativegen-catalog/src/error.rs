//! Catalog error types.

/// Errors that can occur while loading a native catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog text is not the expected namespace → hash → record
    /// mapping, or a record is missing a required field.
    #[error("malformed catalog: {detail}")]
    Malformed { detail: String },

    /// The catalog file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Malformed {
            detail: err.to_string(),
        }
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
