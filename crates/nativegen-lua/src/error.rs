//! Binding output errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing generated bindings.
///
/// Rendering itself cannot fail; only the file system can.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
