//! Error types for the storage layer.
//!
//! All errors are propagated via [`StoreError`] which wraps the underlying
//! I/O errors with the path or key that was being accessed.

use std::path::PathBuf;

/// Errors that can occur in a blob store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A filesystem operation failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file or directory being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be mapped onto the backing storage.
    #[error("invalid key: {0:?}")]
    InvalidKey(String),

    /// The backing storage refused the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
