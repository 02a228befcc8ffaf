//! Error types for the repository layer.
//!
//! None of these reach the presentation layer as failures of a mutation
//! call. They are logged, and handed to whoever awaits a
//! [`WriteReceipt`](crate::repository::WriteReceipt).

use power_counter_store::StoreError;

use crate::codec::CodecError;

/// Errors that can occur while persisting the player list.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The backing store rejected the write.
    #[error("store error: {source}")]
    Store {
        /// The underlying store error.
        #[from]
        source: StoreError,
    },

    /// The list could not be encoded.
    #[error("codec error: {source}")]
    Codec {
        /// The underlying codec error.
        #[from]
        source: CodecError,
    },

    /// The writer task stopped before handling the write.
    #[error("writer task is no longer running")]
    WriterClosed,
}
