//! Blob store trait and in-memory implementation.
//!
//! The core treats persistence as an opaque key-value register of string
//! blobs. The [`BlobStore`] trait abstracts the mechanism -- it could be a
//! directory of files, a platform preference store, or a test double.
//!
//! [`MemoryStore`] keeps blobs in a map for the lifetime of the process. It
//! backs the `memory` storage backend and most tests.

use std::collections::BTreeMap;
use std::future::Future;

use tokio::sync::RwLock;

use crate::error::StoreError;

/// Durable key-value storage of string blobs.
///
/// Implementations must make each `write` atomic from a reader's point of
/// view: a concurrent or later `read` sees either the previous blob or the
/// new one, never a mix. Later writes to the same key win.
///
/// The returned futures are `Send` so the repository can drive them from a
/// spawned writer task.
pub trait BlobStore: Send + Sync {
    /// Read the blob stored at `key`.
    ///
    /// Returns `Ok(None)` if nothing has ever been written to `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be read.
    fn read(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Replace the blob stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn write(&self, key: &str, blob: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// A blob store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `blob` at `key`.
    pub fn seeded(key: impl Into<String>, blob: impl Into<String>) -> Self {
        let mut blobs = BTreeMap::new();
        blobs.insert(key.into(), blob.into());
        Self {
            blobs: RwLock::new(blobs),
        }
    }

    /// Number of keys currently stored.
    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    /// Whether the store holds no keys.
    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }
}

impl BlobStore for MemoryStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.blobs.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        let mut guard = self.blobs.write().await;
        guard.insert(key.to_owned(), blob.to_owned());
        tracing::trace!(key, bytes = blob.len(), "Blob written to memory store");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_key_reads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.read("players_list").await.unwrap(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn write_then_read() {
        let store = MemoryStore::new();
        store.write("k", "v1").await.unwrap();
        assert_eq!(store.read("k").await.unwrap().as_deref(), Some("v1"));
    }

    #[tokio::test]
    async fn last_write_wins() {
        let store = MemoryStore::new();
        store.write("k", "v1").await.unwrap();
        store.write("k", "v2").await.unwrap();
        assert_eq!(store.read("k").await.unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn seeded_store_returns_seed() {
        let store = MemoryStore::seeded("players_list", "not json");
        assert_eq!(
            store.read("players_list").await.unwrap().as_deref(),
            Some("not json")
        );
        assert_eq!(store.read("other").await.unwrap(), None);
    }
}
