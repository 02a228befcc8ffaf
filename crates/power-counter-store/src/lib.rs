//! Storage layer for Power Counter.
//!
//! The player list is persisted as a single opaque text blob under a fixed
//! key. This crate defines the [`BlobStore`] boundary the core writes
//! through, and the two implementations the app can be configured with.
//!
//! # Architecture
//!
//! ```text
//! PlayerRepository (core)
//!     |
//!     +-- read at startup / write after each mutation --> BlobStore
//!         |-- FileStore    (one JSON file per key, atomic rename)
//!         +-- MemoryStore  (process-lifetime map)
//! ```
//!
//! # Modules
//!
//! - [`blob`] -- The [`BlobStore`] trait and [`MemoryStore`]
//! - [`file`] -- Directory-backed [`FileStore`]
//! - [`error`] -- Shared error types

pub mod blob;
pub mod error;
pub mod file;

// Re-export primary types for convenience.
pub use blob::{BlobStore, MemoryStore};
pub use error::StoreError;
pub use file::FileStore;
