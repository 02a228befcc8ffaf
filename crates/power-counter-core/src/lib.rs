//! Player list state and persistence for Power Counter.
//!
//! This crate owns the write path from a user intent to durable storage:
//! the [`PlayerController`] validates and applies mutations, the
//! [`PlayerRepository`] publishes the resulting list and queues it for the
//! store, and the [`codec`] turns it into the persisted JSON blob.
//!
//! # Modules
//!
//! - [`codec`] -- JSON encode/decode with fallback to the default list.
//! - [`controller`] -- [`PlayerController`], the mutation API.
//! - [`repository`] -- [`PlayerRepository`], observable list and writer task.
//! - [`error`] -- [`RepositoryError`].

pub mod codec;
pub mod controller;
pub mod error;
pub mod repository;

// Re-export primary types for convenience.
pub use codec::{CodecError, PLAYERS_KEY};
pub use controller::PlayerController;
pub use error::RepositoryError;
pub use repository::{PlayerRepository, WriteReceipt};
