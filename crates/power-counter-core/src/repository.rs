//! The player repository: single source of truth for the current list.
//!
//! [`PlayerRepository`] holds the list in a [`watch`] channel. Every
//! subscriber sees the current snapshot as soon as it subscribes and the
//! latest value after each change; a slow subscriber may skip intermediate
//! values but always ends on the final one.
//!
//! # Write path
//!
//! ```text
//! update(f) / save(list)
//!     |
//!     +-- watch value replaced (subscribers notified)
//!     +-- blob encoded and queued ------> writer task --> BlobStore::write
//!                                              |
//!                                              +--> WriteReceipt (optional)
//! ```
//!
//! Replacing the value and queueing the blob happen under the watch lock, so
//! the order of durable writes matches the order of in-memory changes even
//! when updates come from several tasks. The single writer task performs one
//! store write at a time.
//!
//! Callers never wait for the store. A failed write is logged and reported
//! through the receipt; the in-memory list is not rolled back.

use std::sync::Arc;

use power_counter_store::BlobStore;
use power_counter_types::PlayerList;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use crate::codec::{self, PLAYERS_KEY};
use crate::error::RepositoryError;

/// A unit of work for the writer task.
#[derive(Debug)]
enum WriteCommand {
    /// Persist an encoded list.
    Save {
        blob: String,
        done: oneshot::Sender<Result<(), RepositoryError>>,
    },
    /// Acknowledge once every earlier command has been handled.
    Flush { done: oneshot::Sender<()> },
}

/// Handle to the outcome of one queued write.
///
/// Dropping the receipt does not cancel the write.
#[derive(Debug)]
pub struct WriteReceipt {
    rx: oneshot::Receiver<Result<(), RepositoryError>>,
}

impl WriteReceipt {
    fn ready(result: Result<(), RepositoryError>) -> Self {
        let (done, rx) = oneshot::channel();
        let _ = done.send(result);
        Self { rx }
    }

    /// Wait for the write to reach the store.
    ///
    /// # Errors
    ///
    /// Returns the store or codec error that prevented the write, or
    /// [`RepositoryError::WriterClosed`] if the writer task is gone.
    pub async fn wait(self) -> Result<(), RepositoryError> {
        self.rx.await.unwrap_or(Err(RepositoryError::WriterClosed))
    }
}

/// Owner of the authoritative player list.
#[derive(Debug)]
pub struct PlayerRepository {
    state: watch::Sender<PlayerList>,
    writes: mpsc::UnboundedSender<WriteCommand>,
}

impl PlayerRepository {
    /// Load the list from `store` and start the writer task.
    ///
    /// A missing, unreadable, or corrupt blob yields the default single
    /// player list. Must be called from within a Tokio runtime.
    pub async fn open<S>(store: Arc<S>) -> Self
    where
        S: BlobStore + 'static,
    {
        let blob = match store.read(PLAYERS_KEY).await {
            Ok(blob) => blob,
            Err(e) => {
                warn!(error = %e, "Failed to read stored player list, using default");
                None
            }
        };
        let initial = codec::decode_list(blob.as_deref());
        info!(players = initial.len(), "Player list loaded");

        let (state, _) = watch::channel(initial);
        let (writes, queue) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(store, queue));

        Self { state, writes }
    }

    /// Subscribe to the list.
    ///
    /// The receiver starts out marked as changed, so its first
    /// [`changed`](watch::Receiver::changed) call completes immediately with
    /// the current snapshot.
    pub fn observe(&self) -> watch::Receiver<PlayerList> {
        let mut rx = self.state.subscribe();
        rx.mark_changed();
        rx
    }

    /// Clone of the current list.
    pub fn current(&self) -> PlayerList {
        self.state.borrow().clone()
    }

    /// Replace the whole list and queue it for persistence.
    pub fn save(&self, list: PlayerList) -> WriteReceipt {
        self.update(move |_| Some(list))
            .unwrap_or_else(|| WriteReceipt::ready(Err(RepositoryError::WriterClosed)))
    }

    /// Derive a new list from the current one and queue it for persistence.
    ///
    /// `f` returning `None` means "no change": subscribers are not notified
    /// and nothing is written. Concurrent calls are serialized.
    pub fn update<F>(&self, f: F) -> Option<WriteReceipt>
    where
        F: FnOnce(&PlayerList) -> Option<PlayerList>,
    {
        let mut receipt = None;
        self.state.send_if_modified(|current| {
            let Some(next) = f(current) else {
                return false;
            };
            receipt = Some(self.enqueue(&next));
            *current = next;
            true
        });
        receipt
    }

    /// Wait until every write queued before this call has been handled.
    pub async fn flush(&self) {
        let (done, rx) = oneshot::channel();
        if self.writes.send(WriteCommand::Flush { done }).is_ok() {
            let _ = rx.await;
        }
    }

    fn enqueue(&self, list: &PlayerList) -> WriteReceipt {
        let blob = match codec::encode(list.players()) {
            Ok(blob) => blob,
            Err(e) => {
                warn!(error = %e, "Failed to encode player list, not persisted");
                return WriteReceipt::ready(Err(e.into()));
            }
        };
        let (done, rx) = oneshot::channel();
        if self.writes.send(WriteCommand::Save { blob, done }).is_err() {
            warn!("Writer task stopped, player list not persisted");
        }
        WriteReceipt { rx }
    }
}

/// Drain the write queue, one store write at a time.
///
/// Exits once every [`PlayerRepository`] handle has been dropped and the
/// queue is empty.
async fn run_writer<S>(store: Arc<S>, mut queue: mpsc::UnboundedReceiver<WriteCommand>)
where
    S: BlobStore,
{
    while let Some(command) = queue.recv().await {
        match command {
            WriteCommand::Save { blob, done } => {
                let result = store
                    .write(PLAYERS_KEY, &blob)
                    .await
                    .map_err(RepositoryError::from);
                match &result {
                    Ok(()) => debug!(bytes = blob.len(), "Player list persisted"),
                    Err(e) => warn!(error = %e, "Failed to persist player list"),
                }
                let _ = done.send(result);
            }
            WriteCommand::Flush { done } => {
                let _ = done.send(());
            }
        }
    }
    debug!("Player list writer stopped");
}
