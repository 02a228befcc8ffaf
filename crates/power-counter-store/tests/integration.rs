//! Integration tests for the `power-counter-store` file backend.
//!
//! Each test works in its own scratch directory under the system temp dir
//! and removes it afterwards.

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::PathBuf;

use power_counter_store::{BlobStore, FileStore, StoreError};
use uuid::Uuid;

const KEY: &str = "players_list";

// =============================================================================
// Helper: scratch directory
// =============================================================================

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("power-counter-store-{}", Uuid::new_v4()))
}

async fn cleanup(dir: &PathBuf) {
    let _ = tokio::fs::remove_dir_all(dir).await;
}

// =============================================================================
// FileStore Tests
// =============================================================================

#[tokio::test]
async fn open_creates_directory() {
    let root = scratch_dir();
    let dir = root.join("nested").join("deeper");
    let store = FileStore::open(&dir).await.expect("open");
    assert!(tokio::fs::metadata(store.directory()).await.is_ok());
    cleanup(&root).await;
}

#[tokio::test]
async fn missing_file_reads_none() {
    let dir = scratch_dir();
    let store = FileStore::open(&dir).await.expect("open");
    assert_eq!(store.read(KEY).await.expect("read"), None);
    cleanup(&dir).await;
}

#[tokio::test]
async fn write_then_read_back() {
    let dir = scratch_dir();
    let store = FileStore::open(&dir).await.expect("open");

    store.write(KEY, r#"[{"id":1}]"#).await.expect("write");
    let blob = store.read(KEY).await.expect("read");
    assert_eq!(blob.as_deref(), Some(r#"[{"id":1}]"#));

    let on_disk = tokio::fs::read_to_string(dir.join("players_list.json"))
        .await
        .expect("file exists");
    assert_eq!(on_disk, r#"[{"id":1}]"#);
    cleanup(&dir).await;
}

#[tokio::test]
async fn overwrite_leaves_no_temp_file() {
    let dir = scratch_dir();
    let store = FileStore::open(&dir).await.expect("open");

    store.write(KEY, "first").await.expect("write 1");
    store.write(KEY, "second").await.expect("write 2");
    assert_eq!(store.read(KEY).await.unwrap().as_deref(), Some("second"));

    let mut entries = tokio::fs::read_dir(&dir).await.expect("read_dir");
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.expect("entry") {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    assert_eq!(names, vec!["players_list.json".to_owned()]);
    cleanup(&dir).await;
}

#[tokio::test]
async fn survives_reopen() {
    let dir = scratch_dir();
    {
        let store = FileStore::open(&dir).await.expect("open");
        store.write(KEY, "persisted").await.expect("write");
    }
    let reopened = FileStore::open(&dir).await.expect("reopen");
    assert_eq!(
        reopened.read(KEY).await.unwrap().as_deref(),
        Some("persisted")
    );
    cleanup(&dir).await;
}

#[tokio::test]
async fn invalid_key_is_rejected() {
    let dir = scratch_dir();
    let store = FileStore::open(&dir).await.expect("open");

    let err = store.write("../outside", "x").await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidKey(_)));
    let err = store.read("").await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidKey(_)));
    cleanup(&dir).await;
}

#[tokio::test]
async fn write_into_removed_directory_fails() {
    let dir = scratch_dir();
    let store = FileStore::open(&dir).await.expect("open");
    cleanup(&dir).await;

    let err = store.write(KEY, "x").await.unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}
