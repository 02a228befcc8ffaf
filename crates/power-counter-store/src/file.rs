//! Directory-backed blob store.
//!
//! Each key maps to one file inside the store directory. Writes land in a
//! hidden temporary sibling first and are then renamed over the target, so a
//! reader never observes a half-written blob.
//!
//! # Layout
//!
//! | Path | Contents |
//! |------|----------|
//! | `{dir}/{key}.json` | Current blob for `key` |
//! | `{dir}/.{key}.json.tmp` | In-flight write (transient) |
//!
//! A single process is expected to own a directory. Two writers sharing the
//! same directory would race on the temporary file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::blob::BlobStore;
use crate::error::StoreError;

/// Blob store backed by one file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `directory`, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub async fn open(directory: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let directory = directory.into();
        tokio::fs::create_dir_all(&directory)
            .await
            .map_err(|e| StoreError::io(&directory, e))?;

        tracing::info!(directory = %directory.display(), "File store opened");
        Ok(Self { directory })
    }

    /// The directory this store writes into.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the file holding `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] if `key` is empty, starts with a
    /// dot, or contains a path separator.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.directory.join(format!("{key}.json")))
    }

    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.directory.join(format!(".{key}.json.tmp"))
    }
}

impl BlobStore for FileStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }

    async fn write(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let tmp = self.temp_path_for(key);

        tokio::fs::write(&tmp, blob)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreError::io(&path, e))?;

        tracing::debug!(key, path = %path.display(), bytes = blob.len(), "Blob written");
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let bad = key.is_empty()
        || key.starts_with('.')
        || key.contains(['/', '\\'])
        || key.chars().any(char::is_control);
    if bad {
        return Err(StoreError::InvalidKey(key.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_keys() {
        assert!(validate_key("players_list").is_ok());
        assert!(validate_key("a-b.c").is_ok());
    }

    #[test]
    fn rejects_path_like_keys() {
        for key in ["", ".hidden", "../escape", "a/b", "a\\b", "nul\0"] {
            assert!(
                matches!(validate_key(key), Err(StoreError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
    }
}
