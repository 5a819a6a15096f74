//! Key-value blob persistence.
//!
//! A blob is one UTF-8 string stored under a short key. The record store
//! keeps the whole project list in a single blob and rewrites it on every
//! change.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::StoreError;

/// Minimal string blob storage.
pub trait BlobStore {
    /// Read the blob stored under `key`. `Ok(None)` when nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the backing medium cannot be read.
    fn get_blob(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the write fails (e.g. disk full).
    fn set_blob(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the blob stored under `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the removal fails.
    fn remove_blob(&self, key: &str) -> Result<(), StoreError>;
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

// ---------------------------------------------------------------------------
// FileBlobStore
// ---------------------------------------------------------------------------

/// One `<key>.json` file per blob under a data directory.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    /// Use `dir` as the blob directory. It is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl BlobStore for FileBlobStore {
    fn get_blob(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(StoreError::storage(key, error)),
        }
    }

    fn set_blob(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|error| StoreError::storage(key, error))?;
        atomic_write(&path, value).map_err(|error| StoreError::storage(key, error))
    }

    fn remove_blob(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(StoreError::storage(key, error)),
        }
    }
}

/// Write to a sibling temp file, then rename over the target.
fn atomic_write(path: &Path, content: &str) -> std::io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)
}

// ---------------------------------------------------------------------------
// MemoryBlobStore
// ---------------------------------------------------------------------------

/// In-memory blob store for tests. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryBlobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one blob.
    #[must_use]
    pub fn with_blob(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Make subsequent writes fail as if storage were full.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Current raw value under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get_blob(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        Ok(self.raw(key))
    }

    fn set_blob(&self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::storage(
                key,
                std::io::Error::other("storage quota exceeded"),
            ));
        }
        self.blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_blob(&self, key: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_missing_key_is_none() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        let store = FileBlobStore::new(temp.path().join("data"));
        assert!(store.get_blob("veille_projects").unwrap().is_none());
    }

    #[test]
    fn file_store_overwrites_and_leaves_no_temp_file() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        let store = FileBlobStore::new(temp.path().join("data"));

        store.set_blob("veille_projects", "[1]").unwrap();
        store.set_blob("veille_projects", "[2]").unwrap();

        assert_eq!(
            store.get_blob("veille_projects").unwrap().as_deref(),
            Some("[2]")
        );
        let entries: Vec<_> = fs::read_dir(store.dir())
            .unwrap()
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec![String::from("veille_projects.json")]);
    }

    #[test]
    fn file_store_remove_is_idempotent() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        let store = FileBlobStore::new(temp.path());
        store.set_blob("k", "v").unwrap();
        store.remove_blob("k").unwrap();
        store.remove_blob("k").unwrap();
        assert!(store.get_blob("k").unwrap().is_none());
    }

    #[test]
    fn rejects_path_like_keys() {
        let temp = tempfile::tempdir().expect("tempdir should create");
        let store = FileBlobStore::new(temp.path());
        assert!(matches!(
            store.set_blob("../escape", "x"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(store.get_blob(""), Err(StoreError::InvalidKey(_))));
    }

    #[test]
    fn memory_store_clones_share_contents() {
        let store = MemoryBlobStore::new();
        let clone = store.clone();
        store.set_blob("k", "v").unwrap();
        assert_eq!(clone.raw("k").as_deref(), Some("v"));
    }

    #[test]
    fn memory_store_can_simulate_full_storage() {
        let store = MemoryBlobStore::with_blob("k", "old");
        store.set_fail_writes(true);
        assert!(matches!(
            store.set_blob("k", "new"),
            Err(StoreError::Storage { .. })
        ));
        assert_eq!(store.raw("k").as_deref(), Some("old"));
    }
}
