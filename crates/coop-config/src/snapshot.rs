//! Snapshot persistence for client-local state
//!
//! The cart and the auth token are plain serialized snapshots, not versioned.
//! The policy for a format change is "start empty": any value that fails to
//! read or parse loads as absent instead of failing startup.
//!
//! The [`SnapshotStore`] trait keeps the storage mechanism swappable; tests
//! use [`MemoryStore`] as an in-memory fake.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Load/save/clear interface for one persisted snapshot
pub trait SnapshotStore<T>: Send + Sync {
    /// Load the snapshot; `None` when absent or unreadable
    fn load(&self) -> Option<T>;

    /// Persist the snapshot, replacing any previous value
    fn save(&self, value: &T) -> Result<()>;

    /// Remove the snapshot entirely
    fn clear(&self) -> Result<()>;
}

/// Snapshot persisted as a JSON file
#[derive(Debug)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }
}

impl<T> SnapshotStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    fn load(&self) -> Option<T> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!(
                    "Ignoring corrupt snapshot at {:?}: {}",
                    self.path,
                    err
                );
                None
            }
        }
    }

    fn save(&self, value: &T) -> Result<()> {
        let content = serde_json::to_string(value).context("Failed to serialize snapshot")?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write snapshot file: {:?}", self.path))?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("Failed to remove snapshot: {:?}", self.path))
            }
        }
    }
}

/// In-memory snapshot store for tests
///
/// Clones share the same cell, so a test can hand one handle to the code
/// under test and inspect the other.
#[derive(Debug)]
pub struct MemoryStore<T> {
    value: Arc<Mutex<Option<T>>>,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            value: Arc::new(Mutex::new(None)),
        }
    }
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
        }
    }
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: T) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(value))),
        }
    }
}

impl<T> SnapshotStore<T> for MemoryStore<T>
where
    T: Clone + Send + Sync,
{
    fn load(&self) -> Option<T> {
        self.value.lock().ok()?.clone()
    }

    fn save(&self, value: &T) -> Result<()> {
        if let Ok(mut guard) = self.value.lock() {
            *guard = Some(value.clone());
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if let Ok(mut guard) = self.value.lock() {
            *guard = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_store_round_trips() {
        let dir = tempdir().unwrap();
        let store: JsonFileStore<Vec<String>> = JsonFileStore::new(dir.path().join("cart.json"));

        assert!(store.load().is_none());

        let lines = vec!["a".to_string(), "b".to_string()];
        store.save(&lines).unwrap();
        assert_eq!(store.load(), Some(lines));

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn corrupt_file_loads_as_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, "{not json").unwrap();

        let store: JsonFileStore<Vec<String>> = JsonFileStore::new(path);
        assert!(store.load().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let store: JsonFileStore<String> = JsonFileStore::new(dir.path().join("token.json"));
        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn memory_store_behaves_like_file_store() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());
        store.save(&"tok".to_string()).unwrap();
        assert_eq!(store.load(), Some("tok".to_string()));
        store.clear().unwrap();
        assert!(store.load().is_none());
    }
}
