//! Key-value slots holding cart snapshots.
//!
//! The cart actor writes the whole [`CartSnapshot`] after every change and
//! reads it back when a session's cart is opened. Writers of the same key race
//! and the last write wins.

use crate::model::CartSnapshot;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("snapshot slot {key} could not be accessed: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot slot {key} holds unreadable data: {source}")]
    Format {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// `Ok(None)` when the slot has never been written.
    async fn load(&self, key: &str) -> Result<Option<CartSnapshot>, StorageError>;

    async fn save(&self, key: &str, snapshot: &CartSnapshot) -> Result<(), StorageError>;
}

fn decode(key: &str, raw: &str) -> Result<CartSnapshot, StorageError> {
    serde_json::from_str(raw).map_err(|source| StorageError::Format {
        key: key.to_string(),
        source,
    })
}

fn encode(key: &str, snapshot: &CartSnapshot) -> Result<String, StorageError> {
    serde_json::to_string(snapshot).map_err(|source| StorageError::Format {
        key: key.to_string(),
        source,
    })
}

/// In-process slots, serialized the same way as on disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes raw text into a slot, bypassing serialization.
    pub fn put_raw(&self, key: &str, raw: impl Into<String>) {
        self.slots().insert(key.to_string(), raw.into());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots().get(key).cloned()
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.slots
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<CartSnapshot>, StorageError> {
        let raw = self.slots().get(key).cloned();
        raw.map(|raw| decode(key, &raw)).transpose()
    }

    async fn save(&self, key: &str, snapshot: &CartSnapshot) -> Result<(), StorageError> {
        let raw = encode(key, snapshot)?;
        self.slots().insert(key.to_string(), raw);
        Ok(())
    }
}

/// One JSON file per slot inside `dir`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// One file per distinct key. ASCII letters, digits and `-` are kept;
    /// every other byte becomes `_` plus two hex digits, so `cart:table 4` is
    /// `cart_3Atable_204.json`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut name = String::with_capacity(key.len() + 5);
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                name.push(char::from(byte));
            } else {
                name.push_str(&format!("_{byte:02X}"));
            }
        }
        name.push_str(".json");
        self.dir.join(name)
    }
}

#[async_trait]
impl SnapshotStore for FileStore {
    async fn load(&self, key: &str) -> Result<Option<CartSnapshot>, StorageError> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => decode(key, &raw).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    async fn save(&self, key: &str, snapshot: &CartSnapshot) -> Result<(), StorageError> {
        let io = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };
        let raw = encode(key, snapshot)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        tokio::fs::create_dir_all(&self.dir).await.map_err(io)?;
        tokio::fs::write(&tmp, raw).await.map_err(io)?;
        tokio::fs::rename(&tmp, &path).await.map_err(io)?;
        debug!(path = %path.display(), "Snapshot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CartLine, Money};

    fn snapshot() -> CartSnapshot {
        CartSnapshot {
            items: vec![CartLine {
                id: "dosa".into(),
                name: "Masala dosa".into(),
                price: Money(1200),
                quantity: 2,
                image: "dosa.jpg".into(),
                category: Some("mains".into()),
            }],
            total: Money(2400),
        }
    }

    #[tokio::test]
    async fn memory_store_round_trips_and_reports_garbage() {
        let store = MemoryStore::new();
        assert_eq!(store.load("cart:a").await.unwrap(), None);

        store.save("cart:a", &snapshot()).await.unwrap();
        assert_eq!(store.load("cart:a").await.unwrap(), Some(snapshot()));

        store.put_raw("cart:b", "{not json");
        assert!(matches!(
            store.load("cart:b").await,
            Err(StorageError::Format { key, .. }) if key == "cart:b"
        ));
    }

    #[tokio::test]
    async fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        FileStore::new(dir.path())
            .save("cart:table 4", &snapshot())
            .await
            .unwrap();

        let reopened = FileStore::new(dir.path());
        assert!(reopened.path_for("cart:table 4").ends_with("cart_3Atable_204.json"));
        assert_eq!(reopened.load("cart:table 4").await.unwrap(), Some(snapshot()));
        assert_eq!(reopened.load("cart:other").await.unwrap(), None);
    }

    #[tokio::test]
    async fn file_store_keeps_similar_keys_apart() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let keys = ["cart:table 4", "cart:table_4", "cart:table:4", "cart:table-4", "cart:täble 4"];

        let paths: std::collections::HashSet<PathBuf> =
            keys.iter().map(|key| store.path_for(key)).collect();
        assert_eq!(paths.len(), keys.len());

        store.save("cart:table 4", &snapshot()).await.unwrap();
        assert_eq!(store.load("cart:table_4").await.unwrap(), None);
        assert_eq!(store.load("cart:table:4").await.unwrap(), None);
        assert_eq!(store.load("cart:table 4").await.unwrap(), Some(snapshot()));
    }

    #[tokio::test]
    async fn file_store_reports_unwritable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("taken");
        std::fs::write(&blocker, "a file, not a directory").unwrap();

        let err = FileStore::new(&blocker)
            .save("cart:a", &snapshot())
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
    }
}
