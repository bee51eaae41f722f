use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Local key-value persistence.
///
/// Values are opaque strings; typed records are encoded in [`crate::records`].
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read. A missing key is `Ok(None)`.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Remove several keys at once.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on the first failed removal.
    async fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        for key in keys {
            self.remove(key).await?;
        }
        Ok(())
    }
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Holds the key-value backend behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            kv: Arc::new(InMemoryRepository::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_values() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get("k").await.unwrap(), None);

        repo.put("k", "one").await.unwrap();
        repo.put("k", "two").await.unwrap();
        assert_eq!(repo.get("k").await.unwrap().as_deref(), Some("two"));

        repo.remove("k").await.unwrap();
        repo.remove("k").await.unwrap();
        assert_eq!(repo.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn remove_many_only_touches_listed_keys() {
        let storage = Storage::in_memory();
        for key in ["a", "b", "c"] {
            storage.kv.put(key, key).await.unwrap();
        }

        storage.kv.remove_many(&["a", "c"]).await.unwrap();

        assert_eq!(storage.kv.get("a").await.unwrap(), None);
        assert_eq!(storage.kv.get("b").await.unwrap().as_deref(), Some("b"));
        assert_eq!(storage.kv.get("c").await.unwrap(), None);
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();
        repo.put("shared", "yes").await.unwrap();
        assert_eq!(other.get("shared").await.unwrap().as_deref(), Some("yes"));
    }
}
