use std::sync::Arc;

use guide_core::catalog;
use guide_core::model::Place;
use storage::keys;
use storage::records::{decode_saved_places, encode_saved_places};
use storage::repository::{KeyValueStore, StorageError};

use crate::error::SavedPlacesError;

/// Bookmarked places, kept as an ordered list of place ids.
#[derive(Clone)]
pub struct SavedPlacesService {
    kv: Arc<dyn KeyValueStore>,
}

impl SavedPlacesService {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Saved ids in the order they were saved. A missing or unreadable list is empty.
    pub async fn list(&self) -> Vec<String> {
        self.try_list().await.unwrap_or_else(|err| {
            log::warn!("saved places unreadable: {err}");
            Vec::new()
        })
    }

    /// Saved ids, surfacing store failures. A corrupt list reads as empty.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    pub async fn try_list(&self) -> Result<Vec<String>, StorageError> {
        let Some(raw) = self.kv.get(keys::SAVED_PLACES).await? else {
            return Ok(Vec::new());
        };
        Ok(decode_saved_places(&raw).unwrap_or_else(|err| {
            log::warn!("saved places corrupt, ignoring: {err}");
            Vec::new()
        }))
    }

    pub async fn is_saved(&self, place_id: &str) -> bool {
        self.list().await.iter().any(|id| id == place_id)
    }

    /// Save or unsave `place_id`, returning whether it is saved afterwards.
    ///
    /// # Errors
    ///
    /// Returns `SavedPlacesError::UnknownPlace` for ids not in the catalog and
    /// `SavedPlacesError::Storage` if the list cannot be read or written.
    pub async fn toggle(&self, place_id: &str) -> Result<bool, SavedPlacesError> {
        if catalog::place(place_id).is_none() {
            return Err(SavedPlacesError::UnknownPlace(place_id.to_string()));
        }

        let mut ids = self.try_list().await?;
        let saved = match ids.iter().position(|id| id == place_id) {
            Some(pos) => {
                ids.remove(pos);
                false
            }
            None => {
                ids.push(place_id.to_string());
                true
            }
        };

        let raw = encode_saved_places(&ids)?;
        self.kv.put(keys::SAVED_PLACES, &raw).await?;
        Ok(saved)
    }

    /// Catalog entries for the saved ids. Ids no longer in the catalog are skipped.
    pub async fn saved_places(&self) -> Vec<&'static Place> {
        self.list()
            .await
            .iter()
            .filter_map(|id| catalog::place(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use storage::repository::InMemoryRepository;

    /// In-memory store that can be told to fail its next read.
    #[derive(Clone)]
    struct FlakyReads {
        inner: InMemoryRepository,
        fail_read: Arc<AtomicBool>,
    }

    impl FlakyReads {
        fn new(inner: InMemoryRepository) -> Self {
            Self {
                inner,
                fail_read: Arc::new(AtomicBool::new(false)),
            }
        }

        fn fail_next_read(&self) {
            self.fail_read.store(true, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl KeyValueStore for FlakyReads {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            if self.fail_read.swap(false, Ordering::SeqCst) {
                return Err(StorageError::Connection("database is locked".into()));
            }
            self.inner.get(key).await
        }

        async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.inner.put(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key).await
        }
    }

    fn service() -> (SavedPlacesService, InMemoryRepository) {
        let repo = InMemoryRepository::new();
        (SavedPlacesService::new(Arc::new(repo.clone())), repo)
    }

    #[tokio::test]
    async fn toggle_saves_then_unsaves() {
        let (saved, _) = service();
        assert!(saved.toggle("spalentor").await.unwrap());
        assert!(saved.is_saved("spalentor").await);
        assert!(!saved.toggle("spalentor").await.unwrap());
        assert!(saved.list().await.is_empty());
    }

    #[tokio::test]
    async fn keeps_save_order_and_skips_stale_ids() {
        let (saved, repo) = service();
        repo.put(keys::SAVED_PLACES, r#"["spalentor","gone-now",7]"#)
            .await
            .unwrap();
        saved.toggle("basel-minster").await.unwrap();

        let ids: Vec<&str> = saved
            .saved_places()
            .await
            .into_iter()
            .map(Place::id)
            .collect();
        assert_eq!(ids, vec!["spalentor", "basel-minster"]);
    }

    #[tokio::test]
    async fn unknown_place_is_rejected() {
        let (saved, _) = service();
        let err = saved.toggle("atlantis").await.unwrap_err();
        assert!(matches!(err, SavedPlacesError::UnknownPlace(id) if id == "atlantis"));
    }

    #[tokio::test]
    async fn failed_read_keeps_existing_bookmarks() {
        let repo = InMemoryRepository::new();
        let flaky = FlakyReads::new(repo.clone());
        let saved = SavedPlacesService::new(Arc::new(flaky.clone()));
        saved.toggle("spalentor").await.unwrap();

        flaky.fail_next_read();
        let err = saved.toggle("basel-minster").await.unwrap_err();

        assert!(matches!(
            err,
            SavedPlacesError::Storage(StorageError::Connection(_))
        ));
        assert_eq!(saved.list().await, vec!["spalentor".to_string()]);
    }

    #[tokio::test]
    async fn corrupt_list_reads_empty() {
        let (saved, repo) = service();
        repo.put(keys::SAVED_PLACES, "oops").await.unwrap();
        assert!(saved.list().await.is_empty());
        assert!(saved.toggle("spalentor").await.unwrap());
    }
}
