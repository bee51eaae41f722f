use std::sync::Arc;

use guide_core::model::{Profile, ProfileDraft};
use storage::keys;
use storage::repository::{KeyValueStore, StorageError};

use crate::error::ProfileServiceError;

#[derive(Clone)]
pub struct ProfileService {
    kv: Arc<dyn KeyValueStore>,
}

impl ProfileService {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Load the stored profile (or an empty one if nothing is stored or the
    /// store cannot be read).
    pub async fn get_profile(&self) -> Profile {
        match self.try_get_profile().await {
            Ok(profile) => profile,
            Err(err) => {
                log::warn!("profile unreadable, using empty profile: {err}");
                Profile::default()
            }
        }
    }

    /// # Errors
    ///
    /// Returns `StorageError` if any profile key cannot be read.
    pub async fn try_get_profile(&self) -> Result<Profile, StorageError> {
        let name = self.kv.get(keys::PROFILE_NAME).await?;
        let about = self.kv.get(keys::PROFILE_ABOUT).await?;
        let photo_ref = self.kv.get(keys::PROFILE_PHOTO_URI).await?;
        Ok(Profile::from_persisted(name, about, photo_ref))
    }

    /// Validate and persist a first-run profile.
    ///
    /// # Errors
    ///
    /// Returns `ProfileServiceError` if name or about is blank, validation fails,
    /// or persistence fails.
    pub async fn create(&self, draft: ProfileDraft) -> Result<Profile, ProfileServiceError> {
        let profile = draft.validate_new()?;
        self.save(&profile).await?;
        Ok(profile)
    }

    /// Validate and persist an edited profile.
    ///
    /// # Errors
    ///
    /// Returns `ProfileServiceError` if validation fails or persistence fails.
    pub async fn update(&self, draft: ProfileDraft) -> Result<Profile, ProfileServiceError> {
        let profile = draft.validate()?;
        self.save(&profile).await?;
        Ok(profile)
    }

    /// Remove every profile key.
    ///
    /// # Errors
    ///
    /// Returns `ProfileServiceError::Storage` if the keys cannot be removed.
    pub async fn clear(&self) -> Result<(), ProfileServiceError> {
        self.kv.remove_many(&keys::PROFILE_KEYS).await?;
        Ok(())
    }

    async fn save(&self, profile: &Profile) -> Result<(), StorageError> {
        self.kv.put(keys::PROFILE_NAME, profile.name()).await?;
        self.kv.put(keys::PROFILE_ABOUT, profile.about()).await?;
        match profile.photo_ref() {
            Some(uri) => self.kv.put(keys::PROFILE_PHOTO_URI, uri).await,
            None => self.kv.remove(keys::PROFILE_PHOTO_URI).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guide_core::model::{ProfileError, UNKNOWN_NAME};
    use storage::repository::InMemoryRepository;

    fn service() -> (ProfileService, InMemoryRepository) {
        let repo = InMemoryRepository::new();
        (ProfileService::new(Arc::new(repo.clone())), repo)
    }

    #[tokio::test]
    async fn missing_profile_is_empty() {
        let (profiles, _) = service();
        let profile = profiles.get_profile().await;
        assert!(profile.is_empty());
        assert_eq!(profile.display_name(), UNKNOWN_NAME);
    }

    #[tokio::test]
    async fn create_requires_name_and_about() {
        let (profiles, repo) = service();
        let err = profiles
            .create(ProfileDraft::new("Anna", ""))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ProfileServiceError::Profile(ProfileError::Incomplete)
        ));
        assert_eq!(repo.get(keys::PROFILE_NAME).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_round_trips_and_removes_blank_photo() {
        let (profiles, repo) = service();
        profiles
            .create(ProfileDraft::new("Anna", "Rhine swimmer").with_photo_ref("file:///a.jpg"))
            .await
            .unwrap();
        assert_eq!(
            repo.get(keys::PROFILE_PHOTO_URI).await.unwrap().as_deref(),
            Some("file:///a.jpg")
        );

        let updated = profiles
            .update(ProfileDraft::new("  ", "").with_photo_ref("  "))
            .await
            .unwrap();
        assert_eq!(updated.name(), UNKNOWN_NAME);
        assert_eq!(repo.get(keys::PROFILE_PHOTO_URI).await.unwrap(), None);
        assert_eq!(profiles.get_profile().await, updated);
    }

    #[tokio::test]
    async fn clear_only_touches_profile_keys() {
        let (profiles, repo) = service();
        repo.put(keys::QUIZ_PROGRESS, "{}").await.unwrap();
        profiles
            .create(ProfileDraft::new("Anna", "hi"))
            .await
            .unwrap();

        profiles.clear().await.unwrap();

        assert!(profiles.get_profile().await.is_empty());
        assert!(repo.get(keys::QUIZ_PROGRESS).await.unwrap().is_some());
    }
}
