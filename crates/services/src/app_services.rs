use std::sync::Arc;

use storage::repository::Storage;

use crate::error::{AppServicesError, ProfileServiceError};
use crate::profile_service::ProfileService;
use crate::progress_service::{ProgressService, WriteOutcome};
use crate::saved_places_service::SavedPlacesService;
use crate::sessions::{QuizLoopService, QuizOverviewService};

/// Assembles app-facing services over a single key-value store.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
    quiz_loop: Arc<QuizLoopService>,
    overview: Arc<QuizOverviewService>,
    profile: Arc<ProfileService>,
    saved_places: Arc<SavedPlacesService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the database cannot be opened or migrated.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage))
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_storage(&Storage::in_memory())
    }

    #[must_use]
    pub fn from_storage(storage: &Storage) -> Self {
        let progress = Arc::new(ProgressService::new(Arc::clone(&storage.kv)));
        let profile = Arc::new(ProfileService::new(Arc::clone(&storage.kv)));
        let saved_places = Arc::new(SavedPlacesService::new(Arc::clone(&storage.kv)));
        let quiz_loop = Arc::new(QuizLoopService::new(Arc::clone(&progress)));
        let overview = Arc::new(QuizOverviewService::new(
            Arc::clone(&progress),
            Arc::clone(&profile),
        ));

        Self {
            progress,
            quiz_loop,
            overview,
            profile,
            saved_places,
        }
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn overview(&self) -> Arc<QuizOverviewService> {
        Arc::clone(&self.overview)
    }

    #[must_use]
    pub fn profile(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profile)
    }

    #[must_use]
    pub fn saved_places(&self) -> Arc<SavedPlacesService> {
        Arc::clone(&self.saved_places)
    }

    /// Clear the profile and all quiz progress. Saved places are kept.
    ///
    /// # Errors
    ///
    /// Returns `ProfileServiceError` if the profile keys cannot be removed.
    pub async fn reset_account(&self) -> Result<WriteOutcome, ProfileServiceError> {
        self.profile.clear().await?;
        Ok(self.progress.clear().await)
    }
}
