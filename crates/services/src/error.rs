//! Shared error types for the services crate.

use thiserror::Error;

use guide_core::model::{ProfileError, QuizError, QuizId};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizSessionError {
    #[error("{0} is locked until the previous quiz is passed")]
    Locked(QuizId),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Errors emitted by `ProfileService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProfileServiceError {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `SavedPlacesService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SavedPlacesError {
    #[error("unknown place: {0}")]
    UnknownPlace(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
