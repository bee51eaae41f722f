#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod profile_service;
pub mod progress_service;
pub mod saved_places_service;
pub mod sessions;

pub use app_services::AppServices;
pub use error::{AppServicesError, ProfileServiceError, QuizSessionError, SavedPlacesError};
pub use profile_service::ProfileService;
pub use progress_service::{ProgressService, WriteOutcome};
pub use saved_places_service::SavedPlacesService;
pub use sessions::{
    Certificate, QuizAnswer, QuizLoopService, QuizOutcome, QuizOverviewService, QuizRow,
    StartedQuiz,
};
