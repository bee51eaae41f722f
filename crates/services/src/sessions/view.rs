use std::sync::Arc;

use guide_core::catalog;
use guide_core::model::{Profile, QuizId};
use guide_core::share;
use guide_core::unlocked;

use crate::profile_service::ProfileService;
use crate::progress_service::ProgressService;

/// Presentation-agnostic row for the quiz list.
///
/// No pre-formatted strings; the caller decides how to render locks and scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRow {
    pub id: QuizId,
    pub title: &'static str,
    pub total: u32,
    pub best_score: u32,
    pub passed: bool,
    pub unlocked: bool,
}

/// Certificate shown once every quiz is passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub holder: String,
    pub message: String,
}

impl Certificate {
    #[must_use]
    pub fn for_profile(profile: &Profile) -> Self {
        Self {
            holder: share::certificate_holder(profile).to_string(),
            message: share::certificate_message(profile),
        }
    }
}

/// Read-only views over progress for the quiz list and certificate screens.
#[derive(Clone)]
pub struct QuizOverviewService {
    progress: Arc<ProgressService>,
    profile: Arc<ProfileService>,
}

impl QuizOverviewService {
    #[must_use]
    pub fn new(progress: Arc<ProgressService>, profile: Arc<ProfileService>) -> Self {
        Self { progress, profile }
    }

    /// One row per quiz, in unlock order.
    pub async fn quiz_rows(&self) -> Vec<QuizRow> {
        let progress = self.progress.read().await;
        let state = unlocked(&progress);
        catalog::quiz_packs()
            .iter()
            .map(|pack| {
                let entry = progress.get(pack.id());
                QuizRow {
                    id: pack.id(),
                    title: pack.title(),
                    total: pack.total(),
                    best_score: entry.best_score(),
                    passed: entry.passed(),
                    unlocked: state.is_unlocked(pack.id()),
                }
            })
            .collect()
    }

    /// The certificate, or `None` while any quiz is still unpassed.
    pub async fn certificate(&self) -> Option<Certificate> {
        if !self.progress.all_passed().await {
            return None;
        }
        let profile = self.profile.get_profile().await;
        Some(Certificate::for_profile(&profile))
    }
}
