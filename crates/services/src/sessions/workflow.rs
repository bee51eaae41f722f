use std::sync::Arc;

use guide_core::catalog;
use guide_core::model::{ProgressMap, QuizId, QuizResult, QuizSession, SessionProgress, Step};
use guide_core::{UnlockState, all_passed, unlocked};

use crate::error::QuizSessionError;
use crate::progress_service::{ProgressService, WriteOutcome};

/// Everything the result screen needs once an attempt completes.
#[derive(Debug)]
pub struct QuizOutcome {
    pub result: QuizResult,
    /// Progress as re-read after the commit.
    pub progress: ProgressMap,
    pub unlocked: UnlockState,
    pub all_passed: bool,
    pub write: WriteOutcome,
}

/// Result of answering a single question.
#[derive(Debug)]
pub struct QuizAnswer {
    pub correct: bool,
    pub progress: SessionProgress,
    /// Present only when this answer finished the attempt.
    pub outcome: Option<QuizOutcome>,
}

/// A freshly started attempt. An empty pack completes on start, so its
/// outcome is already committed.
#[derive(Debug)]
pub struct StartedQuiz {
    pub session: QuizSession,
    pub outcome: Option<QuizOutcome>,
}

/// Orchestrates quiz attempts and commits their results.
#[derive(Clone)]
pub struct QuizLoopService {
    progress: Arc<ProgressService>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(progress: Arc<ProgressService>) -> Self {
        Self { progress }
    }

    /// Start a new attempt at `quiz_id`.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::Locked` if the previous quiz has not been passed.
    pub async fn start(&self, quiz_id: QuizId) -> Result<StartedQuiz, QuizSessionError> {
        let state = self.progress.unlocked().await;
        if !state.is_unlocked(quiz_id) {
            return Err(QuizSessionError::Locked(quiz_id));
        }

        let session = QuizSession::start(*catalog::quiz_pack(quiz_id));
        log::debug!("started {quiz_id} with {} questions", session.total());

        let outcome = match session.result() {
            Some(result) => Some(self.finish(result).await),
            None => None,
        };
        Ok(StartedQuiz { session, outcome })
    }

    /// Answer the current question. The final answer commits the result before
    /// returning, so the outcome reflects persisted progress.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::Quiz` for an out-of-range option or a finished
    /// session; the session is left unchanged.
    pub async fn answer(
        &self,
        session: &mut QuizSession,
        option_index: usize,
    ) -> Result<QuizAnswer, QuizSessionError> {
        let step = session.answer(option_index)?;
        let (correct, outcome) = match step {
            Step::Advanced { correct, .. } => (correct, None),
            Step::Completed { result, correct } => (correct, Some(self.finish(result).await)),
        };
        Ok(QuizAnswer {
            correct,
            progress: session.progress(),
            outcome,
        })
    }

    async fn finish(&self, result: QuizResult) -> QuizOutcome {
        let write = self
            .progress
            .commit(result.quiz_id, result.score, result.perfect_pass)
            .await;
        let progress = self.progress.read().await;
        log::info!(
            "{} finished {}/{} (perfect: {})",
            result.quiz_id,
            result.score,
            result.total,
            result.perfect_pass
        );
        QuizOutcome {
            result,
            unlocked: unlocked(&progress),
            all_passed: all_passed(&progress),
            progress,
            write,
        }
    }
}
