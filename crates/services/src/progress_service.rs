use std::sync::Arc;

use guide_core::model::{ProgressEntry, ProgressMap, QuizId};
use guide_core::{UnlockState, unlocked};
use storage::keys;
use storage::records::{decode_progress, encode_progress};
use storage::repository::{KeyValueStore, StorageError};

/// Result of a write the caller is not required to act on.
///
/// Storage failures never block the user; they are reported here (and logged)
/// so the caller can surface diagnostics if it wants to.
#[derive(Debug)]
#[must_use]
pub enum WriteOutcome {
    Persisted,
    Dropped(StorageError),
}

impl WriteOutcome {
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        matches!(self, WriteOutcome::Persisted)
    }

    fn from_result(result: Result<(), StorageError>, what: &str) -> Self {
        match result {
            Ok(()) => WriteOutcome::Persisted,
            Err(err) => {
                log::warn!("dropping {what}: {err}");
                WriteOutcome::Dropped(err)
            }
        }
    }
}

/// Sole owner of persisted quiz progress.
#[derive(Clone)]
pub struct ProgressService {
    kv: Arc<dyn KeyValueStore>,
}

impl ProgressService {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Load progress, substituting the default map for a missing or unreadable record.
    pub async fn read(&self) -> ProgressMap {
        match self.try_read().await {
            Ok(map) => map,
            Err(err) => {
                log::warn!("quiz progress unreadable, using defaults: {err}");
                ProgressMap::default()
            }
        }
    }

    /// Load progress, surfacing read and decode failures. A missing record is
    /// the default map.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store fails or the record is malformed.
    pub async fn try_read(&self) -> Result<ProgressMap, StorageError> {
        match self.kv.get(keys::QUIZ_PROGRESS).await? {
            Some(raw) => decode_progress(&raw),
            None => Ok(ProgressMap::default()),
        }
    }

    /// Merge a completed attempt into stored progress.
    ///
    /// Only the entry for `quiz_id` changes: its best score becomes the max of the
    /// stored and new score, and `passed` is OR-ed with `perfect_pass`. A corrupt
    /// record is replaced; if the store cannot be read, nothing is written.
    pub async fn commit(&self, quiz_id: QuizId, score: u32, perfect_pass: bool) -> WriteOutcome {
        let mut map = match self.try_read().await {
            Ok(map) => map,
            Err(StorageError::Serialization(err)) => {
                log::warn!("replacing corrupt quiz progress: {err}");
                ProgressMap::default()
            }
            Err(err) => return WriteOutcome::from_result(Err(err), "quiz progress write"),
        };
        let entry = map.record_attempt(quiz_id, score, perfect_pass);
        log::debug!(
            "commit {quiz_id}: score={score} perfect={perfect_pass} -> best={} passed={}",
            entry.best_score(),
            entry.passed()
        );

        let result = match encode_progress(&map) {
            Ok(raw) => self.kv.put(keys::QUIZ_PROGRESS, &raw).await,
            Err(err) => Err(err),
        };
        WriteOutcome::from_result(result, "quiz progress write")
    }

    /// Progress for a single quiz.
    pub async fn entry(&self, quiz_id: QuizId) -> ProgressEntry {
        self.read().await.get(quiz_id)
    }

    pub async fn unlocked(&self) -> UnlockState {
        unlocked(&self.read().await)
    }

    pub async fn all_passed(&self) -> bool {
        self.read().await.all_passed()
    }

    /// Forget all quiz progress.
    pub async fn clear(&self) -> WriteOutcome {
        let result = self.kv.remove(keys::QUIZ_PROGRESS).await;
        WriteOutcome::from_result(result, "quiz progress reset")
    }
}
