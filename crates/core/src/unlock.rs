//! Which quizzes can be played, derived from a progress snapshot.

use crate::model::{ProgressMap, QuizId};

/// Lock state for every quiz. Never stored; recompute it from progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockState {
    pub quiz1: bool,
    pub quiz2: bool,
    pub quiz3: bool,
}

impl UnlockState {
    #[must_use]
    pub fn is_unlocked(&self, id: QuizId) -> bool {
        match id {
            QuizId::Quiz1 => self.quiz1,
            QuizId::Quiz2 => self.quiz2,
            QuizId::Quiz3 => self.quiz3,
        }
    }
}

/// Quiz 1 is always open; each later quiz opens once its predecessor is passed.
#[must_use]
pub fn unlocked(progress: &ProgressMap) -> UnlockState {
    UnlockState {
        quiz1: true,
        quiz2: progress.get(QuizId::Quiz1).passed(),
        quiz3: progress.get(QuizId::Quiz2).passed(),
    }
}

/// Certificate gate.
#[must_use]
pub fn all_passed(progress: &ProgressMap) -> bool {
    progress.all_passed()
}
