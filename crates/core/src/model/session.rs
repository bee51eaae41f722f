use crate::model::{Question, QuizError, QuizId, QuizPack};

/// Where an attempt currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for an answer to the question at `index`.
    Answering { index: usize },
    /// Every question has been answered.
    Completed { score: u32, total: u32 },
}

/// Final result of a completed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub quiz_id: QuizId,
    pub score: u32,
    pub total: u32,
    /// Every question answered correctly. Vacuously true for an empty pack.
    pub perfect_pass: bool,
}

/// What a single answer did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Advanced { next_index: usize, correct: bool },
    Completed { result: QuizResult, correct: bool },
}

/// Snapshot for rendering a question screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// Questions answered so far; also the index of the current question while answering.
    pub answered: usize,
    pub score: u32,
    pub total: u32,
    pub is_complete: bool,
}

/// In-memory state for one attempt at a quiz pack.
///
/// Nothing here is persisted; dropping the session abandons the attempt.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pack: QuizPack,
    state: SessionState,
    score: u32,
}

impl QuizSession {
    /// Start at the first question with a score of zero. An empty pack is
    /// complete immediately.
    #[must_use]
    pub fn start(pack: QuizPack) -> Self {
        let state = if pack.questions().is_empty() {
            SessionState::Completed { score: 0, total: 0 }
        } else {
            SessionState::Answering { index: 0 }
        };
        Self {
            pack,
            state,
            score: 0,
        }
    }

    #[must_use]
    pub fn quiz_id(&self) -> QuizId {
        self.pack.id()
    }

    #[must_use]
    pub fn pack(&self) -> &QuizPack {
        &self.pack
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Correct answers so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.pack.total()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.state, SessionState::Completed { .. })
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&'static Question> {
        match self.state {
            SessionState::Answering { index } => self.pack.question(index),
            SessionState::Completed { .. } => None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let answered = match self.state {
            SessionState::Answering { index } => index,
            SessionState::Completed { .. } => self.pack.questions().len(),
        };
        SessionProgress {
            answered,
            score: self.score,
            total: self.total(),
            is_complete: self.is_complete(),
        }
    }

    /// The final result, once the last question has been answered.
    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        match self.state {
            SessionState::Completed { score, total } => Some(QuizResult {
                quiz_id: self.quiz_id(),
                score,
                total,
                perfect_pass: score == total,
            }),
            SessionState::Answering { .. } => None,
        }
    }

    /// Answer the current question with the option at `option_index`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadyCompleted` once the attempt is over and
    /// `QuizError::InvalidOption` for an index past the last option. Neither
    /// changes the session.
    pub fn answer(&mut self, option_index: usize) -> Result<Step, QuizError> {
        let SessionState::Answering { index } = self.state else {
            return Err(QuizError::AlreadyCompleted);
        };
        let question = self
            .pack
            .question(index)
            .ok_or(QuizError::AlreadyCompleted)?;
        let option = question
            .option(option_index)
            .ok_or(QuizError::InvalidOption {
                index: option_index,
                available: question.options().len(),
            })?;

        let correct = option.is_correct();
        let next_score = self.score + u32::from(correct);
        self.score = next_score;

        if index + 1 >= self.pack.questions().len() {
            let total = self.total();
            self.state = SessionState::Completed {
                score: next_score,
                total,
            };
            let result = QuizResult {
                quiz_id: self.quiz_id(),
                score: next_score,
                total,
                perfect_pass: next_score == total,
            };
            return Ok(Step::Completed { result, correct });
        }

        self.state = SessionState::Answering { index: index + 1 };
        Ok(Step::Advanced {
            next_index: index + 1,
            correct,
        })
    }
}
