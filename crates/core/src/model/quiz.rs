use thiserror::Error;

use crate::model::ids::QuizId;

/// Number of answer options every question carries.
pub const OPTIONS_PER_QUESTION: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("option index {index} is out of range (question has {available} options)")]
    InvalidOption { index: usize, available: usize },

    #[error("quiz attempt already completed")]
    AlreadyCompleted,
}

/// One selectable answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    text: &'static str,
    correct: bool,
}

impl AnswerOption {
    #[must_use]
    pub const fn new(text: &'static str) -> Self {
        Self {
            text,
            correct: false,
        }
    }

    #[must_use]
    pub const fn correct(text: &'static str) -> Self {
        Self {
            text,
            correct: true,
        }
    }

    #[must_use]
    pub fn text(&self) -> &'static str {
        self.text
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.correct
    }
}

/// A question with exactly three options in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    prompt: &'static str,
    options: [AnswerOption; OPTIONS_PER_QUESTION],
}

impl Question {
    #[must_use]
    pub const fn new(prompt: &'static str, options: [AnswerOption; OPTIONS_PER_QUESTION]) -> Self {
        Self { prompt, options }
    }

    #[must_use]
    pub fn prompt(&self) -> &'static str {
        self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption; OPTIONS_PER_QUESTION] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }

    /// Index of the correct option, if the question is well-formed.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        let mut correct = self.options.iter().enumerate().filter(|(_, o)| o.correct);
        match (correct.next(), correct.next()) {
            (Some((idx, _)), None) => Some(idx),
            _ => None,
        }
    }

    /// Option texts prefixed with their display letter (`A) Rhine`).
    pub fn labelled_options(&self) -> impl Iterator<Item = String> + '_ {
        self.options
            .iter()
            .zip(['A', 'B', 'C'])
            .map(|(option, letter)| format!("{letter}) {}", option.text))
    }
}

/// An immutable, ordered quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizPack {
    id: QuizId,
    title: &'static str,
    questions: &'static [Question],
}

impl QuizPack {
    #[must_use]
    pub const fn new(id: QuizId, title: &'static str, questions: &'static [Question]) -> Self {
        Self {
            id,
            title,
            questions,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuizId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&'static Question> {
        self.questions.get(index)
    }

    /// Number of questions; also the score needed to pass.
    #[must_use]
    pub fn total(&self) -> u32 {
        u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }
}
