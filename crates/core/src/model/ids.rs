use std::fmt;
use std::str::FromStr;

/// Identifier of one of the three quiz packs.
///
/// The derived ordering is the unlock order: `Quiz1 < Quiz2 < Quiz3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuizId {
    Quiz1,
    Quiz2,
    Quiz3,
}

impl QuizId {
    /// All quiz ids in unlock order.
    pub const ALL: [QuizId; 3] = [QuizId::Quiz1, QuizId::Quiz2, QuizId::Quiz3];

    /// Stable string key used in persisted records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuizId::Quiz1 => "quiz1",
            QuizId::Quiz2 => "quiz2",
            QuizId::Quiz3 => "quiz3",
        }
    }

    /// Zero-based position in the unlock order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            QuizId::Quiz1 => 0,
            QuizId::Quiz2 => 1,
            QuizId::Quiz3 => 2,
        }
    }

    /// The quiz that must be passed before this one unlocks.
    #[must_use]
    pub fn previous(self) -> Option<QuizId> {
        match self {
            QuizId::Quiz1 => None,
            QuizId::Quiz2 => Some(QuizId::Quiz1),
            QuizId::Quiz3 => Some(QuizId::Quiz2),
        }
    }

    #[must_use]
    pub fn next(self) -> Option<QuizId> {
        match self {
            QuizId::Quiz1 => Some(QuizId::Quiz2),
            QuizId::Quiz2 => Some(QuizId::Quiz3),
            QuizId::Quiz3 => None,
        }
    }
}

impl fmt::Display for QuizId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error type for parsing a `QuizId` from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseQuizIdError {
    raw: String,
}

impl ParseQuizIdError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ParseQuizIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown quiz id: {}", self.raw)
    }
}

impl std::error::Error for ParseQuizIdError {}

impl FromStr for QuizId {
    type Err = ParseQuizIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "quiz1" => Ok(QuizId::Quiz1),
            "quiz2" => Ok(QuizId::Quiz2),
            "quiz3" => Ok(QuizId::Quiz3),
            other => Err(ParseQuizIdError {
                raw: other.to_string(),
            }),
        }
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
