mod ids;
mod place;
mod profile;
mod progress;
mod quiz;
mod session;

pub use ids::{ParseQuizIdError, QuizId};
pub use place::{BASEL_CENTER, Coordinates, Place};
pub use profile::{
    MAX_ABOUT_CHARS, MAX_NAME_CHARS, Profile, ProfileDraft, ProfileError, UNKNOWN_NAME,
};
pub use progress::{ProgressEntry, ProgressMap};
pub use quiz::{AnswerOption, OPTIONS_PER_QUESTION, Question, QuizError, QuizPack};
pub use session::{QuizResult, QuizSession, SessionProgress, SessionState, Step};
