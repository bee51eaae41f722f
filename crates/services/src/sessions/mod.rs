mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizSessionError;
pub use view::{Certificate, QuizOverviewService, QuizRow};
pub use workflow::{QuizAnswer, QuizLoopService, QuizOutcome, StartedQuiz};
