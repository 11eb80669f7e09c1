//! One quiz attempt at a time over the lesson catalog.
//!
//! `NotStarted -> InProgress -> Completed`, with `retake` looping back to
//! `InProgress` and `abandon` discarding the attempt from any state.

pub mod error;
pub mod score;
pub mod session;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use error::QuizError;
pub use score::{QuestionReview, QuizScore};
pub use session::{QuizAttempt, QuizSession};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuizStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl fmt::Display for QuizStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuizStatus::NotStarted => "not started",
            QuizStatus::InProgress => "in progress",
            QuizStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}
