use thiserror::Error;

use super::QuizStatus;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("Lesson not found: {0}")]
    LessonNotFound(String),

    #[error("Invalid choice {choice} for question {question}")]
    InvalidChoice { question: usize, choice: usize },

    #[error("Cannot {operation} while quiz is {state}")]
    InvalidState {
        operation: &'static str,
        state: QuizStatus,
    },
}
