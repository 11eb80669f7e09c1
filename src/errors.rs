use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

use crate::config::ConfigError;
use crate::core::quiz::QuizError;

/// Unified error type surfaced to the presentation layer.
///
/// Every variant is recoverable: callers re-render with a message instead of
/// aborting the session.
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("Invalid profile data: {0}")]
    InvalidProfileData(String),
    #[error("Invalid expense data: {0}")]
    InvalidExpenseData(String),
    #[error("Onboarding has not been completed")]
    ProfileMissing,
    #[error("Expense not found: {0}")]
    ExpenseNotFound(Uuid),
    #[error("Lesson not found: {0}")]
    LessonNotFound(String),
    #[error("Invalid lesson catalog: {0}")]
    InvalidCatalog(String),
    #[error("Invalid choice {choice} for question {question}")]
    InvalidChoice { question: usize, choice: usize },
    #[error("Cannot {operation} while quiz is {state}")]
    InvalidState {
        operation: &'static str,
        state: String,
    },
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = StdResult<T, InsightError>;

impl From<QuizError> for InsightError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::LessonNotFound(id) => InsightError::LessonNotFound(id),
            QuizError::InvalidChoice { question, choice } => {
                InsightError::InvalidChoice { question, choice }
            }
            QuizError::InvalidState { operation, state } => InsightError::InvalidState {
                operation,
                state: state.to_string(),
            },
        }
    }
}
