//! Read-only lesson content with embedded quizzes.

mod builtin;

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::domain::Lesson;
use crate::errors::{InsightError, Result};

static BUILTIN: Lazy<LessonCatalog> = Lazy::new(|| LessonCatalog {
    lessons: builtin::lessons(),
});

/// Lessons shipped with the engine, built on first access.
pub fn builtin_catalog() -> &'static LessonCatalog {
    &BUILTIN
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
}

impl LessonCatalog {
    /// Builds a catalog after checking every lesson can back a quiz attempt.
    pub fn new(lessons: Vec<Lesson>) -> Result<Self> {
        let mut seen = HashSet::new();
        for lesson in &lessons {
            if !seen.insert(lesson.id.as_str()) {
                return Err(invalid(format!("duplicate lesson id '{}'", lesson.id)));
            }
            if lesson.questions.is_empty() {
                return Err(invalid(format!("lesson '{}' has no questions", lesson.id)));
            }
            for (index, question) in lesson.questions.iter().enumerate() {
                if question.options.is_empty() {
                    return Err(invalid(format!(
                        "lesson '{}' question {index} has no options",
                        lesson.id
                    )));
                }
                if question.correct_answer_index >= question.option_count() {
                    return Err(invalid(format!(
                        "lesson '{}' question {index} marks option {} correct out of {}",
                        lesson.id,
                        question.correct_answer_index,
                        question.option_count()
                    )));
                }
            }
        }
        Ok(Self { lessons })
    }

    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id == id)
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

fn invalid(reason: String) -> InsightError {
    tracing::warn!(%reason, "rejected lesson catalog");
    InsightError::InvalidCatalog(reason)
}
