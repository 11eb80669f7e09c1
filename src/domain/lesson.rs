//! Static lesson and quiz content.

use serde::{Deserialize, Serialize};

use crate::domain::common::{Language, LocalizedText};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: LocalizedText,
    pub options: Vec<LocalizedText>,
    pub correct_answer_index: usize,
}

impl QuizQuestion {
    pub fn new(
        prompt: LocalizedText,
        options: Vec<LocalizedText>,
        correct_answer_index: usize,
    ) -> Self {
        Self {
            prompt,
            options,
            correct_answer_index,
        }
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_answer_index
    }

    pub fn option_in(&self, index: usize, language: Language) -> Option<&str> {
        self.options.get(index).map(|option| option.get(language))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lesson {
    pub id: String,
    pub title: LocalizedText,
    pub body: LocalizedText,
    pub icon: String,
    pub questions: Vec<QuizQuestion>,
}

impl Lesson {
    pub fn new(
        id: impl Into<String>,
        title: LocalizedText,
        body: LocalizedText,
        icon: impl Into<String>,
        questions: Vec<QuizQuestion>,
    ) -> Self {
        Self {
            id: id.into(),
            title,
            body,
            icon: icon.into(),
            questions,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn question(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }
}
