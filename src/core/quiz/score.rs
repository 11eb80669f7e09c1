use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Lesson;

/// How one question was answered in a completed attempt.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionReview {
    pub question_index: usize,
    pub selected: Option<usize>,
    pub correct: usize,
}

impl QuestionReview {
    pub fn is_correct(&self) -> bool {
        self.selected == Some(self.correct)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizScore {
    pub lesson_id: String,
    pub correct_count: usize,
    pub question_count: usize,
    /// Rounded to the nearest whole percent, always within `0..=100`.
    pub percentage: u8,
    pub pass_mark: u8,
    reviews: Vec<QuestionReview>,
}

impl QuizScore {
    /// Scores `answers` against the lesson. Unanswered questions count as incorrect.
    pub(crate) fn grade(lesson: &Lesson, answers: &BTreeMap<usize, usize>, pass_mark: u8) -> Self {
        let reviews: Vec<QuestionReview> = lesson
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionReview {
                question_index: index,
                selected: answers.get(&index).copied(),
                correct: question.correct_answer_index,
            })
            .collect();
        let correct_count = reviews.iter().filter(|review| review.is_correct()).count();
        let question_count = reviews.len();
        let percentage = if question_count == 0 {
            0
        } else {
            (correct_count as f64 / question_count as f64 * 100.0).round() as u8
        };
        Self {
            lesson_id: lesson.id.clone(),
            correct_count,
            question_count,
            percentage,
            pass_mark,
            reviews,
        }
    }

    pub fn with_pass_mark(mut self, pass_mark: u8) -> Self {
        self.pass_mark = pass_mark;
        self
    }

    pub fn passed(&self) -> bool {
        self.percentage >= self.pass_mark
    }

    pub fn review(&self) -> &[QuestionReview] {
        &self.reviews
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::builtin_catalog;

    fn answers(pairs: &[(usize, usize)]) -> BTreeMap<usize, usize> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn two_of_three_rounds_up() {
        let lesson = builtin_catalog().lesson("3").unwrap();
        let score = QuizScore::grade(lesson, &answers(&[(0, 2), (1, 1), (2, 0)]), 70);
        assert_eq!(score.correct_count, 2);
        assert_eq!(score.percentage, 67);
        assert!(!score.passed());
        assert!(score.clone().with_pass_mark(60).passed());
    }

    #[test]
    fn unanswered_questions_are_reviewed_as_wrong() {
        let lesson = builtin_catalog().lesson("1").unwrap();
        let score = QuizScore::grade(lesson, &answers(&[(1, 1)]), 70);
        assert_eq!(score.percentage, 33);
        let review = score.review();
        assert_eq!(review.len(), 3);
        assert_eq!(review[0].selected, None);
        assert!(!review[0].is_correct());
        assert!(review[1].is_correct());
    }
}
