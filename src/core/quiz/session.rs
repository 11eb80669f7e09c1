use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{QuizError, QuizScore, QuizStatus};
use crate::config::model::DEFAULT_QUIZ_PASS_MARK;
use crate::core::catalog::LessonCatalog;
use crate::domain::{Lesson, QuizQuestion};

/// Mutable state of the attempt currently in flight.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizAttempt {
    pub lesson_id: Option<String>,
    pub current_question_index: usize,
    /// Sparse: question index to chosen option index.
    pub selected_answers: BTreeMap<usize, usize>,
    pub status: QuizStatus,
    /// Answers fixed when the last question is passed; scoring reads only this.
    pub final_answers: Option<BTreeMap<usize, usize>>,
}

pub struct QuizSession<'c> {
    catalog: &'c LessonCatalog,
    lesson: Option<&'c Lesson>,
    attempt: QuizAttempt,
    pass_mark: u8,
}

impl<'c> QuizSession<'c> {
    pub fn new(catalog: &'c LessonCatalog) -> Self {
        Self {
            catalog,
            lesson: None,
            attempt: QuizAttempt::default(),
            pass_mark: DEFAULT_QUIZ_PASS_MARK,
        }
    }

    pub fn with_pass_mark(mut self, pass_mark: u8) -> Self {
        self.pass_mark = pass_mark;
        self
    }

    pub fn status(&self) -> QuizStatus {
        self.attempt.status
    }

    pub fn attempt(&self) -> &QuizAttempt {
        &self.attempt
    }

    pub fn lesson(&self) -> Option<&'c Lesson> {
        self.lesson
    }

    pub fn current_index(&self) -> usize {
        self.attempt.current_question_index
    }

    /// The question being shown, only while the attempt is in progress.
    pub fn current_question(&self) -> Option<&'c QuizQuestion> {
        if self.attempt.status != QuizStatus::InProgress {
            return None;
        }
        self.lesson?.question(self.attempt.current_question_index)
    }

    pub fn selected_answer(&self, question: usize) -> Option<usize> {
        self.attempt.selected_answers.get(&question).copied()
    }

    pub fn is_current_answered(&self) -> bool {
        self.selected_answer(self.attempt.current_question_index).is_some()
    }

    pub fn is_last_question(&self) -> bool {
        self.lesson.is_some_and(|lesson| {
            self.attempt.current_question_index + 1 >= lesson.question_count()
        })
    }

    pub fn start(&mut self, lesson_id: &str) -> Result<(), QuizError> {
        self.expect_status(QuizStatus::NotStarted, "start")?;
        let lesson = self
            .catalog
            .lesson(lesson_id)
            .ok_or_else(|| QuizError::LessonNotFound(lesson_id.to_string()))?;
        self.lesson = Some(lesson);
        self.attempt = QuizAttempt {
            lesson_id: Some(lesson.id.clone()),
            status: QuizStatus::InProgress,
            ..QuizAttempt::default()
        };
        tracing::debug!(lesson = %lesson.id, "quiz started");
        Ok(())
    }

    /// Records `choice` for `question`; a later selection for the same question replaces it.
    pub fn select_answer(&mut self, question: usize, choice: usize) -> Result<(), QuizError> {
        let lesson = self.active_lesson(QuizStatus::InProgress, "select an answer")?;
        let in_range = lesson
            .question(question)
            .is_some_and(|q| choice < q.option_count());
        if !in_range {
            tracing::warn!(question, choice, "rejected quiz answer");
            return Err(QuizError::InvalidChoice { question, choice });
        }
        self.attempt.selected_answers.insert(question, choice);
        tracing::debug!(question, choice, "answer selected");
        Ok(())
    }

    /// Moves to the next question, or completes the attempt on the last one.
    pub fn advance(&mut self) -> Result<QuizStatus, QuizError> {
        let lesson = self.active_lesson(QuizStatus::InProgress, "advance")?;
        if self.attempt.current_question_index + 1 < lesson.question_count() {
            self.attempt.current_question_index += 1;
            tracing::debug!(index = self.attempt.current_question_index, "quiz advanced");
        } else {
            self.attempt.final_answers = Some(self.attempt.selected_answers.clone());
            self.attempt.status = QuizStatus::Completed;
            tracing::info!(
                lesson = %lesson.id,
                answered = self.attempt.selected_answers.len(),
                "quiz completed"
            );
        }
        Ok(self.attempt.status)
    }

    pub fn score(&self) -> Result<QuizScore, QuizError> {
        let lesson = self.active_lesson(QuizStatus::Completed, "score")?;
        let empty = BTreeMap::new();
        let answers = self.attempt.final_answers.as_ref().unwrap_or(&empty);
        Ok(QuizScore::grade(lesson, answers, self.pass_mark))
    }

    pub fn retake(&mut self) -> Result<(), QuizError> {
        let lesson = self.active_lesson(QuizStatus::Completed, "retake")?;
        self.attempt = QuizAttempt {
            lesson_id: Some(lesson.id.clone()),
            status: QuizStatus::InProgress,
            ..QuizAttempt::default()
        };
        tracing::debug!(lesson = %lesson.id, "quiz retaken");
        Ok(())
    }

    /// Leaves the lesson, discarding the attempt.
    pub fn abandon(&mut self) {
        if let Some(lesson) = self.lesson.take() {
            tracing::debug!(lesson = %lesson.id, status = %self.attempt.status, "quiz abandoned");
        }
        self.attempt = QuizAttempt::default();
    }

    fn expect_status(&self, expected: QuizStatus, operation: &'static str) -> Result<(), QuizError> {
        if self.attempt.status == expected {
            Ok(())
        } else {
            Err(QuizError::InvalidState {
                operation,
                state: self.attempt.status,
            })
        }
    }

    fn active_lesson(
        &self,
        expected: QuizStatus,
        operation: &'static str,
    ) -> Result<&'c Lesson, QuizError> {
        self.expect_status(expected, operation)?;
        self.lesson.ok_or(QuizError::InvalidState {
            operation,
            state: self.attempt.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocalizedText;

    fn catalog() -> LessonCatalog {
        let question = |correct| {
            QuizQuestion::new(
                LocalizedText::same("?"),
                (0..4).map(|i| LocalizedText::same(i.to_string())).collect(),
                correct,
            )
        };
        LessonCatalog::new(vec![Lesson::new(
            "b",
            LocalizedText::same("Three questions"),
            LocalizedText::same(""),
            "📘",
            vec![question(1), question(1), question(2)],
        )])
        .unwrap()
    }

    fn answer_all(session: &mut QuizSession<'_>, answers: &[usize]) {
        for (index, choice) in answers.iter().enumerate() {
            session.select_answer(index, *choice).unwrap();
            session.advance().unwrap();
        }
    }

    #[test]
    fn all_correct_scores_full_marks() {
        let catalog = catalog();
        let mut session = QuizSession::new(&catalog);
        session.start("b").unwrap();
        answer_all(&mut session, &[1, 1, 2]);

        assert_eq!(session.status(), QuizStatus::Completed);
        let score = session.score().unwrap();
        assert_eq!(score.percentage, 100);
        assert!(score.passed());
    }

    #[test]
    fn out_of_range_question_is_invalid_choice() {
        let catalog = catalog();
        let mut session = QuizSession::new(&catalog);
        session.start("b").unwrap();

        assert_eq!(
            session.select_answer(5, 2),
            Err(QuizError::InvalidChoice {
                question: 5,
                choice: 2
            })
        );
        assert_eq!(
            session.select_answer(0, 4),
            Err(QuizError::InvalidChoice {
                question: 0,
                choice: 4
            })
        );
        assert!(session.attempt().selected_answers.is_empty());
    }

    #[test]
    fn last_selection_wins_without_moving() {
        let catalog = catalog();
        let mut session = QuizSession::new(&catalog);
        session.start("b").unwrap();
        session.select_answer(0, 3).unwrap();
        session.select_answer(0, 1).unwrap();

        assert_eq!(session.selected_answer(0), Some(1));
        assert_eq!(session.current_index(), 0);
        assert!(session.is_current_answered());
    }

    #[test]
    fn operations_in_wrong_state_are_rejected() {
        let catalog = catalog();
        let mut session = QuizSession::new(&catalog);

        assert!(matches!(
            session.advance(),
            Err(QuizError::InvalidState {
                operation: "advance",
                state: QuizStatus::NotStarted
            })
        ));
        assert!(session.select_answer(0, 0).is_err());
        assert!(session.retake().is_err());

        session.start("b").unwrap();
        assert!(matches!(
            session.score(),
            Err(QuizError::InvalidState {
                state: QuizStatus::InProgress,
                ..
            })
        ));
        assert!(session.start("b").is_err());

        answer_all(&mut session, &[0, 0, 0]);
        assert!(session.select_answer(0, 1).is_err());
        assert!(session.advance().is_err());
    }

    #[test]
    fn unanswered_questions_count_as_wrong() {
        let catalog = catalog();
        let mut session = QuizSession::new(&catalog);
        session.start("b").unwrap();
        session.select_answer(0, 1).unwrap();
        for _ in 0..3 {
            session.advance().unwrap();
        }

        let score = session.score().unwrap();
        assert_eq!(score.correct_count, 1);
        assert_eq!(score.percentage, 33);
    }

    #[test]
    fn retake_resets_the_attempt() {
        let catalog = catalog();
        let mut session = QuizSession::new(&catalog);
        session.start("b").unwrap();
        answer_all(&mut session, &[1, 1, 2]);
        session.retake().unwrap();

        assert_eq!(session.status(), QuizStatus::InProgress);
        assert_eq!(session.current_index(), 0);
        assert!(session.attempt().selected_answers.is_empty());
        assert!(session.attempt().final_answers.is_none());
        assert!(session.score().is_err());
    }

    #[test]
    fn abandon_returns_to_not_started() {
        let catalog = catalog();
        let mut session = QuizSession::new(&catalog);
        session.start("b").unwrap();
        session.select_answer(0, 1).unwrap();
        session.abandon();

        assert_eq!(session.status(), QuizStatus::NotStarted);
        assert!(session.lesson().is_none());
        assert!(session.current_question().is_none());
        session.start("b").unwrap();
        assert_eq!(session.selected_answer(0), None);
    }

    #[test]
    fn unknown_lesson_is_reported() {
        let catalog = catalog();
        let mut session = QuizSession::new(&catalog);
        assert_eq!(
            session.start("nope"),
            Err(QuizError::LessonNotFound("nope".to_string()))
        );
        assert_eq!(session.status(), QuizStatus::NotStarted);
    }

    #[test]
    fn last_question_is_flagged() {
        let catalog = catalog();
        let mut session = QuizSession::new(&catalog);
        session.start("b").unwrap();
        assert!(!session.is_last_question());
        session.advance().unwrap();
        session.advance().unwrap();
        assert!(session.is_last_question());
        assert_eq!(session.advance().unwrap(), QuizStatus::Completed);
    }
}
