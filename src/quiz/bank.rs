use std::collections::HashSet;

use rand::Rng;

use crate::error::{IntegrityError, QuizError};
use crate::models::QuizQuestion;

use super::session::QuizSession;

const MIN_OPTIONS: usize = 2;
const MAX_OPTIONS: usize = 4;

/// The full, validated set of questions a quiz draws from.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<QuizQuestion>,
}

impl QuestionBank {
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, IntegrityError> {
        validate(&questions)?;
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Start a new session with a fresh random draw.
    pub fn start(&self) -> Result<QuizSession, QuizError> {
        self.start_with_rng(&mut rand::thread_rng())
    }

    pub fn start_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<QuizSession, QuizError> {
        QuizSession::draw(&self.questions, rng)
    }
}

fn validate(questions: &[QuizQuestion]) -> Result<(), IntegrityError> {
    let mut ids = HashSet::with_capacity(questions.len());

    for question in questions {
        if !ids.insert(question.id) {
            return Err(IntegrityError::DuplicateQuestionId(question.id));
        }

        let count = question.options.len();
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
            return Err(IntegrityError::OptionCount {
                id: question.id,
                count,
            });
        }

        let mut seen = HashSet::with_capacity(count);
        for option in &question.options {
            if !seen.insert(option.as_str()) {
                return Err(IntegrityError::DuplicateOption {
                    id: question.id,
                    option: option.clone(),
                });
            }
        }

        if !question.has_option(&question.correct_answer) {
            return Err(IntegrityError::AnswerNotInOptions {
                id: question.id,
                answer: question.correct_answer.clone(),
            });
        }
    }

    Ok(())
}
