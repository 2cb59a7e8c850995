//! A single quiz attempt.
//!
//! A session walks through its drawn questions one at a time. Each question is
//! first `Unanswered`, becomes `Answered` once an option is selected, and the
//! session becomes `Finished` when advancing past the last question. The first
//! selection for a question is final.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::QuizError;
use crate::models::QuizQuestion;

/// Upper bound on the number of questions drawn for one session.
pub const QUESTION_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unanswered,
    Answered,
    Finished,
}

/// Outcome of selecting an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Correct,
    Incorrect,
    /// The question was already answered; nothing changed.
    Ignored,
}

/// Outcome of advancing past an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    NextQuestion,
    Finished,
}

/// How an option should be presented for the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Neutral,
    SelectedCorrect,
    SelectedIncorrect,
    /// Not selected, but revealed as the correct answer after answering.
    RevealedCorrect,
}

/// Result message band shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTier {
    Perfect,
    WellDone,
    KeepLearning,
}

impl ResultTier {
    pub fn message(self) -> &'static str {
        match self {
            ResultTier::Perfect => "Perfect score! You're a plant expert! 🌿👑",
            ResultTier::WellDone => "Well done! You know your plants! 🌱",
            ResultTier::KeepLearning => "Keep learning about these amazing plants! 🍃",
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current_index: usize,
    score: usize,
    selected_option: Option<String>,
    answered: bool,
    finished: bool,
}

impl QuizSession {
    /// Draw `min(QUESTION_COUNT, bank.len())` questions uniformly at random
    /// without replacement.
    ///
    /// Uses a partial Fisher-Yates shuffle, so only the drawn prefix is
    /// shuffled.
    pub fn draw<R: Rng + ?Sized>(bank: &[QuizQuestion], rng: &mut R) -> Result<Self, QuizError> {
        if bank.is_empty() {
            return Err(QuizError::EmptyBank);
        }

        let mut pool: Vec<&QuizQuestion> = bank.iter().collect();
        let count = QUESTION_COUNT.min(pool.len());
        let (drawn, _) = pool.partial_shuffle(rng, count);
        let questions: Vec<QuizQuestion> = drawn.iter().map(|q| (*q).clone()).collect();

        debug!(
            drawn = questions.len(),
            bank = bank.len(),
            "started quiz session"
        );

        Ok(Self {
            questions,
            current_index: 0,
            score: 0,
            selected_option: None,
            answered: false,
            finished: false,
        })
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Number of questions in this session. Never zero.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based position of the current question.
    pub fn question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current_index]
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected_option(&self) -> Option<&str> {
        self.selected_option.as_deref()
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn phase(&self) -> Phase {
        if self.finished {
            Phase::Finished
        } else if self.answered {
            Phase::Answered
        } else {
            Phase::Unanswered
        }
    }

    /// Answer the current question. Only the first selection counts.
    pub fn select(&mut self, option: &str) -> Result<Selection, QuizError> {
        if self.finished {
            return Err(QuizError::SessionFinished);
        }
        if self.answered {
            return Ok(Selection::Ignored);
        }

        let question = &self.questions[self.current_index];
        if !question.has_option(option) {
            return Err(QuizError::UnknownOption(option.to_string()));
        }

        let correct = question.is_correct(option);
        self.selected_option = Some(option.to_string());
        self.answered = true;
        if correct {
            self.score += 1;
        }

        debug!(
            question = question.id,
            correct,
            score = self.score,
            "answered question"
        );

        Ok(if correct {
            Selection::Correct
        } else {
            Selection::Incorrect
        })
    }

    /// Move past the current, answered question.
    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        if self.finished {
            return Err(QuizError::SessionFinished);
        }
        if !self.answered {
            return Err(QuizError::NotAnswered);
        }

        if self.is_last_question() {
            self.finished = true;
            debug!(score = self.score, total = self.len(), "finished quiz session");
            return Ok(Advance::Finished);
        }

        self.current_index += 1;
        self.selected_option = None;
        self.answered = false;
        Ok(Advance::NextQuestion)
    }

    pub fn option_state(&self, option: &str) -> OptionState {
        let question = self.current_question();
        let selected = self.selected_option.as_deref() == Some(option);

        match (selected, question.is_correct(option)) {
            (true, true) => OptionState::SelectedCorrect,
            (true, false) => OptionState::SelectedIncorrect,
            (false, true) if self.answered => OptionState::RevealedCorrect,
            _ => OptionState::Neutral,
        }
    }

    /// Score as a whole percentage, rounded half up.
    pub fn percentage(&self) -> u32 {
        let total = self.questions.len();
        ((200 * self.score + total) / (2 * total)) as u32
    }

    /// Fraction of the session reached, counting the current question.
    pub fn progress(&self) -> f64 {
        self.question_number() as f64 / self.len() as f64
    }

    pub fn tier(&self) -> ResultTier {
        let total = self.questions.len();
        if self.score == total {
            ResultTier::Perfect
        } else if self.score * 2 >= total {
            ResultTier::WellDone
        } else {
            ResultTier::KeepLearning
        }
    }
}
