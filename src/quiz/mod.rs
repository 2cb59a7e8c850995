mod bank;
mod session;

pub use bank::QuestionBank;
pub use session::{Advance, OptionState, Phase, QUESTION_COUNT, QuizSession, ResultTier, Selection};
