mod plant;
mod question;

pub use plant::{Description, Language, PlantRecord};
pub use question::QuizQuestion;

/// Screen the terminal explorer is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Home,
    Detail,
    Quiz,
    Result,
    About,
}
