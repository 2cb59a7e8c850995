//! Error types for loading data, querying the catalog and running quizzes.

use std::path::PathBuf;

use thiserror::Error;

/// A record in the data files breaks one of the catalog or question bank rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("plant id must be positive")]
    ZeroPlantId,

    #[error("duplicate plant id {0}")]
    DuplicatePlantId(u32),

    #[error("plant {id} is missing its {language} description")]
    MissingDescription { id: u32, language: &'static str },

    #[error("duplicate question id {0}")]
    DuplicateQuestionId(u32),

    #[error("question {id} has {count} options, expected between 2 and 4")]
    OptionCount { id: u32, count: usize },

    #[error("question {id} lists option {option:?} more than once")]
    DuplicateOption { id: u32, option: String },

    #[error("question {id} has correct answer {answer:?} which is not one of its options")]
    AnswerNotInOptions { id: u32, answer: String },
}

/// Failure to read, parse or validate a data file.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid data in {origin}: {source}")]
    Integrity {
        origin: String,
        #[source]
        source: IntegrityError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("plant {0} not found")]
    NotFound(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("cannot start a quiz with an empty question bank")]
    EmptyBank,

    #[error("the current question has not been answered yet")]
    NotAnswered,

    #[error("{0:?} is not an option of the current question")]
    UnknownOption(String),

    #[error("the quiz session has already finished")]
    SessionFinished,
}

/// Umbrella error for the explorer as a whole.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
