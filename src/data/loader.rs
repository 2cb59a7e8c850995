use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::catalog::Catalog;
use crate::error::DataError;
use crate::quiz::QuestionBank;

const BUNDLED_PLANTS: &str = include_str!("../../data/plants.json");
const BUNDLED_QUIZ: &str = include_str!("../../data/quiz.json");

/// Catalog compiled into the binary from `data/plants.json`.
pub fn bundled_catalog() -> Result<Catalog, DataError> {
    catalog_from_str(BUNDLED_PLANTS, "bundled plants.json")
}

/// Question bank compiled into the binary from `data/quiz.json`.
pub fn bundled_question_bank() -> Result<QuestionBank, DataError> {
    question_bank_from_str(BUNDLED_QUIZ, "bundled quiz.json")
}

pub fn load_catalog_from_json<P: AsRef<Path>>(path: P) -> Result<Catalog, DataError> {
    let path = path.as_ref();
    let json_content = read(path)?;
    catalog_from_str(&json_content, &path.display().to_string())
}

pub fn load_question_bank_from_json<P: AsRef<Path>>(path: P) -> Result<QuestionBank, DataError> {
    let path = path.as_ref();
    let json_content = read(path)?;
    question_bank_from_str(&json_content, &path.display().to_string())
}

/// Parse and validate a plant catalog. `origin` names the source in errors.
pub fn catalog_from_str(json: &str, origin: &str) -> Result<Catalog, DataError> {
    let plants = parse(json, origin)?;
    let catalog = Catalog::new(plants).map_err(|source| DataError::Integrity {
        origin: origin.to_string(),
        source,
    })?;

    info!(origin, plants = catalog.len(), "loaded plant catalog");
    Ok(catalog)
}

/// Parse and validate a question bank. `origin` names the source in errors.
pub fn question_bank_from_str(json: &str, origin: &str) -> Result<QuestionBank, DataError> {
    let questions = parse(json, origin)?;
    let bank = QuestionBank::new(questions).map_err(|source| DataError::Integrity {
        origin: origin.to_string(),
        source,
    })?;

    info!(origin, questions = bank.len(), "loaded question bank");
    Ok(bank)
}

fn read(path: &Path) -> Result<String, DataError> {
    fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse<T: DeserializeOwned>(json: &str, origin: &str) -> Result<Vec<T>, DataError> {
    serde_json::from_str(json).map_err(|source| DataError::Parse {
        origin: origin.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IntegrityError;

    #[test]
    fn test_bundled_data_is_valid() {
        let catalog = bundled_catalog().unwrap();
        let bank = bundled_question_bank().unwrap();

        assert!(!catalog.is_empty());
        assert!(bank.len() >= 10);
    }

    #[test]
    fn test_missing_hindi_description_is_integrity_error() {
        let json = r#"[{
            "id": 1,
            "name": "Neem",
            "scientificName": "Azadirachta indica",
            "type": "Medicinal",
            "image": "neem.jpg",
            "description": { "english": "Bitter leaves." }
        }]"#;

        let err = catalog_from_str(json, "test").unwrap_err();
        match err {
            DataError::Integrity { source, .. } => assert_eq!(
                source,
                IntegrityError::MissingDescription {
                    id: 1,
                    language: "hindi"
                }
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = question_bank_from_str("[{\"id\": 1", "broken.json").unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_catalog_from_json("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
