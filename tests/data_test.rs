use std::fs;

use nature_explorer::{
    DataError, Explorer, IntegrityError, load_catalog_from_json, load_question_bank_from_json,
};
use pretty_assertions::assert_eq;

const PLANTS: &str = r#"[
    {
        "id": 1,
        "name": "Tulsi (Holy Basil)",
        "scientificName": "Ocimum sanctum",
        "type": "Medicinal",
        "image": "/assets/plants/tulsi.jpg",
        "habitat": "Homes and temples",
        "description": { "english": "A sacred herb.", "hindi": "एक पवित्र पौधा।" },
        "uses": ["Treats colds", "Reduces stress"]
    }
]"#;

#[test]
fn loads_plants_from_file_preserving_uses_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plants.json");
    fs::write(&path, PLANTS).unwrap();

    let catalog = load_catalog_from_json(&path).unwrap();
    let tulsi = catalog.get(1).unwrap();

    assert_eq!(tulsi.uses, vec!["Treats colds", "Reduces stress"]);
    assert_eq!(tulsi.habitat.as_deref(), Some("Homes and temples"));
}

#[test]
fn question_with_answer_outside_options_fails_at_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quiz.json");
    fs::write(
        &path,
        r#"[{ "id": 5, "question": "Pick one", "options": ["A", "B"], "correctAnswer": "C" }]"#,
    )
    .unwrap();

    match load_question_bank_from_json(&path).unwrap_err() {
        DataError::Integrity { origin, source } => {
            assert!(origin.ends_with("quiz.json"));
            assert_eq!(
                source,
                IntegrityError::AnswerNotInOptions {
                    id: 5,
                    answer: "C".to_string()
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn answer_match_is_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quiz.json");
    fs::write(
        &path,
        r#"[{ "id": 1, "question": "Tree?", "options": ["Banyan", "Neem"], "correctAnswer": "banyan" }]"#,
    )
    .unwrap();

    assert!(matches!(
        load_question_bank_from_json(&path),
        Err(DataError::Integrity { .. })
    ));
}

#[test]
fn explorer_loads_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let plants = dir.path().join("plants.json");
    let quiz = dir.path().join("quiz.json");
    fs::write(&plants, PLANTS).unwrap();
    fs::write(
        &quiz,
        r#"[{ "id": 1, "question": "Sacred herb?", "options": ["Tulsi", "Neem"], "correctAnswer": "Tulsi" }]"#,
    )
    .unwrap();

    let explorer = Explorer::from_json(&plants, &quiz).unwrap();
    assert_eq!(explorer.app().catalog().len(), 1);
}

#[test]
fn missing_file_reports_path() {
    let err = load_catalog_from_json("no/such/plants.json").unwrap_err();
    assert!(err.to_string().contains("no/such/plants.json"));
}
