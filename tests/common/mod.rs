#![allow(dead_code)]

use nature_explorer::{Catalog, Description, PlantRecord, QuestionBank, QuizQuestion};

pub fn plant(id: u32, name: &str, scientific_name: &str, plant_type: &str) -> PlantRecord {
    PlantRecord {
        id,
        name: name.to_string(),
        scientific_name: scientific_name.to_string(),
        plant_type: plant_type.to_string(),
        description: Description {
            english: format!("About {name}."),
            hindi: format!("{name} के बारे में।"),
        },
        uses: vec!["Shade".to_string(), "Medicine".to_string()],
        image: format!("/assets/plants/{id}.jpg"),
        short_description: None,
        native_region: None,
        habitat: None,
    }
}

/// Ten plants, two of them of type "Tree" (ids 3 and 8).
pub fn ten_plant_catalog() -> Catalog {
    Catalog::new(vec![
        plant(1, "Tulsi (Holy Basil)", "Ocimum sanctum", "Medicinal"),
        plant(2, "Neem", "Azadirachta indica", "Medicinal"),
        plant(3, "Banyan", "Ficus benghalensis", "Tree"),
        plant(4, "Indian Lotus", "Nelumbo nucifera", "Aquatic"),
        plant(5, "Ashwagandha", "Withania somnifera", "Medicinal"),
        plant(6, "Peepal", "Ficus religiosa", "Sacred"),
        plant(7, "Marigold", "Tagetes erecta", "Flower"),
        plant(8, "Mango", "Mangifera indica", "Tree"),
        plant(9, "Sandalwood", "Santalum album", "Aromatic"),
        plant(10, "Jasmine", "Jasminum sambac", "Flower"),
    ])
    .expect("fixture catalog is valid")
}

pub fn question(id: u32, options: &[&str], correct_answer: &str) -> QuizQuestion {
    QuizQuestion {
        id,
        question: format!("Question {id}?"),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer: correct_answer.to_string(),
    }
}

/// A bank of `size` questions, each with options A/B/C and answer B.
pub fn bank(size: u32) -> QuestionBank {
    QuestionBank::new(
        (1..=size)
            .map(|id| question(id, &["A", "B", "C"], "B"))
            .collect(),
    )
    .expect("fixture bank is valid")
}
