mod loader;

pub use loader::{
    bundled_catalog, bundled_question_bank, catalog_from_str, load_catalog_from_json,
    load_question_bank_from_json, question_bank_from_str,
};
