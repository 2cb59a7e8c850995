mod common;

use nature_explorer::CatalogError;
use nature_explorer::catalog::{distinct_types, query};
use pretty_assertions::assert_eq;

fn ids(plants: &[&nature_explorer::PlantRecord]) -> Vec<u32> {
    plants.iter().map(|p| p.id).collect()
}

#[test]
fn empty_search_and_type_returns_whole_catalog_in_order() {
    let catalog = common::ten_plant_catalog();
    let all: Vec<&_> = catalog.plants().iter().collect();

    assert_eq!(catalog.query("", ""), all);
}

#[test]
fn search_ignores_case() {
    let catalog = common::ten_plant_catalog();

    assert_eq!(catalog.query("TULSI", ""), catalog.query("tulsi", ""));
    assert_eq!(ids(&catalog.query("TULSI", "")), vec![1]);
}

#[test]
fn type_filter_returns_only_that_type_in_catalog_order() {
    let catalog = common::ten_plant_catalog();

    assert_eq!(ids(&catalog.query("", "Tree")), vec![3, 8]);
    for plant_type in catalog.distinct_types() {
        for plant in catalog.query("", plant_type) {
            assert_eq!(plant.plant_type, plant_type);
        }
    }
}

#[test]
fn search_and_type_filter_combine() {
    let catalog = common::ten_plant_catalog();

    assert_eq!(ids(&catalog.query("ficus", "")), vec![3, 6]);
    assert_eq!(ids(&catalog.query("ficus", "Sacred")), vec![6]);
    assert_eq!(ids(&catalog.query("indica", "Medicinal")), vec![2]);
}

#[test]
fn zero_matches_is_an_empty_result_not_an_error() {
    let catalog = common::ten_plant_catalog();
    assert!(catalog.query("baobab", "").is_empty());
    assert!(catalog.query("", "Cactus").is_empty());
}

#[test]
fn query_works_on_plain_slices() {
    let catalog = common::ten_plant_catalog();
    let plants = catalog.plants();

    assert_eq!(query(plants, "", "Flower"), catalog.query("", "Flower"));
    assert_eq!(
        distinct_types(plants),
        vec!["Medicinal", "Tree", "Aquatic", "Sacred", "Flower", "Aromatic"]
    );
}

#[test]
fn lookup_by_id_distinguishes_not_found() {
    let catalog = common::ten_plant_catalog();

    assert_eq!(catalog.get(4).map(|p| p.name.as_str()), Ok("Indian Lotus"));
    assert_eq!(catalog.get(42).unwrap_err(), CatalogError::NotFound(42));
}
