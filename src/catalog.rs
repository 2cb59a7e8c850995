//! Plant catalog and the search/filter queries run against it.
//!
//! The catalog is validated once when it is built and never mutated afterwards.
//! Queries borrow from it and keep the catalog's order.

use std::collections::HashSet;

use crate::error::{CatalogError, IntegrityError};
use crate::models::{Language, PlantRecord};

/// Filter any plant slice by search text and plant type.
///
/// A plant matches when `search_term` is a case-insensitive substring of its
/// name or scientific name, and `selected_type` is empty or equal to its type.
pub fn query<'a>(
    plants: &'a [PlantRecord],
    search_term: &str,
    selected_type: &str,
) -> Vec<&'a PlantRecord> {
    let needle = search_term.to_lowercase();

    plants
        .iter()
        .filter(|plant| plant.matches_search(&needle))
        .filter(|plant| selected_type.is_empty() || plant.plant_type == selected_type)
        .collect()
}

/// Plant types in order of first appearance, without duplicates.
pub fn distinct_types(plants: &[PlantRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    plants
        .iter()
        .map(|plant| plant.plant_type.as_str())
        .filter(|plant_type| seen.insert(*plant_type))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    plants: Vec<PlantRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting records that break the data rules.
    pub fn new(plants: Vec<PlantRecord>) -> Result<Self, IntegrityError> {
        validate(&plants)?;
        Ok(Self { plants })
    }

    pub fn plants(&self) -> &[PlantRecord] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn query(&self, search_term: &str, selected_type: &str) -> Vec<&PlantRecord> {
        query(&self.plants, search_term, selected_type)
    }

    pub fn distinct_types(&self) -> Vec<&str> {
        distinct_types(&self.plants)
    }

    pub fn get(&self, id: u32) -> Result<&PlantRecord, CatalogError> {
        self.plants
            .iter()
            .find(|plant| plant.id == id)
            .ok_or(CatalogError::NotFound(id))
    }
}

fn validate(plants: &[PlantRecord]) -> Result<(), IntegrityError> {
    let mut ids = HashSet::with_capacity(plants.len());

    for plant in plants {
        if plant.id == 0 {
            return Err(IntegrityError::ZeroPlantId);
        }
        if !ids.insert(plant.id) {
            return Err(IntegrityError::DuplicatePlantId(plant.id));
        }
        for language in Language::ALL {
            if plant.description(language).trim().is_empty() {
                return Err(IntegrityError::MissingDescription {
                    id: plant.id,
                    language: language.key(),
                });
            }
        }
    }

    Ok(())
}
