use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ServerState, rejections::AppError};
use crate::models::PlantRecord;

pub fn routes() -> Router<ServerState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/plants", get(list_plants))
        .route("/api/plants/{id}", get(get_plant))
        .route("/api/plant-types", get(plant_types))
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    message: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        message: "Nature Explorer API is running",
    })
}

#[derive(Debug, Default, Deserialize)]
struct PlantQuery {
    #[serde(default)]
    search: String,
    #[serde(default, rename = "type")]
    plant_type: String,
}

async fn list_plants(
    State(state): State<ServerState>,
    Query(query): Query<PlantQuery>,
) -> Json<Vec<PlantRecord>> {
    let plants: Vec<PlantRecord> = state
        .catalog
        .query(&query.search, &query.plant_type)
        .into_iter()
        .cloned()
        .collect();

    debug!(
        search = %query.search,
        plant_type = %query.plant_type,
        matches = plants.len(),
        "plant query"
    );
    Json(plants)
}

async fn get_plant(
    State(state): State<ServerState>,
    Path(id): Path<u32>,
) -> Result<Json<PlantRecord>, AppError> {
    let plant = state.catalog.get(id)?;
    Ok(Json(plant.clone()))
}

async fn plant_types(State(state): State<ServerState>) -> Json<Vec<String>> {
    Json(
        state
            .catalog
            .distinct_types()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}
