//! Request handlers. Validation happens in the extractors; handlers only map
//! store results onto response bodies.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::data::dog::{Dog, DogBreed, DogCreate, DogUpdate};
use crate::data::post::PostRecord;
use crate::server::error::{ApiError, AppJson, AppPath, AppQuery};
use crate::server::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DogFilter {
    pub kind: Option<DogBreed>,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse { message: "ping" })
}

pub async fn create_post(State(state): State<AppState>) -> Result<Json<PostRecord>, ApiError> {
    Ok(Json(state.posts.create()?))
}

pub async fn list_dogs(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<DogFilter>,
) -> Result<Json<Vec<Dog>>, ApiError> {
    Ok(Json(state.dogs.list(filter.kind)?))
}

pub async fn get_dog(
    State(state): State<AppState>,
    AppPath(pk): AppPath<i64>,
) -> Result<Json<Dog>, ApiError> {
    Ok(Json(state.dogs.get(pk)?))
}

pub async fn create_dog(
    State(state): State<AppState>,
    AppJson(payload): AppJson<DogCreate>,
) -> Result<Json<Dog>, ApiError> {
    Ok(Json(state.dogs.create(payload)?))
}

pub async fn update_dog(
    State(state): State<AppState>,
    AppPath(pk): AppPath<i64>,
    AppJson(payload): AppJson<DogUpdate>,
) -> Result<Json<Dog>, ApiError> {
    Ok(Json(state.dogs.update(pk, payload)?))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}
