// handlers/cafes/all.rs - GET /all handler

use axum::extract::State;

use crate::api::{ApiResponse, ApiResult};
use crate::database::models::Cafe;
use crate::types::AppState;

/// GET /all - every cafe in insertion order
pub async fn get(State(state): State<AppState>) -> ApiResult<Vec<Cafe>> {
    let cafes = state.cafes.list_all().await?;
    Ok(ApiResponse::new("cafes", cafes))
}
