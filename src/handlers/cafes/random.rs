// handlers/cafes/random.rs - GET /random handler

use axum::extract::State;

use crate::api::{ApiResponse, ApiResult};
use crate::database::models::Cafe;
use crate::types::AppState;

/// GET /random - one cafe picked uniformly; 404 envelope when the table is empty
pub async fn get(State(state): State<AppState>) -> ApiResult<Cafe> {
    let cafe = state.cafes.random_one().await?;
    Ok(ApiResponse::new("cafe", cafe))
}
