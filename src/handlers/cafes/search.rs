// handlers/cafes/search.rs - GET /search?loc= handler

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::api::ApiResponse;
use crate::error::{ApiError, MSG_LOCATION_NOT_FOUND};
use crate::types::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub loc: Option<String>,
}

/// GET /search - cafes at a location, matched after title-casing `loc`.
/// No match answers 200 with the not-found envelope.
pub async fn get(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };

    match state.cafes.find_by_location(query.loc.as_deref()).await {
        Ok(cafes) if cafes.is_empty() => {
            let body = ApiError::not_found(MSG_LOCATION_NOT_FOUND).to_json();
            (StatusCode::OK, Json(body)).into_response()
        }
        Ok(cafes) => ApiResponse::new("cafes", cafes).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
