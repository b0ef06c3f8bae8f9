// handlers/cafes/report_closed.rs - DELETE /report-closed/:cafe_id handler

use axum::extract::{
    rejection::{PathRejection, QueryRejection},
    Path, Query, State,
};
use serde::Deserialize;
use serde_json::Value;

use crate::api::{ApiResponse, ApiResult};
use crate::types::AppState;

#[derive(Debug, Deserialize)]
pub struct ReportClosedQuery {
    #[serde(rename = "api-key")]
    pub api_key: Option<String>,
}

/// DELETE /report-closed/:cafe_id?api-key= - remove a cafe that has closed.
/// 403 on a wrong or missing key, checked before the id is looked up.
pub async fn delete(
    State(state): State<AppState>,
    cafe_id: Result<Path<i64>, PathRejection>,
    query: Result<Query<ReportClosedQuery>, QueryRejection>,
) -> ApiResult<Value> {
    let Query(query) = query?;
    let Path(cafe_id) = cafe_id?;
    state.cafes.delete(cafe_id, query.api_key.as_deref()).await?;
    Ok(ApiResponse::success("success", "Successfully deleted the cafe."))
}
