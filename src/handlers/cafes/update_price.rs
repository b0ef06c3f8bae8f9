// handlers/cafes/update_price.rs - PATCH /update-price/:cafe_id handler

use axum::extract::{
    rejection::{PathRejection, QueryRejection},
    Path, Query, State,
};
use serde::Deserialize;
use serde_json::Value;

use crate::api::{ApiResponse, ApiResult};
use crate::types::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdatePriceQuery {
    pub new_price: Option<String>,
}

/// PATCH /update-price/:cafe_id?new_price= - replace the coffee price
pub async fn patch(
    State(state): State<AppState>,
    cafe_id: Result<Path<i64>, PathRejection>,
    query: Result<Query<UpdatePriceQuery>, QueryRejection>,
) -> ApiResult<Value> {
    let Path(cafe_id) = cafe_id?;
    let Query(query) = query?;
    state
        .cafes
        .update_price(cafe_id, query.new_price.as_deref())
        .await?;
    Ok(ApiResponse::success("response", "Successfully updated the price."))
}
