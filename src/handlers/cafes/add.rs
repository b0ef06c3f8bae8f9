// handlers/cafes/add.rs - POST /add handler

use axum::{
    extract::{rejection::FormRejection, State},
    Form,
};
use serde_json::Value;

use crate::api::{ApiResponse, ApiResult};
use crate::database::models::CafeForm;
use crate::types::AppState;

/**
 * POST /add - create a cafe from form fields
 *
 * Form fields: name, map_url, img_url, loc, seats, coffee_price and the
 * amenity flags sockets, toilet, wifi, calls. A flag is true when it is sent
 * with any non-empty value.
 *
 * Any failure (unreadable body, duplicate name, missing field, store fault)
 * answers 500 with `{"error": {"Message": "Failed to add the new cafe. Error: ..."}}`.
 */
pub async fn post(
    State(state): State<AppState>,
    form: Result<Form<CafeForm>, FormRejection>,
) -> ApiResult<Value> {
    let Form(form) = form?;
    state.cafes.create(form).await?;
    Ok(ApiResponse::success("response", "Successfully added the new cafe."))
}
