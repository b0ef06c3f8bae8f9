// handlers/system.rs - GET / and GET /health

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::database::DatabaseManager;
use crate::types::AppState;

/// GET / - service index in place of the old HTML landing page
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Cafe API",
        "version": version,
        "description": "Cafes with wifi and power sockets, as a REST API",
        "endpoints": {
            "all": "GET /all",
            "random": "GET /random",
            "search": "GET /search?loc=<location>",
            "add": "POST /add (form: name, map_url, img_url, loc, seats, coffee_price, sockets, toilet, wifi, calls)",
            "update_price": "PATCH /update-price/:cafe_id?new_price=<price>",
            "report_closed": "DELETE /report-closed/:cafe_id?api-key=<key>",
            "health": "GET /health",
        }
    }))
}

/// GET /health - 503 when the database does not answer
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                })),
            )
        }
    }
}
