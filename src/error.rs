// HTTP API Error Types
use axum::{
    extract::rejection::{FormRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::services::CafeError;

pub const MSG_LOCATION_NOT_FOUND: &str = "Sorry, we don't have cafe at that location.";
pub const MSG_ID_NOT_FOUND: &str = "Sorry a cafe with that id was not found in the database.";
pub const MSG_EMPTY_COLLECTION: &str = "Sorry, there are no cafes in the database yet.";
pub const MSG_NOT_AUTHORISED: &str =
    "Sorry, that's not allowed. Make sure you have the correct api_key.";

/// HTTP API error. Serializes as `{"error": {<label>: <message>}}`.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 403 Forbidden
    Forbidden(String),

    // 404 Not Found
    NotFound(String),

    // 404 Not Found, random pick on an empty store
    EmptyCollection(String),

    // 500, `/add` clients have always received 500 for a rejected cafe
    Conflict(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::EmptyCollection(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Key used inside the `error` object
    pub fn label(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "Bad Request",
            ApiError::Forbidden(_) => "Not Authorised",
            ApiError::NotFound(_) | ApiError::EmptyCollection(_) => "Not Found",
            ApiError::Conflict(_) | ApiError::InternalServerError(_) => "Message",
        }
    }

    /// Get client-facing error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Forbidden(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::EmptyCollection(msg) => msg,
            ApiError::Conflict(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({
            "error": {
                self.label(): self.message()
            }
        })
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }
}

impl From<CafeError> for ApiError {
    fn from(err: CafeError) -> Self {
        match err {
            CafeError::BadRequest(param) => {
                ApiError::bad_request(format!("Missing required query parameter '{}'.", param))
            }
            CafeError::Conflict(msg) => {
                ApiError::conflict(format!("Failed to add the new cafe. Error: {}", msg))
            }
            CafeError::NotFound(_) => ApiError::not_found(MSG_ID_NOT_FOUND),
            CafeError::Forbidden => ApiError::forbidden(MSG_NOT_AUTHORISED),
            CafeError::EmptyCollection => ApiError::EmptyCollection(MSG_EMPTY_COLLECTION.to_string()),
            CafeError::Database(e) => {
                tracing::error!("Cafe store error: {}", e);
                ApiError::internal_server_error("Database error occurred")
            }
        }
    }
}

// Extractor rejections get the same envelope as every other error.
// A path segment that is not an integer id names no cafe.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected path: {}", rejection.body_text());
        ApiError::not_found(MSG_ID_NOT_FOUND)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

// `/add` reports every failure, an unreadable body included, as a failed add
impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::from(CafeError::Conflict(rejection.body_text()))
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_uses_label_as_key() {
        let err = ApiError::forbidden(MSG_NOT_AUTHORISED);
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            err.to_json(),
            json!({ "error": { "Not Authorised": MSG_NOT_AUTHORISED } })
        );
    }

    #[test]
    fn conflict_embeds_store_message() {
        let err: ApiError = CafeError::Conflict("UNIQUE constraint failed: cafe.name".into()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_json()["error"]["Message"],
            "Failed to add the new cafe. Error: UNIQUE constraint failed: cafe.name"
        );
    }

    #[test]
    fn not_found_and_empty_collection_are_404() {
        let not_found: ApiError = CafeError::NotFound(3).into();
        let empty: ApiError = CafeError::EmptyCollection.into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(empty.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_json()["error"]["Not Found"], MSG_ID_NOT_FOUND);
    }

    #[test]
    fn bad_request_names_parameter() {
        let err: ApiError = CafeError::BadRequest("loc").into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.message().contains("'loc'"));
    }

    #[test]
    fn query_rejection_is_bad_request_envelope() {
        use axum::extract::Query;
        use axum::http::Uri;

        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Params {
            loc: Option<String>,
        }

        let uri: Uri = "/search?loc=paris&loc=london".parse().unwrap();
        let rejection = Query::<Params>::try_from_uri(&uri).unwrap_err();
        let err = ApiError::from(rejection);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_json()["error"]["Bad Request"].is_string());
    }
}
