use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// The submitted payload is not a well-formed receipt. Covers
    /// unparseable request bodies too; both surface the same way.
    #[error("receipt failed validation")]
    Validation,

    /// No receipt stored under the requested identifier.
    #[error("receipt not found")]
    NotFound,

    #[error("store error: {0}")]
    Store(#[from] tally_store::StoreError),

    #[error("rule engine error: {0}")]
    Rules(#[from] tally_rules::RuleError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        // Client-facing messages stay generic: no field-level validation
        // detail, no schema internals.
        let (status, message) = match &self {
            Self::Validation => (StatusCode::BAD_REQUEST, "Please verify input."),
            Self::NotFound => (StatusCode::NOT_FOUND, "No receipt found for that ID."),
            _ => {
                tracing::error!(error = %self, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
