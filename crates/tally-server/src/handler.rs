use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use tally_rules::{is_valid_receipt, score};
use tally_types::{Receipt, ReceiptId};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Embedded OpenAPI document served at `/api-docs`.
const OPENAPI_JSON: &str = include_str!("../assets/openapi.json");

/// Response body for `POST /receipts/process`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

/// Response body for `GET /receipts/{id}/points`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// `POST /receipts/process` — validate and store a receipt.
///
/// An unparseable body and a shape-invalid receipt are indistinguishable to
/// the caller: both fold into [`ServerError::Validation`].
pub async fn process_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ServerResult<Json<ProcessResponse>> {
    let Ok(Json(payload)) = payload else {
        tracing::debug!("rejected unparseable request body");
        return Err(ServerError::Validation);
    };
    if !is_valid_receipt(&payload) {
        tracing::debug!("rejected invalid receipt");
        return Err(ServerError::Validation);
    }

    // Validation just admitted this shape, so deserialization only fails if
    // the two ever drift apart; surface that as the same validation failure.
    let receipt: Receipt =
        serde_json::from_value(payload).map_err(|_| ServerError::Validation)?;

    let id = state.store.put(receipt)?;
    tracing::info!(%id, "receipt accepted");
    Ok(Json(ProcessResponse { id }))
}

/// `GET /receipts/{id}/points` — score a stored receipt.
///
/// An identifier that does not parse as one the store could ever have minted
/// is reported exactly like a miss.
pub async fn points_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<Json<PointsResponse>> {
    let id = ReceiptId::parse(&id).map_err(|_| ServerError::NotFound)?;
    let receipt = state.store.get(&id)?.ok_or(ServerError::NotFound)?;

    // The validator gated this receipt on the way in, so scoring cannot
    // fail here; `?` still guards against a store handed unvalidated data.
    let points = score(&receipt)?;
    tracing::info!(%id, points, "points computed");
    Ok(Json(PointsResponse { points }))
}

/// `GET /` — liveness message.
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Receipt Processor API is running" }))
}

/// `GET /api-docs` — the OpenAPI description of this service.
pub async fn api_docs_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], OPENAPI_JSON)
}
