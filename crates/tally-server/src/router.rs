use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all receipt endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::root_handler))
        .route("/api-docs", get(handler::api_docs_handler))
        .route("/receipts/process", post(handler::process_handler))
        .route("/receipts/:id/points", get(handler::points_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
