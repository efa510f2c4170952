//! HTTP layer for the Tally receipt processor.
//!
//! Thin plumbing around the core: routes receipt submissions through the
//! validator into the store, and points lookups through the store into the
//! rule engine.
//!
//! # Endpoints
//!
//! - `POST /receipts/process` — validate and store a receipt, return its id
//! - `GET /receipts/{id}/points` — points for a previously stored receipt
//! - `GET /` — liveness message
//! - `GET /api-docs` — embedded OpenAPI document

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::{PointsResponse, ProcessResponse};
pub use server::TallyServer;
pub use state::AppState;
