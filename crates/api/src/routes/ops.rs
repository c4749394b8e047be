//! Operations routes
//!
//! Health check for monitoring. No authentication.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use crate::error::Result;
use crate::state::AppState;

/// Operations routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Health check: 204 when the snapshot is readable
///
/// GET /health
async fn health(State(state): State<AppState>) -> Result<StatusCode> {
    state.store.frame()?;
    Ok(StatusCode::NO_CONTENT)
}
