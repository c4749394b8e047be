//! API routes

pub mod auth;
pub mod ops;
pub mod sales;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(ops::routes())
        .merge(sales::routes())
        .nest("/auth", auth::routes())
        .with_state(state)
}
