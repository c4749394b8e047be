//! Vend API
//!
//! Thin HTTP glue over the analytics core: routing, bearer-token
//! extraction, the `{data, error_details}` response envelope, and
//! error-to-status mapping. No business logic lives here.

pub mod auth;
pub mod error;
pub mod response;
pub mod routes;
pub mod state;

pub use error::{ApiError, Result};
pub use response::Envelope;
pub use routes::build_router;
pub use state::AppState;
