//! Authentication endpoints
//!
//! Account creation and sign-in are delegated to the configured provider;
//! these handlers only shape the envelope.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use vend_auth::SessionTokens;

use crate::error::Result;
use crate::response::Envelope;
use crate::state::AppState;

/// Auth routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

/// Credentials payload for signup and login
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Signup confirmation payload
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    /// Human-readable confirmation
    pub msg: String,
    /// Provider-assigned user id
    pub user_id: String,
}

/// Create an account
///
/// POST /auth/signup
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<Envelope<SignupResponse>>> {
    let user = state.auth.sign_up(&req.email, &req.password).await?;

    tracing::info!(user_id = %user.id, "account created");

    Ok(Json(Envelope::data(SignupResponse {
        msg: "user created".to_string(),
        user_id: user.id,
    })))
}

/// Exchange credentials for a bearer token
///
/// POST /auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<Envelope<SessionTokens>>> {
    let tokens = state.auth.sign_in(&req.email, &req.password).await?;

    Ok(Json(Envelope::data(tokens)))
}
