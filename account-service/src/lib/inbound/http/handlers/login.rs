use std::fmt;

use auth::SessionToken;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Exchange email and password for a bearer token.
///
/// Responds with `{access_token, token_type: "bearer"}`; every credential
/// defect (unknown email included) maps to the same 401.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<SessionToken>, ApiError> {
    state
        .account_service
        .login(&body.email, &body.password)
        .await
        .map_err(ApiError::from)
        .map(|session| ApiSuccess::new(StatusCode::OK, session))
}

/// HTTP request body for login (raw JSON)
///
/// No length rule on the password here: verification truncates beyond the
/// hasher's byte window, so an over-long login attempt for an account
/// registered at the limit still succeeds.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
