use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::account::models::Account;
use crate::inbound::http::router::AppState;

/// Resolve the account behind the presented bearer token.
///
/// 401 for any token defect, 404 when the token is sound but its subject
/// no longer exists.
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<AccountData>, ApiError> {
    let token = extract_bearer_token(&headers)?;

    state
        .account_service
        .resolve_identity(token)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountData {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email.as_str().to_string(),
            created_at: account.created_at,
        }
    }
}
