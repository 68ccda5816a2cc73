use std::fmt;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use crate::account::errors::EmailError;
use crate::account::errors::PasswordRuleError;
use crate::domain::account::models::Account;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::Password;
use crate::domain::account::models::RegisterAccountCommand;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    state
        .account_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::CREATED, account.into()))
}

/// HTTP request body for registration (raw JSON)
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    email: String,
    password: String,
}

// The raw password must never reach a log line.
impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordRuleError),
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterAccountCommand, ParseRegisterRequestError> {
        let email = EmailAddress::new(self.email)?;
        let password = Password::new(self.password)?;
        Ok(RegisterAccountCommand::new(email, password))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for RegisterResponseData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email.as_str().to_string(),
            created_at: account.created_at,
        }
    }
}
