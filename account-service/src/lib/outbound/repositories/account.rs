use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::account::errors::AccountError;
use crate::account::ports::AccountRepository;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::EmailAddress;

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (id, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(account.id.0)
        .bind(account.email.as_str())
        .bind(&account.password_hash)
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                // The unique index serializes the duplicate check with the
                // insert, upholding email uniqueness under concurrency.
                if db_err.is_unique_violation() {
                    return AccountError::EmailAlreadyExists(account.email.as_str().to_string());
                }
            }
            AccountError::DatabaseError(e.to_string())
        })?;

        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, created_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        row.map(to_account).transpose()
    }
}

fn to_account(row: PgRow) -> Result<Account, AccountError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;
    let email: String = row
        .try_get("email")
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;
    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

    Ok(Account {
        id: AccountId(id),
        email: EmailAddress::new(email)?,
        password_hash,
        created_at,
    })
}
