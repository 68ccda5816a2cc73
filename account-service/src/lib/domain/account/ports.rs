use async_trait::async_trait;
use auth::SessionToken;

use crate::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::RegisterAccountCommand;

/// Port for account domain service operations.
///
/// One method per external call site: registration, login, and bearer-token
/// identity resolution. No hashing or token logic leaks past this boundary.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account with validated credentials.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email and password
    ///
    /// # Returns
    /// Created account entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: RegisterAccountCommand) -> Result<Account, AccountError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Arguments
    /// * `email` - Login identifier as presented by the caller
    /// * `password` - Plaintext password (verification truncates beyond
    ///   the hasher's byte window, so over-long input is accepted here)
    ///
    /// # Returns
    /// Issued session token with `token_type: "bearer"`
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or password mismatch
    /// * `DatabaseError` - Store operation failed
    async fn login(&self, email: &str, password: &str) -> Result<SessionToken, AccountError>;

    /// Resolve the account a presented bearer token belongs to.
    ///
    /// # Arguments
    /// * `token` - Encoded token string from the Authorization header
    ///
    /// # Returns
    /// The account the token's subject resolves to
    ///
    /// # Errors
    /// * `InvalidToken` - Signature, structure, expiry, or subject defect
    /// * `NotFound` - Token valid but subject no longer exists
    /// * `DatabaseError` - Store operation failed
    async fn resolve_identity(&self, token: &str) -> Result<Account, AccountError>;
}

/// Persistence operations for the account aggregate.
///
/// The store must make the duplicate-email check and the insert behave as
/// if serialized per email; the Postgres adapter relies on a unique
/// constraint for this.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// Retrieve an account by email address.
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;
}
