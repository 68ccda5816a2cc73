use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::SessionToken;
use chrono::Utc;

use crate::account::errors::AccountError;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::RegisterAccountCommand;

/// Domain service implementation for account operations.
///
/// Concrete implementation of AccountServicePort with dependency injection.
/// Holds the store behind its port and the authenticator; the clock is read
/// here, at the edge of the domain, so the auth primitives stay pure.
pub struct AccountService<R>
where
    R: AccountRepository,
{
    repository: Arc<R>,
    authenticator: Authenticator,
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `authenticator` - Credential and token primitives, configured once
    ///   at process start
    pub fn new(repository: Arc<R>, authenticator: Authenticator) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<R> AccountServicePort for AccountService<R>
where
    R: AccountRepository,
{
    async fn register(&self, command: RegisterAccountCommand) -> Result<Account, AccountError> {
        let password_hash = self.authenticator.hash_password(command.password.as_str())?;

        let account = Account {
            id: AccountId::new(),
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.repository.create(account).await?;

        tracing::info!(account_id = %created.id, "Account registered");

        Ok(created)
    }

    async fn login(&self, email: &str, password: &str) -> Result<SessionToken, AccountError> {
        // Unknown email and wrong password must be indistinguishable.
        let account = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        self.authenticator
            .authenticate(
                password,
                &account.password_hash,
                account.email.as_str(),
                Utc::now(),
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => AccountError::InvalidCredentials,
                AuthenticationError::Password(err) => AccountError::Password(err),
                AuthenticationError::Token(err) => {
                    AccountError::Unknown(format!("Token issuance failed: {}", err))
                }
            })
    }

    async fn resolve_identity(&self, token: &str) -> Result<Account, AccountError> {
        let subject = self
            .authenticator
            .validate_token(token, Utc::now())
            .map_err(|_| AccountError::InvalidToken)?;

        self.repository
            .find_by_email(&subject)
            .await?
            .ok_or(AccountError::NotFound(subject))
    }
}

#[cfg(test)]
mod tests {
    use auth::PasswordHasher;
    use chrono::Duration;
    use mockall::mock;

    use super::*;
    use crate::domain::account::models::EmailAddress;
    use crate::domain::account::models::Password;

    const SECRET: &[u8] = b"test-secret-key-for-token-signing-32b";

    mock! {
        pub TestAccountRepository {}

        #[async_trait]
        impl AccountRepository for TestAccountRepository {
            async fn create(&self, account: Account) -> Result<Account, AccountError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;
        }
    }

    fn service(repository: MockTestAccountRepository) -> AccountService<MockTestAccountRepository> {
        AccountService::new(
            Arc::new(repository),
            Authenticator::new(SECRET, Duration::minutes(30)),
        )
    }

    fn stored_account(email: &str, password: &str) -> Account {
        Account {
            id: AccountId::new(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: PasswordHasher::with_cost(4).hash(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_create()
            .withf(|account| {
                account.email.as_str() == "a@x.com" && account.password_hash.starts_with("$2")
            })
            .times(1)
            .returning(Ok);

        let service = service(repository);

        let command = RegisterAccountCommand {
            email: EmailAddress::new("a@x.com".to_string()).unwrap(),
            password: Password::new("hunter2".to_string()).unwrap(),
        };

        let account = service.register(command).await.unwrap();
        assert_eq!(account.email.as_str(), "a@x.com");
        // Password is hashed with real bcrypt; raw value never stored.
        assert!(account.password_hash.starts_with("$2"));
        assert_ne!(account.password_hash, "hunter2");
    }

    #[tokio::test]
    async fn test_register_hashes_are_salted() {
        let mut repository = MockTestAccountRepository::new();
        repository.expect_create().times(2).returning(Ok);

        let service = service(repository);

        let first = service
            .register(RegisterAccountCommand {
                email: EmailAddress::new("a@x.com".to_string()).unwrap(),
                password: Password::new("hunter2".to_string()).unwrap(),
            })
            .await
            .unwrap();
        let second = service
            .register(RegisterAccountCommand {
                email: EmailAddress::new("b@x.com".to_string()).unwrap(),
                password: Password::new("hunter2".to_string()).unwrap(),
            })
            .await
            .unwrap();

        assert_ne!(first.password_hash, second.password_hash);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestAccountRepository::new();

        repository.expect_create().times(1).returning(|account| {
            Err(AccountError::EmailAlreadyExists(
                account.email.as_str().to_string(),
            ))
        });

        let service = service(repository);

        let command = RegisterAccountCommand {
            email: EmailAddress::new("a@x.com".to_string()).unwrap(),
            password: Password::new("hunter2".to_string()).unwrap(),
        };

        let result = service.register(command).await;
        assert!(matches!(
            result.unwrap_err(),
            AccountError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut repository = MockTestAccountRepository::new();

        let account = stored_account("a@x.com", "hunter2");
        repository
            .expect_find_by_email()
            .withf(|email| email == "a@x.com")
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));

        let service = service(repository);

        let session = service.login("a@x.com", "hunter2").await.unwrap();
        assert!(!session.access_token.is_empty());
        assert_eq!(session.token_type, "bearer");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut repository = MockTestAccountRepository::new();

        let account = stored_account("a@x.com", "hunter2");
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));

        let service = service(repository);

        let result = service.login("a@x.com", "wrongpass").await;
        assert!(matches!(
            result.unwrap_err(),
            AccountError::InvalidCredentials
        ));
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_same_rejection() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(repository);

        // Missing account and bad password surface identically.
        let result = service.login("nobody@x.com", "hunter2").await;
        assert!(matches!(
            result.unwrap_err(),
            AccountError::InvalidCredentials
        ));
    }

    #[tokio::test]
    async fn test_resolve_identity_success() {
        let mut repository = MockTestAccountRepository::new();

        let account = stored_account("a@x.com", "hunter2");
        let login_account = account.clone();
        repository
            .expect_find_by_email()
            .withf(|email| email == "a@x.com")
            .times(2)
            .returning(move |_| Ok(Some(login_account.clone())));

        let service = service(repository);

        let session = service.login("a@x.com", "hunter2").await.unwrap();
        let resolved = service.resolve_identity(&session.access_token).await.unwrap();
        assert_eq!(resolved.email.as_str(), "a@x.com");
        assert_eq!(resolved.id, account.id);
    }

    #[tokio::test]
    async fn test_resolve_identity_garbage_token() {
        let repository = MockTestAccountRepository::new();
        let service = service(repository);

        let result = service.resolve_identity("garbage").await;
        assert!(matches!(result.unwrap_err(), AccountError::InvalidToken));
    }

    #[tokio::test]
    async fn test_resolve_identity_subject_deleted() {
        let mut repository = MockTestAccountRepository::new();

        let account = stored_account("a@x.com", "hunter2");
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));
        // Second lookup: the account is gone after the token was issued.
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = service(repository);

        let session = service.login("a@x.com", "hunter2").await.unwrap();
        let result = service.resolve_identity(&session.access_token).await;
        assert!(matches!(result.unwrap_err(), AccountError::NotFound(_)));
    }
}
