use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use account_service::account::errors::AccountError;
use account_service::account::ports::AccountRepository;
use account_service::domain::account::models::Account;
use account_service::domain::account::service::AccountService;
use account_service::inbound::http::router::create_router;
use async_trait::async_trait;
use auth::Authenticator;
use chrono::Duration;

/// Test application that spawns a real server on a random port, backed by
/// an in-memory implementation of the store port.
pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryAccountRepository>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryAccountRepository::new());

        let authenticator = Authenticator::new(
            b"test-secret-key-for-token-signing-at-least-32-bytes",
            Duration::minutes(30),
        );
        let account_service = Arc::new(AccountService::new(Arc::clone(&repository), authenticator));

        let router = create_router(account_service);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            repository,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }
}

/// In-memory store port implementation, keyed by email.
pub struct InMemoryAccountRepository {
    accounts: Mutex<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
        }
    }

    /// Test hook: look at the stored hash for an email.
    pub fn stored_hash(&self, email: &str) -> Option<String> {
        self.accounts
            .lock()
            .unwrap()
            .get(email)
            .map(|account| account.password_hash.clone())
    }

    /// Test hook: drop an account, simulating out-of-scope administrative
    /// deletion after a token was issued.
    pub fn remove(&self, email: &str) {
        self.accounts.lock().unwrap().remove(email);
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.lock().unwrap();
        let email = account.email.as_str().to_string();
        if accounts.contains_key(&email) {
            return Err(AccountError::EmailAlreadyExists(email));
        }
        accounts.insert(email, account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        Ok(self.accounts.lock().unwrap().get(email).cloned())
    }
}
