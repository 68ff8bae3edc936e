use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Argon2PasswordEncoder;
use auth::Email;
use auth::JwtHandler;
use chrono::DateTime;
use chrono::Utc;
use user_service::domain::user::models::NewUser;
use user_service::domain::user::models::User;
use user_service::domain::user::ports::UserRepository;
use user_service::domain::user::service::UserService;
use user_service::inbound::http::router::create_provider_chain;
use user_service::inbound::http::router::create_router;
use user_service::user::errors::UserError;

pub const ISSUER: &str = "user-service-test";
pub const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-long-enough-for-hs512-algorithm!";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application backed by an in-memory user store
    pub async fn spawn() -> Self {
        Self::spawn_with(InMemoryUserRepository::default(), 3600).await
    }

    /// Spawn the application with a custom repository and token lifetime
    pub async fn spawn_with<R: UserRepository>(repository: R, expiry_seconds: i64) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let jwt_handler = Arc::new(JwtHandler::new(ISSUER, SECRET, expiry_seconds));
        let user_service = Arc::new(UserService::new(
            Arc::new(repository),
            Argon2PasswordEncoder::new(),
        ));
        let providers = Arc::new(create_provider_chain(
            Arc::clone(&user_service),
            Arc::clone(&jwt_handler),
        ));

        let router = create_router(user_service, providers, jwt_handler);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(ISSUER, SECRET, expiry_seconds),
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

    /// Register a user and return the response body
    pub async fn join(&self, name: &str, email: &str, password: &str) -> serde_json::Value {
        self.post("/api/users")
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse response")
    }

    /// Log in and return the raw response
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/login")
            .json(&serde_json::json!({
                "principal": email,
                "credentials": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// User store kept in memory for the lifetime of a test
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        let created = User {
            seq: users.len() as i64 + 1,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            login_count: 0,
            last_login_at: None,
            created_at: user.created_at,
        };
        users.push(created.clone());

        Ok(created)
    }

    async fn find_by_seq(&self, seq: i64) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.seq == seq).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn record_login(&self, seq: i64, at: DateTime<Utc>) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        let stored = users
            .iter_mut()
            .find(|u| u.seq == seq)
            .ok_or(UserError::NotFound(seq))?;

        stored.login_count += 1;
        stored.last_login_at = Some(at);

        Ok(stored.clone())
    }
}

/// User store whose backend is always down
pub struct UnavailableUserRepository;

#[async_trait]
impl UserRepository for UnavailableUserRepository {
    async fn create(&self, _user: NewUser) -> Result<User, UserError> {
        Err(UserError::DatabaseError("connection refused".to_string()))
    }

    async fn find_by_seq(&self, _seq: i64) -> Result<Option<User>, UserError> {
        Err(UserError::DatabaseError("connection refused".to_string()))
    }

    async fn find_by_email(&self, _email: &Email) -> Result<Option<User>, UserError> {
        Err(UserError::DatabaseError("connection refused".to_string()))
    }

    async fn record_login(&self, _seq: i64, _at: DateTime<Utc>) -> Result<User, UserError> {
        Err(UserError::DatabaseError("connection refused".to_string()))
    }
}
