use std::sync::Arc;

use async_trait::async_trait;
use auth::Email;
use auth::LookupError;
use auth::PasswordEncoder;
use auth::UserLookup;
use chrono::Utc;

use crate::domain::user::models::JoinCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR, PE>
where
    UR: UserRepository,
    PE: PasswordEncoder,
{
    repository: Arc<UR>,
    password_encoder: PE,
}

impl<UR, PE> UserService<UR, PE>
where
    UR: UserRepository,
    PE: PasswordEncoder,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `password_encoder` - Password encoding used for joins and logins
    pub fn new(repository: Arc<UR>, password_encoder: PE) -> Self {
        Self {
            repository,
            password_encoder,
        }
    }
}

#[async_trait]
impl<UR, PE> UserServicePort for UserService<UR, PE>
where
    UR: UserRepository,
    PE: PasswordEncoder,
{
    async fn join(&self, command: JoinCommand) -> Result<User, UserError> {
        let password_hash = self.password_encoder.encode(&command.password)?;

        let user = self
            .repository
            .create(NewUser {
                name: command.name,
                email: command.email,
                password_hash,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(user_seq = user.seq, "User joined");

        Ok(user)
    }

    async fn login(&self, email: &Email, password: &str) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFoundByEmail(email.to_string()))?;

        if !self
            .password_encoder
            .matches(password, &user.password_hash)?
        {
            return Err(UserError::InvalidCredentials);
        }

        self.repository.record_login(user.seq, Utc::now()).await
    }

    async fn get_user(&self, seq: i64) -> Result<User, UserError> {
        self.repository
            .find_by_seq(seq)
            .await?
            .ok_or(UserError::NotFound(seq))
    }
}

#[async_trait]
impl<UR, PE> UserLookup for UserService<UR, PE>
where
    UR: UserRepository,
    PE: PasswordEncoder,
{
    type User = User;

    async fn lookup_and_verify(&self, email: &Email, password: &str) -> Result<User, LookupError> {
        self.login(email, password).await.map_err(LookupError::from)
    }
}
