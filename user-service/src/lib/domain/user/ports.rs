use async_trait::async_trait;
use auth::Email;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::JoinCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated command containing name, email, and password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn join(&self, command: JoinCommand) -> Result<User, UserError>;

    /// Verify a login and record it on the user.
    ///
    /// # Arguments
    /// * `email` - Login email
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// User entity with updated login statistics
    ///
    /// # Errors
    /// * `NotFoundByEmail` - No user with this email
    /// * `InvalidCredentials` - Password does not match
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, email: &Email, password: &str) -> Result<User, UserError>;

    /// Retrieve user by sequence number.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, seq: i64) -> Result<User, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Returns
    /// Created user entity with its assigned sequence number
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve user by sequence number.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_seq(&self, seq: i64) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserError>;

    /// Atomically increment the login count and set the last login time.
    ///
    /// # Returns
    /// User entity as stored after the update
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn record_login(&self, seq: i64, at: DateTime<Utc>) -> Result<User, UserError>;
}
