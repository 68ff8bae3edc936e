use auth::EmailError;
use auth::LookupError;
use auth::PasswordError;
use thiserror::Error;

/// Error for Name validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Name must not be blank")]
    Blank,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid name: {0}")]
    InvalidName(#[from] NameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    // Domain-level errors
    #[error("User not found: {0}")]
    NotFound(i64),

    #[error("User not found with email: {0}")]
    NotFoundByEmail(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<UserError> for LookupError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByEmail(_) => {
                LookupError::NotFound(err.to_string())
            }
            UserError::InvalidCredentials => LookupError::InvalidArgument(err.to_string()),
            // Login takes an already parsed email and never creates users, so
            // the remaining variants can only come from the store or the hasher.
            UserError::InvalidEmail(_)
            | UserError::InvalidName(_)
            | UserError::EmailAlreadyExists(_)
            | UserError::Password(_)
            | UserError::DatabaseError(_) => LookupError::DataAccess(err.to_string()),
        }
    }
}
