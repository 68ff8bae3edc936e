use thiserror::Error;

use crate::jwt::JwtError;

/// Failure reported by a user lookup collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// No user is registered under the presented identifier.
    #[error("User not found: {0}")]
    NotFound(String),

    /// The presented arguments were rejected, e.g. a password mismatch.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The backing store could not be reached or failed.
    #[error("Data access failure: {0}")]
    DataAccess(String),
}

/// Authentication operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthenticationError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Bad credentials: {0}")]
    BadCredentials(String),

    /// Infrastructure failure while authenticating. Never a credential problem.
    #[error("Authentication service unavailable: {0}")]
    AuthServiceUnavailable(String),

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] JwtError),

    #[error("No authentication provider supports this request")]
    UnsupportedRequest,
}

impl From<LookupError> for AuthenticationError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound(msg) => AuthenticationError::UserNotFound(msg),
            LookupError::InvalidArgument(msg) => AuthenticationError::BadCredentials(msg),
            LookupError::DataAccess(msg) => AuthenticationError::AuthServiceUnavailable(msg),
        }
    }
}
