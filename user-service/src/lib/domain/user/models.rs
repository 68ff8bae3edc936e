use std::fmt;

use auth::Email;
use auth::UserRecord;
use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::NameError;

/// User aggregate entity.
///
/// Represents a registered user
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub seq: i64,
    pub name: Name,
    pub email: Email,
    pub password_hash: String,
    pub login_count: i32,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl UserRecord for User {
    fn seq(&self) -> i64 {
        self.seq
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// Display name value type
///
/// Ensures the name is not blank and at most 32 characters once trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    const MAX_LENGTH: usize = 32;

    /// Create a new valid name.
    ///
    /// # Errors
    /// * `Blank` - Name is empty or whitespace only
    /// * `TooLong` - Name longer than 32 characters
    pub fn new(name: impl AsRef<str>) -> Result<Self, NameError> {
        let name = name.as_ref().trim();
        let length = name.chars().count();

        if length == 0 {
            Err(NameError::Blank)
        } else if length > Self::MAX_LENGTH {
            Err(NameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct JoinCommand {
    pub name: Name,
    pub email: Email,
    pub password: String,
}

impl JoinCommand {
    /// Construct a new join command.
    ///
    /// # Arguments
    /// * `name` - Validated display name
    /// * `email` - Validated email address
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(name: Name, email: Email, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

/// New user ready to be persisted; the store assigns the sequence number.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: Name,
    pub email: Email,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
