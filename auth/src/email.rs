use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error for email validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Email address used as the login identifier.
///
/// Surrounding whitespace is trimmed and the address is lowercased before
/// being checked with an RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `raw` - Raw identifier as presented by the client
    ///
    /// # Returns
    /// Normalized Email value object
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(raw: impl AsRef<str>) -> Result<Self, EmailError> {
        let normalized = raw.as_ref().trim().to_lowercase();

        email_address::EmailAddress::from_str(&normalized)
            .map(|_| Email(normalized))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
