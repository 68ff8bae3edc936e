use std::fmt;

use serde::Deserialize;

/// Token issuing settings, fixed for the lifetime of a handler.
#[derive(Clone, Deserialize)]
pub struct JwtConfig {
    pub issuer: String,
    pub secret: String,
    /// Seconds until an issued token expires; zero or negative disables expiry.
    pub expiry_seconds: i64,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("issuer", &self.issuer)
            .field("secret", &"<redacted>")
            .field("expiry_seconds", &self.expiry_seconds)
            .finish()
    }
}
