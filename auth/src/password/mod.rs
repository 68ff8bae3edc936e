pub mod argon2;
pub mod errors;

pub use self::argon2::Argon2PasswordEncoder;
pub use errors::PasswordError;

/// One-way encoding of passwords for storage and login checks.
pub trait PasswordEncoder: Send + Sync + 'static {
    /// Encode a plaintext password for storage.
    fn encode(&self, password: &str) -> Result<String, PasswordError>;

    /// Check a plaintext password against a stored encoding.
    ///
    /// # Errors
    /// * `MalformedHash` - Stored encoding cannot be parsed
    fn matches(&self, password: &str, encoded: &str) -> Result<bool, PasswordError>;
}
