//! Authentication library
//!
//! Provides the authentication layer shared by the services:
//! - Token creation and verification (HS512 JWT pinned to an issuer)
//! - Authentication providers for email/password logins and bearer tokens
//! - A provider chain dispatching requests to the provider that supports them
//! - Password encoding (Argon2id)
//!
//! Services plug their user store in through the [`UserLookup`] port.
//!
//! # Examples
//!
//! ## Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new("order-management", b"secret_key_at_least_64_bytes_long_for_hs512_signing_purposes!!!", 3600);
//! let token = handler.create(&Claims::of(1, "alice", vec!["USER".to_string()])).unwrap();
//! let claims = handler.verify(&token).unwrap();
//! assert_eq!(claims.user_key(), Some(1));
//! assert_eq!(claims.name(), Some("alice"));
//! ```
//!
//! ## Password Encoding
//! ```
//! use auth::{Argon2PasswordEncoder, PasswordEncoder};
//!
//! let encoder = Argon2PasswordEncoder::new();
//! let encoded = encoder.encode("my_password").unwrap();
//! assert!(encoder.matches("my_password", &encoded).unwrap());
//! ```

pub mod authenticator;
pub mod email;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authentication;
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationProvider;
pub use authenticator::AuthenticationRequest;
pub use authenticator::CredentialAuthenticator;
pub use authenticator::LookupError;
pub use authenticator::Principal;
pub use authenticator::ProviderChain;
pub use authenticator::Role;
pub use authenticator::TokenAuthenticator;
pub use authenticator::UserLookup;
pub use authenticator::UserRecord;
pub use email::Email;
pub use email::EmailError;
pub use jwt::Claims;
pub use jwt::JwtConfig;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::VerificationFailure;
pub use password::Argon2PasswordEncoder;
pub use password::PasswordEncoder;
pub use password::PasswordError;
