pub mod claims;
pub mod config;
pub mod errors;
pub mod handler;

pub use claims::Claims;
pub use config::JwtConfig;
pub use errors::JwtError;
pub use errors::VerificationFailure;
pub use handler::JwtHandler;
