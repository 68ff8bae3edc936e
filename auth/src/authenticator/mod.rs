pub mod chain;
pub mod credentials;
pub mod errors;
pub mod models;
pub mod ports;
pub mod token;

pub use chain::ProviderChain;
pub use credentials::CredentialAuthenticator;
pub use errors::AuthenticationError;
pub use errors::LookupError;
pub use models::Authentication;
pub use models::AuthenticationRequest;
pub use models::Principal;
pub use models::Role;
pub use ports::AuthenticationProvider;
pub use ports::UserLookup;
pub use ports::UserRecord;
pub use token::TokenAuthenticator;
