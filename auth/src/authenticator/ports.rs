use async_trait::async_trait;

use super::errors::AuthenticationError;
use super::errors::LookupError;
use super::models::Authentication;
use super::models::AuthenticationRequest;
use crate::email::Email;

/// User record resolved during authentication.
pub trait UserRecord: Clone + Send + Sync + 'static {
    /// Sequence number identifying the user.
    fn seq(&self) -> i64;

    /// Display name.
    fn name(&self) -> &str;
}

/// Port for resolving a user and checking the presented password.
#[async_trait]
pub trait UserLookup: Send + Sync + 'static {
    type User: UserRecord;

    /// Find the user registered under `email` and verify `password`.
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `InvalidArgument` - Password does not match
    /// * `DataAccess` - Backing store failed
    async fn lookup_and_verify(
        &self,
        email: &Email,
        password: &str,
    ) -> Result<Self::User, LookupError>;
}

/// A single authentication mechanism in a provider chain.
#[async_trait]
pub trait AuthenticationProvider<U>: Send + Sync {
    /// Whether this provider handles requests of this kind.
    fn supports(&self, request: &AuthenticationRequest) -> bool;

    /// Authenticate a request this provider supports.
    ///
    /// # Errors
    /// * `UnsupportedRequest` - `supports` returns false for `request`
    async fn authenticate(
        &self,
        request: AuthenticationRequest,
    ) -> Result<Authentication<U>, AuthenticationError>;
}
