use std::sync::Arc;

use async_trait::async_trait;

use super::errors::AuthenticationError;
use super::models::Authentication;
use super::models::AuthenticationRequest;
use super::models::Principal;
use super::models::Role;
use super::ports::AuthenticationProvider;
use super::ports::UserLookup;
use super::ports::UserRecord;
use crate::email::Email;

/// Authentication provider for email and password logins.
///
/// Delegates the user lookup and password check to a [`UserLookup`] and
/// translates its failures into authentication errors. Successful logins are
/// granted the `USER` role and carry the resolved user record as details.
pub struct CredentialAuthenticator<L>
where
    L: UserLookup,
{
    user_lookup: Arc<L>,
}

impl<L> CredentialAuthenticator<L>
where
    L: UserLookup,
{
    pub fn new(user_lookup: Arc<L>) -> Self {
        Self { user_lookup }
    }

    async fn authenticate_credentials(
        &self,
        principal: &str,
        password: &str,
    ) -> Result<Authentication<L::User>, AuthenticationError> {
        let email =
            Email::new(principal).map_err(|e| AuthenticationError::BadCredentials(e.to_string()))?;

        let user = self
            .user_lookup
            .lookup_and_verify(&email, password)
            .await
            .map_err(|e| {
                let err = AuthenticationError::from(e);
                if let AuthenticationError::AuthServiceUnavailable(reason) = &err {
                    tracing::error!(email = %email, reason = %reason, "User lookup failed");
                } else {
                    tracing::debug!(email = %email, error = %err, "Credential authentication rejected");
                }
                err
            })?;

        tracing::debug!(user_key = user.seq(), "Credential authentication succeeded");

        Ok(Authentication::authenticated(
            Principal {
                user_key: user.seq(),
                name: user.name().to_string(),
            },
            vec![Role::User.to_string()],
            Some(user),
        ))
    }
}

#[async_trait]
impl<L> AuthenticationProvider<L::User> for CredentialAuthenticator<L>
where
    L: UserLookup,
{
    fn supports(&self, request: &AuthenticationRequest) -> bool {
        matches!(request, AuthenticationRequest::Credentials { .. })
    }

    async fn authenticate(
        &self,
        request: AuthenticationRequest,
    ) -> Result<Authentication<L::User>, AuthenticationError> {
        match request {
            AuthenticationRequest::Credentials {
                principal,
                credentials,
            } => self.authenticate_credentials(&principal, &credentials).await,
            _ => Err(AuthenticationError::UnsupportedRequest),
        }
    }
}
