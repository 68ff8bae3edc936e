use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use super::errors::AuthenticationError;
use super::models::Authentication;
use super::models::AuthenticationRequest;
use super::models::Principal;
use super::ports::AuthenticationProvider;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Authentication provider for bearer tokens issued by [`JwtHandler`].
///
/// The principal and authorities are rebuilt from the token claims; no user
/// record is attached.
pub struct TokenAuthenticator<U> {
    jwt_handler: Arc<JwtHandler>,
    _details: PhantomData<fn() -> U>,
}

impl<U> TokenAuthenticator<U> {
    pub fn new(jwt_handler: Arc<JwtHandler>) -> Self {
        Self {
            jwt_handler,
            _details: PhantomData,
        }
    }

    fn authenticate_token(&self, token: &str) -> Result<Authentication<U>, AuthenticationError> {
        let claims = self.jwt_handler.verify(token)?;

        let user_key = claims
            .user_key()
            .ok_or_else(|| JwtError::MissingClaim("userKey".to_string()))?;
        let name = claims
            .name()
            .ok_or_else(|| JwtError::MissingClaim("name".to_string()))?
            .to_string();
        let authorities = claims.roles().map(<[String]>::to_vec).unwrap_or_default();

        Ok(Authentication::authenticated(
            Principal { user_key, name },
            authorities,
            None,
        ))
    }
}

#[async_trait]
impl<U> AuthenticationProvider<U> for TokenAuthenticator<U>
where
    U: Send + Sync + 'static,
{
    fn supports(&self, request: &AuthenticationRequest) -> bool {
        matches!(request, AuthenticationRequest::BearerToken(_))
    }

    async fn authenticate(
        &self,
        request: AuthenticationRequest,
    ) -> Result<Authentication<U>, AuthenticationError> {
        match request {
            AuthenticationRequest::BearerToken(token) => self.authenticate_token(&token),
            _ => Err(AuthenticationError::UnsupportedRequest),
        }
    }
}
