use std::sync::Arc;

use super::errors::AuthenticationError;
use super::models::Authentication;
use super::models::AuthenticationRequest;
use super::ports::AuthenticationProvider;

/// Ordered list of authentication providers.
///
/// A request goes to the first provider that supports it; providers that do
/// not support the request kind are skipped.
pub struct ProviderChain<U> {
    providers: Vec<Arc<dyn AuthenticationProvider<U>>>,
}

impl<U> ProviderChain<U>
where
    U: Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn AuthenticationProvider<U>>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Authenticate a request with the first capable provider.
    ///
    /// # Errors
    /// * `UnsupportedRequest` - No provider supports the request kind
    /// * Any error raised by the selected provider
    pub async fn authenticate(
        &self,
        request: AuthenticationRequest,
    ) -> Result<Authentication<U>, AuthenticationError> {
        let provider = self
            .providers
            .iter()
            .find(|provider| provider.supports(&request))
            .ok_or(AuthenticationError::UnsupportedRequest)?;

        provider.authenticate(request).await
    }
}

impl<U> Default for ProviderChain<U>
where
    U: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
