use std::fmt;

use crate::jwt::Claims;

/// Roles granted to authenticated users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request presented to an authentication provider.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthenticationRequest {
    /// Login identifier and password.
    Credentials {
        principal: String,
        credentials: String,
    },
    /// Compact token from an `Authorization: Bearer` header.
    BearerToken(String),
}

impl AuthenticationRequest {
    pub fn credentials(principal: impl Into<String>, credentials: impl Into<String>) -> Self {
        Self::Credentials {
            principal: principal.into(),
            credentials: credentials.into(),
        }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self::BearerToken(token.into())
    }
}

impl fmt::Debug for AuthenticationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credentials { principal, .. } => f
                .debug_struct("Credentials")
                .field("principal", principal)
                .field("credentials", &"<redacted>")
                .finish(),
            Self::BearerToken(_) => f.debug_tuple("BearerToken").field(&"<redacted>").finish(),
        }
    }
}

/// Identity of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_key: i64,
    pub name: String,
}

/// Result of a successful authentication.
///
/// Carries the principal, the granted authorities and, when the provider
/// resolved one, the full user record as details.
#[derive(Debug, Clone, PartialEq)]
pub struct Authentication<U> {
    principal: Principal,
    authorities: Vec<String>,
    details: Option<U>,
}

impl<U> Authentication<U> {
    pub fn authenticated(principal: Principal, authorities: Vec<String>, details: Option<U>) -> Self {
        Self {
            principal,
            authorities,
            details,
        }
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn authorities(&self) -> &[String] {
        &self.authorities
    }

    pub fn details(&self) -> Option<&U> {
        self.details.as_ref()
    }

    /// Claims for issuing a token to this principal.
    pub fn to_claims(&self) -> Claims {
        Claims::of(
            self.principal.user_key,
            self.principal.name.clone(),
            self.authorities.clone(),
        )
    }
}
