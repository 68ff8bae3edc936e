use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid: {0}")]
    TokenInvalid(#[from] VerificationFailure),

    #[error("Missing required claim: {0}")]
    MissingClaim(String),
}

/// Reason a presented token was rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum VerificationFailure {
    #[error("malformed token")]
    Malformed,

    #[error("signature mismatch")]
    SignatureMismatch,

    #[error("issuer mismatch")]
    IssuerMismatch,

    #[error("token expired")]
    Expired,
}

impl From<&ErrorKind> for VerificationFailure {
    fn from(kind: &ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidSignature => VerificationFailure::SignatureMismatch,
            ErrorKind::InvalidIssuer => VerificationFailure::IssuerMismatch,
            ErrorKind::MissingRequiredClaim(claim) if claim == "iss" => {
                VerificationFailure::IssuerMismatch
            }
            ErrorKind::ExpiredSignature => VerificationFailure::Expired,
            _ => VerificationFailure::Malformed,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for VerificationFailure {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::from(err.kind())
    }
}
