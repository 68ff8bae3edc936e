use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::TokenPayload;
use super::config::JwtConfig;
use super::errors::JwtError;
use super::errors::VerificationFailure;

/// JWT token handler for creating and verifying user tokens.
///
/// Signs with HS512 using a shared secret and pins every token to the
/// configured issuer. Immutable after construction, so a single instance can
/// be shared across concurrent requests.
pub struct JwtHandler {
    issuer: String,
    expiry_seconds: i64,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtHandler {
    const ALGORITHM: Algorithm = Algorithm::HS512;

    /// Create a new JWT handler.
    ///
    /// # Arguments
    /// * `issuer` - Issuer written into and required from every token
    /// * `secret` - Symmetric signing key
    /// * `expiry_seconds` - Token lifetime; zero or negative issues tokens without expiry
    ///
    /// # Security Notes
    /// - The secret should be at least 512 bits (64 bytes) for HS512
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(issuer: impl Into<String>, secret: &[u8], expiry_seconds: i64) -> Self {
        let issuer = issuer.into();

        let mut validation = Validation::new(Self::ALGORITHM);
        validation.set_issuer(&[issuer.as_str()]);
        validation.set_required_spec_claims(&["iss"]);
        validation.validate_aud = false;
        validation.leeway = 0;

        Self {
            issuer,
            expiry_seconds,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(
            config.issuer.clone(),
            config.secret.as_bytes(),
            config.expiry_seconds,
        )
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn expiry_seconds(&self) -> i64 {
        self.expiry_seconds
    }

    /// Create a signed token for the given claims.
    ///
    /// Issued-at is always set to the current time and expiry is derived from
    /// the handler configuration; any timestamps on `claims` are ignored.
    ///
    /// # Arguments
    /// * `claims` - Claims with user key, name and roles populated
    ///
    /// # Returns
    /// Compact JWT string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn create(&self, claims: &Claims) -> Result<String, JwtError> {
        let issued_at = Utc::now().timestamp();
        let expires_at = (self.expiry_seconds > 0).then(|| issued_at + self.expiry_seconds);

        let payload = claims
            .clone()
            .into_payload(&self.issuer, issued_at, expires_at);

        encode(&Header::new(Self::ALGORITHM), &payload, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and decode its claims.
    ///
    /// # Arguments
    /// * `token` - Compact JWT string
    ///
    /// # Returns
    /// Decoded claims; fields missing from the token are `None`
    ///
    /// # Errors
    /// * `TokenInvalid` - Token is malformed, its signature or issuer does not
    ///   match, or it has expired
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let token_data = decode::<TokenPayload>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let reason = VerificationFailure::from(e.kind());
                tracing::debug!(error = %e, reason = %reason, "JWT verification failed");
                JwtError::TokenInvalid(reason)
            })?;

        Ok(token_data.claims.into())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use serde_json::json;

    use super::*;

    const SECRET: &[u8] = b"test_secret_key_long_enough_for_hs512_signing_at_least_64_bytes!";
    const ISSUER: &str = "order-management";

    fn roles() -> Vec<String> {
        vec!["USER".to_string(), "ADMIN".to_string()]
    }

    #[test]
    fn test_create_and_verify() {
        let handler = JwtHandler::new(ISSUER, SECRET, 3600);
        let before = Utc::now().timestamp();

        let token = handler
            .create(&Claims::of(42, "alice", roles()))
            .expect("Failed to create token");
        assert_eq!(token.split('.').count(), 3);

        let claims = handler.verify(&token).expect("Failed to verify token");
        assert_eq!(claims.user_key(), Some(42));
        assert_eq!(claims.name(), Some("alice"));
        assert_eq!(claims.roles(), Some(&roles()[..]));

        let issued_at = claims.issued_at().expect("iat missing").timestamp();
        assert!(issued_at >= before);
        let expires_at = claims.expires_at().expect("exp missing").timestamp();
        assert_eq!(expires_at - issued_at, 3600);
    }

    #[test]
    fn test_header_uses_hs512() {
        let handler = JwtHandler::new(ISSUER, SECRET, 3600);
        let token = handler.create(&Claims::of(1, "alice", roles())).unwrap();

        let header = jsonwebtoken::decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::HS512);
    }

    #[test]
    fn test_token_expires() {
        let handler = JwtHandler::new(ISSUER, SECRET, 1);
        let token = handler.create(&Claims::of(1, "alice", roles())).unwrap();

        thread::sleep(Duration::from_millis(2100));

        let result = handler.verify(&token);
        assert_eq!(
            result,
            Err(JwtError::TokenInvalid(VerificationFailure::Expired))
        );
    }

    #[test]
    fn test_non_positive_expiry_disables_exp() {
        for expiry_seconds in [0, -5] {
            let handler = JwtHandler::new(ISSUER, SECRET, expiry_seconds);
            let token = handler.create(&Claims::of(1, "alice", roles())).unwrap();

            let claims = handler.verify(&token).expect("Token without exp rejected");
            assert!(claims.expires_at().is_none());
        }
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let handler = JwtHandler::new(ISSUER, SECRET, 3600);
        let token = handler.create(&Claims::of(1, "alice", roles())).unwrap();

        let signature_start = token.rfind('.').unwrap() + 1;
        for position in signature_start..token.len() {
            let mut bytes = token.clone().into_bytes();
            bytes[position] = if bytes[position] == b'A' { b'B' } else { b'A' };
            let tampered = String::from_utf8(bytes).unwrap();

            assert!(
                matches!(handler.verify(&tampered), Err(JwtError::TokenInvalid(_))),
                "tampered byte at {} accepted",
                position
            );
        }
    }

    #[test]
    fn test_signature_from_other_key_rejected() {
        let issuer_a = JwtHandler::new(ISSUER, SECRET, 3600);
        let issuer_b = JwtHandler::new(
            ISSUER,
            b"another_secret_key_long_enough_for_hs512_signing_at_least_64_b!",
            3600,
        );

        let token = issuer_a.create(&Claims::of(1, "alice", roles())).unwrap();
        assert_eq!(
            issuer_b.verify(&token),
            Err(JwtError::TokenInvalid(VerificationFailure::SignatureMismatch))
        );
    }

    #[test]
    fn test_issuer_mismatch_rejected() {
        let ours = JwtHandler::new(ISSUER, SECRET, 3600);
        let theirs = JwtHandler::new("other-application", SECRET, 3600);

        let token = theirs.create(&Claims::of(1, "alice", roles())).unwrap();
        assert_eq!(
            ours.verify(&token),
            Err(JwtError::TokenInvalid(VerificationFailure::IssuerMismatch))
        );
    }

    #[test]
    fn test_missing_issuer_rejected() {
        let handler = JwtHandler::new(ISSUER, SECRET, 3600);
        let token = encode(
            &Header::new(Algorithm::HS512),
            &json!({ "userKey": 1, "name": "alice" }),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(
            handler.verify(&token),
            Err(JwtError::TokenInvalid(VerificationFailure::IssuerMismatch))
        );
    }

    #[test]
    fn test_malformed_token_rejected() {
        let handler = JwtHandler::new(ISSUER, SECRET, 3600);

        for token in ["", "invalid.token.here", "not-a-jwt"] {
            assert_eq!(
                handler.verify(token),
                Err(JwtError::TokenInvalid(VerificationFailure::Malformed))
            );
        }
    }

    #[test]
    fn test_custom_claims_absent_from_foreign_token() {
        let handler = JwtHandler::new(ISSUER, SECRET, 3600);
        let token = encode(
            &Header::new(Algorithm::HS512),
            &json!({ "iss": ISSUER, "iat": Utc::now().timestamp() }),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        let claims = handler.verify(&token).expect("Failed to verify token");
        assert!(claims.user_key().is_none());
        assert!(claims.name().is_none());
        assert!(claims.roles().is_none());
        assert!(claims.issued_at().is_some());
        assert!(claims.expires_at().is_none());
    }

    #[test]
    fn test_mistyped_custom_claim_is_malformed() {
        let handler = JwtHandler::new(ISSUER, SECRET, 3600);
        let token = encode(
            &Header::new(Algorithm::HS512),
            &json!({ "iss": ISSUER, "userKey": "42", "name": "alice" }),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(
            handler.verify(&token),
            Err(JwtError::TokenInvalid(VerificationFailure::Malformed))
        );
    }

    #[test]
    fn test_from_config() {
        let config = JwtConfig {
            issuer: ISSUER.to_string(),
            secret: String::from_utf8(SECRET.to_vec()).unwrap(),
            expiry_seconds: 60,
        };
        let handler = JwtHandler::from_config(&config);

        assert_eq!(handler.issuer(), ISSUER);
        assert_eq!(handler.expiry_seconds(), 60);
    }
}
