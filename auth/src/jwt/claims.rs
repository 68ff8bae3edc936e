use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a token issued for an authenticated user.
///
/// Built by [`Claims::of`] before signing, or by the handler after a token
/// has been verified. A verified token may come from any issuer holding the
/// same key, so every field is optional and callers must check for absence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Claims {
    user_key: Option<i64>,
    name: Option<String>,
    roles: Option<Vec<String>>,
    issued_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
}

impl Claims {
    /// Create claims for a user. Issued-at and expiry are left unset; the
    /// handler fills them in when the token is created.
    ///
    /// # Arguments
    /// * `user_key` - User sequence number
    /// * `name` - Display name
    /// * `roles` - Granted roles, order preserved
    pub fn of(user_key: i64, name: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            user_key: Some(user_key),
            name: Some(name.into()),
            roles: Some(roles),
            issued_at: None,
            expires_at: None,
        }
    }

    pub fn user_key(&self) -> Option<i64> {
        self.user_key
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn roles(&self) -> Option<&[String]> {
        self.roles.as_deref()
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.issued_at
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub(crate) fn into_payload(self, issuer: &str, iat: i64, exp: Option<i64>) -> TokenPayload {
        TokenPayload {
            iss: Some(issuer.to_string()),
            iat: Some(iat),
            exp,
            user_key: self.user_key,
            name: self.name,
            roles: self.roles,
        }
    }
}

/// On-the-wire payload: reserved `iss`/`iat`/`exp` plus the custom fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub(crate) struct TokenPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    #[serde(rename = "userKey", default, skip_serializing_if = "Option::is_none")]
    pub user_key: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

impl From<TokenPayload> for Claims {
    fn from(payload: TokenPayload) -> Self {
        Self {
            user_key: payload.user_key,
            name: payload.name,
            roles: payload.roles,
            issued_at: payload.iat.and_then(from_timestamp),
            expires_at: payload.exp.and_then(from_timestamp),
        }
    }
}

fn from_timestamp(seconds: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, 0).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_leaves_timestamps_unset() {
        let claims = Claims::of(7, "alice", vec!["USER".to_string()]);

        assert_eq!(claims.user_key(), Some(7));
        assert_eq!(claims.name(), Some("alice"));
        assert_eq!(claims.roles(), Some(&["USER".to_string()][..]));
        assert!(claims.issued_at().is_none());
        assert!(claims.expires_at().is_none());
    }

    #[test]
    fn test_payload_wire_names() {
        let payload = Claims::of(42, "bob", vec!["USER".to_string(), "ADMIN".to_string()])
            .into_payload("order-management", 1_700_000_000, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["iss"], "order-management");
        assert_eq!(json["iat"], 1_700_000_000);
        assert_eq!(json["userKey"], 42);
        assert_eq!(json["name"], "bob");
        assert_eq!(json["roles"], serde_json::json!(["USER", "ADMIN"]));
        assert!(json.get("exp").is_none());
    }

    #[test]
    fn test_absent_and_null_fields_decode_to_none() {
        let payload: TokenPayload =
            serde_json::from_value(serde_json::json!({ "iss": "x", "name": null })).unwrap();
        let claims = Claims::from(payload);

        assert!(claims.user_key().is_none());
        assert!(claims.name().is_none());
        assert!(claims.roles().is_none());
        assert!(claims.issued_at().is_none());
    }

    #[test]
    fn test_timestamps_decode_from_seconds() {
        let now = Utc::now().timestamp();
        let payload = TokenPayload {
            iss: None,
            iat: Some(now),
            exp: Some(now + 60),
            user_key: None,
            name: None,
            roles: None,
        };
        let claims = Claims::from(payload);

        assert_eq!(claims.issued_at().map(|t| t.timestamp()), Some(now));
        assert_eq!(claims.expires_at().map(|t| t.timestamp()), Some(now + 60));
    }
}
