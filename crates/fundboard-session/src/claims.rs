//! Signed session token claims.

use fundboard_models::{Role, Session, User};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in a signed session token.
///
/// The token carries the full user record so the stateless backend can
/// rebuild a [`Session`] without a storage lookup.
///
/// # Fields
///
/// - `sub`: User ID (subject)
/// - `email`, `name`, `image`: user profile fields
/// - `role`: role name, parsed into [`Role`] on verification
/// - `exp`: token expiration timestamp (Unix)
/// - `iat`: token issued-at timestamp (Unix)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

impl SessionClaims {
    /// Rebuilds the session this token attests to.
    ///
    /// Returns `None` when the subject is not a UUID or the role is
    /// unknown; such a token resolves as anonymous rather than as a
    /// best-guess identity.
    pub fn into_session(self) -> Option<Session> {
        let id = Uuid::parse_str(&self.sub).ok()?;
        let role: Role = self.role.parse().ok()?;
        let expires_at = chrono::DateTime::from_timestamp(self.exp as i64, 0)?;

        Some(Session {
            user: User {
                id,
                email: self.email,
                name: self.name,
                image: self.image,
                role,
            },
            expires_at: Some(expires_at),
            provider_data: serde_json::Value::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_claims() -> SessionClaims {
        SessionClaims {
            sub: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            name: "Test User".to_string(),
            image: None,
            role: "admin".to_string(),
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    #[test]
    fn test_into_session() {
        let claims = test_claims();
        let sub = claims.sub.clone();

        let session = claims.into_session().unwrap();
        assert_eq!(session.user.id.to_string(), sub);
        assert_eq!(session.user.role, Role::Admin);
        assert_eq!(session.expires_at.unwrap().timestamp(), 9999999999);
    }

    #[test]
    fn test_unknown_role_resolves_to_no_session() {
        let mut claims = test_claims();
        claims.role = "owner".to_string();
        assert!(claims.into_session().is_none());
    }

    #[test]
    fn test_malformed_subject_resolves_to_no_session() {
        let mut claims = test_claims();
        claims.sub = "not-a-uuid".to_string();
        assert!(claims.into_session().is_none());
    }

    #[test]
    fn test_claims_serialize_omits_missing_image() {
        let serialized = serde_json::to_string(&test_claims()).unwrap();
        assert!(!serialized.contains("image"));
        assert!(serialized.contains(r#""role":"admin""#));
    }
}
