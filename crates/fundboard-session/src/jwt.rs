//! Signed session token creation and verification.
//!
//! The stateless backend: the token itself is the session record, signed
//! with the server secret. Verifying a token never touches storage, so
//! [`JwtSessions`] cannot fail with a provider error; a token that does not
//! verify simply resolves as anonymous.

use axum::http::HeaderMap;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use fundboard_config::JwtConfig;
use fundboard_models::{Session, User};

use crate::claims::SessionClaims;
use crate::credentials::session_token;
use crate::provider::{ProviderError, SessionProvider};

/// Failure creating or verifying a signed session token.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign session token: {0}")]
    Encode(#[source] jsonwebtoken::errors::Error),
    #[error("invalid or expired session token")]
    Invalid,
}

/// Mints a signed session token for `user`.
///
/// Expiry is `now + session_expiry` from the config. Used by the dev CLI
/// and by tests; production sign-in flows live with the credential
/// backend, not in this crate.
pub fn create_session_token(user: &User, jwt_config: &JwtConfig) -> Result<String, TokenError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.session_expiry as usize;

    let claims = SessionClaims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        name: user.name.clone(),
        image: user.image.clone(),
        role: user.role.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(TokenError::Encode)
}

/// Verifies a session token signature and expiry, returning the embedded
/// claims.
pub fn verify_session_token(
    token: &str,
    jwt_config: &JwtConfig,
) -> Result<SessionClaims, TokenError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| TokenError::Invalid)
}

/// Stateless session backend backed by signed tokens.
pub struct JwtSessions {
    config: JwtConfig,
    cookie_name: String,
}

impl JwtSessions {
    pub fn new(config: JwtConfig, cookie_name: impl Into<String>) -> Self {
        Self {
            config,
            cookie_name: cookie_name.into(),
        }
    }
}

#[async_trait::async_trait]
impl SessionProvider for JwtSessions {
    async fn resolve_session(
        &self,
        headers: &HeaderMap,
    ) -> Result<Option<Session>, ProviderError> {
        let Some(token) = session_token(headers, &self.cookie_name) else {
            return Ok(None);
        };

        match verify_session_token(&token, &self.config) {
            Ok(claims) => Ok(claims.into_session()),
            Err(err) => {
                tracing::debug!("rejected session token: {err}");
                Ok(None)
            }
        }
    }
}
