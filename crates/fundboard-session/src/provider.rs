//! Session provider interface.

use axum::http::HeaderMap;
use fundboard_models::Session;
use thiserror::Error;

/// Infrastructure failure while resolving a session.
///
/// Absent, malformed, or expired credentials are not errors; providers
/// report those as `Ok(None)`. An error here means the session backend
/// itself could not answer, and callers must fail the request rather than
/// fall back to anonymous.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("session backend unavailable: {0}")]
    Unavailable(String),
}

/// Resolves the caller's session from request headers.
///
/// Implementations may suspend (network or storage round trip) and are
/// called concurrently from many in-flight requests.
#[async_trait::async_trait]
pub trait SessionProvider: Send + Sync {
    async fn resolve_session(&self, headers: &HeaderMap)
    -> Result<Option<Session>, ProviderError>;
}
