//! Per-request resolved session state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::users::User;

/// Identity state resolved once per request by the session provider.
///
/// A session is immutable after resolution. Absence of a session
/// (`Option<Session>::None`) is the anonymous case and is valid wherever
/// login is not required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    /// Absolute expiry, when the provider reports one.
    pub expires_at: Option<DateTime<Utc>>,
    /// Provider-specific passthrough fields, kept opaque.
    #[serde(default)]
    pub provider_data: serde_json::Value,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self {
            user,
            expires_at: None,
            provider_data: serde_json::Value::Null,
        }
    }

    pub fn with_expiry(user: User, expires_at: DateTime<Utc>) -> Self {
        Self {
            user,
            expires_at: Some(expires_at),
            provider_data: serde_json::Value::Null,
        }
    }

    /// Whether the session is past its expiry at `now`. Sessions without an
    /// expiry never expire.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}
