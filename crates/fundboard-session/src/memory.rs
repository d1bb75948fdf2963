//! In-process session store.

use axum::http::HeaderMap;
use chrono::Utc;
use fundboard_models::Session;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::credentials::session_token;
use crate::provider::{ProviderError, SessionProvider};

/// Token-keyed session store for tests and embedded deployments.
///
/// Lookup is expiry-checked: a session past its `expires_at` resolves as
/// anonymous and is pruned from the store.
pub struct MemorySessions {
    cookie_name: String,
    inner: RwLock<HashMap<String, Session>>,
}

impl MemorySessions {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Registers `session` under `token`, replacing any previous holder.
    pub fn insert(&self, token: impl Into<String>, session: Session) {
        self.inner.write().insert(token.into(), session);
    }

    /// Drops the session held under `token`. Returns whether one existed.
    pub fn revoke(&self, token: &str) -> bool {
        self.inner.write().remove(token).is_some()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

#[async_trait::async_trait]
impl SessionProvider for MemorySessions {
    async fn resolve_session(
        &self,
        headers: &HeaderMap,
    ) -> Result<Option<Session>, ProviderError> {
        let Some(token) = session_token(headers, &self.cookie_name) else {
            return Ok(None);
        };

        let session = self.inner.read().get(&token).cloned();
        match session {
            Some(session) if session.is_expired_at(Utc::now()) => {
                self.inner.write().remove(&token);
                Ok(None)
            }
            other => Ok(other),
        }
    }
}
