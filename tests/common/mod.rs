#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request};
use fundboard::router::init_router;
use fundboard::state::AppState;
use fundboard_config::{AuthConfig, CorsConfig};
use fundboard_models::{Role, Session, User};
use fundboard_session::{MemorySessions, ProviderError, SessionProvider};
use http_body_util::BodyExt;
use uuid::Uuid;

/// Must match the default `SESSION_COOKIE_NAME`.
pub const COOKIE_NAME: &str = "fundboard_session";

pub const ADMIN_TOKEN: &str = "token-admin";
pub const USER_TOKEN: &str = "token-user";

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const USER_EMAIL: &str = "user@example.com";

pub fn create_test_user(email: &str, role: Role) -> User {
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        name: "Test User".to_string(),
        image: None,
        role,
    }
}

/// Memory store seeded with one admin and one regular user.
pub fn seeded_store() -> MemorySessions {
    let store = MemorySessions::new(COOKIE_NAME);
    store.insert(
        ADMIN_TOKEN,
        Session::new(create_test_user(ADMIN_EMAIL, Role::Admin)),
    );
    store.insert(
        USER_TOKEN,
        Session::new(create_test_user(USER_EMAIL, Role::User)),
    );
    store
}

pub fn setup_test_app(sessions: Arc<dyn SessionProvider>) -> Router {
    let state = AppState {
        sessions,
        auth_config: AuthConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

pub fn setup_seeded_app() -> Router {
    setup_test_app(Arc::new(seeded_store()))
}

/// Provider standing in for an unreachable session backend.
pub struct UnreachableSessions;

#[async_trait::async_trait]
impl SessionProvider for UnreachableSessions {
    async fn resolve_session(
        &self,
        _headers: &HeaderMap,
    ) -> Result<Option<Session>, ProviderError> {
        Err(ProviderError::Unavailable("connection refused".to_string()))
    }
}

/// Provider that suspends before answering, widening the window in which
/// concurrent requests interleave.
pub struct DelayedSessions {
    pub inner: MemorySessions,
    pub delay: Duration,
}

#[async_trait::async_trait]
impl SessionProvider for DelayedSessions {
    async fn resolve_session(
        &self,
        headers: &HeaderMap,
    ) -> Result<Option<Session>, ProviderError> {
        tokio::time::sleep(self.delay).await;
        self.inner.resolve_session(headers).await
    }
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

pub fn get_with_token(path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header("cookie", format!("{COOKIE_NAME}={token}"))
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_bearer(path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

pub fn location_header(response: &axum::response::Response) -> String {
    response
        .headers()
        .get("location")
        .expect("missing Location header")
        .to_str()
        .unwrap()
        .to_string()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
