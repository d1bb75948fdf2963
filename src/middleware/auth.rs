//! Session-resolving middleware.
//!
//! Both layers resolve the caller's session once via the configured
//! [`SessionProvider`](fundboard_session::SessionProvider) and bind it into
//! the request context for everything downstream — inner middleware, the
//! handler, and anything those call. Layers compose by router nesting: an
//! outer subtree may bind with [`load_session`] and an inner subtree narrow
//! with [`require_auth`], rebinding inside the outer scope.

use axum::{
    extract::{OriginalUri, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use fundboard_config::AuthConfig;
use fundboard_context::bind_session;
use fundboard_models::Session;

use crate::state::AppState;
use crate::utils::errors::AppError;

/// Resolves the caller's session and binds it for the rest of the request.
///
/// Anonymous callers pass through; handlers behind this layer observe
/// `current_user() == None`. Never redirects.
pub async fn load_session(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let session = resolve_session(&state, req.headers()).await?;
    Ok(bind_session(session, next.run(req)).await)
}

/// Like [`load_session`], but short-circuits with a redirect to the sign-in
/// page when no session exists, carrying the originally requested path so
/// the client can return after authenticating. Handlers behind this layer
/// always observe a bound, authenticated session.
pub async fn require_auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let session = resolve_session(&state, req.headers()).await?;

    let Some(session) = session else {
        let path = original_path(&req);
        tracing::debug!(path = %path, "unauthenticated, redirecting to sign-in");
        return Err(AppError::redirect_to(sign_in_redirect(
            &state.auth_config,
            &path,
        )));
    };

    Ok(bind_session(Some(session), next.run(req)).await)
}

/// A provider failure is surfaced as a failed request, never as an
/// anonymous session: a backend outage must not widen access.
async fn resolve_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Option<Session>, AppError> {
    state
        .sessions
        .resolve_session(headers)
        .await
        .map_err(AppError::bad_gateway)
}

/// The request path as the client sent it. Nested routers see a stripped
/// URI, so prefer the recorded original.
fn original_path(req: &Request) -> String {
    req.extensions()
        .get::<OriginalUri>()
        .map(|uri| uri.0.path().to_string())
        .unwrap_or_else(|| req.uri().path().to_string())
}

/// Builds the sign-in target. Only the path is carried over, not the query
/// string; an empty path canonicalizes to `/`.
fn sign_in_redirect(auth_config: &AuthConfig, original_path: &str) -> String {
    let path = if original_path.is_empty() {
        "/"
    } else {
        original_path
    };
    format!(
        "{}?{}={}",
        auth_config.sign_in_path,
        auth_config.redirect_param,
        urlencoding::encode(path)
    )
}
