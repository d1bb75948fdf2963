//! Accessors for the session bound to the current request.

use fundboard_models::{Session, User};
use thiserror::Error;

use crate::store::read_binding;

/// Fault raised when [`require_user`] runs without a governing middleware.
///
/// This is a wiring bug on the route, not a user-facing auth failure: an
/// unauthenticated caller of a properly gated route is redirected by the
/// middleware before handler code runs. Callers must surface this loudly
/// (HTTP 500) and never fall back to treating the caller as anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextMisuse {
    #[error(
        "require_user() called outside a session binding; \
         attach the load_session or require_auth middleware to this route"
    )]
    Unbound,
    #[error(
        "require_user() called on a route with an anonymous session; \
         gate this route with require_auth instead of load_session"
    )]
    Anonymous,
}

/// The session bound to the current request, or `None` when the caller is
/// anonymous or no binding is active. Never fails.
pub fn current_session() -> Option<Session> {
    read_binding().flatten()
}

/// The authenticated user, or `None` when anonymous. Never fails.
pub fn current_user() -> Option<User> {
    current_session().map(|session| session.user)
}

/// The session bound to the current request.
///
/// Unlike [`current_session`] this never degrades to anonymous: a missing
/// or anonymous binding is reported as a [`ContextMisuse`] fault against
/// the route's wiring.
pub fn require_user() -> Result<Session, ContextMisuse> {
    match read_binding() {
        Some(Some(session)) => Ok(session),
        Some(None) => Err(ContextMisuse::Anonymous),
        None => Err(ContextMisuse::Unbound),
    }
}

#[cfg(test)]
mod tests {
    use fundboard_models::{Role, Session, User};
    use uuid::Uuid;

    use super::*;
    use crate::store::bind_session;

    fn test_session(role: Role) -> Session {
        Session::new(User {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            name: "Test User".to_string(),
            image: None,
            role,
        })
    }

    #[test]
    fn test_guards_outside_binding() {
        assert!(current_session().is_none());
        assert!(current_user().is_none());
        assert_eq!(require_user().unwrap_err(), ContextMisuse::Unbound);
    }

    #[tokio::test]
    async fn test_require_user_on_anonymous_binding() {
        bind_session(None, async {
            assert_eq!(require_user().unwrap_err(), ContextMisuse::Anonymous);
        })
        .await;
    }

    #[tokio::test]
    async fn test_guards_return_bound_session() {
        let session = test_session(Role::Admin);
        let user_id = session.user.id;

        bind_session(Some(session), async move {
            assert_eq!(current_session().unwrap().user.id, user_id);
            assert_eq!(current_user().unwrap().id, user_id);

            let required = require_user().unwrap();
            assert_eq!(required.user.id, user_id);
            assert!(required.user.is_admin());
        })
        .await;
    }
}
