//! Task-local storage for the resolved session.
//!
//! One process-wide key serves every request; each binding is pinned to a
//! single request's response future. A worker thread interleaving many
//! request futures observes each binding only while polling the future it
//! belongs to, so bindings cannot bleed between concurrent requests or
//! linger on a pooled thread after a request completes.

use std::future::Future;

use fundboard_models::Session;

tokio::task_local! {
    static CURRENT_SESSION: Option<Session>;
}

/// Runs `fut` with `session` bound as the current request's session.
///
/// The binding covers the full dynamic extent of `fut`, including across
/// await suspension points. Re-entrant calls shadow the outer binding for
/// the inner future only; the outer value is observed again once the inner
/// future completes.
pub async fn bind_session<F>(session: Option<Session>, fut: F) -> F::Output
where
    F: Future,
{
    CURRENT_SESSION.scope(session, fut).await
}

/// Reads the current binding, distinguishing "no binding in scope" (outer
/// `None`) from a bound anonymous session (`Some(None)`).
pub(crate) fn read_binding() -> Option<Option<Session>> {
    CURRENT_SESSION.try_with(|session| session.clone()).ok()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use fundboard_models::{Role, Session, User};
    use uuid::Uuid;

    use super::bind_session;
    use crate::guards::current_session;

    fn session_for(email: &str) -> Session {
        Session::new(User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: "Test User".to_string(),
            image: None,
            role: Role::User,
        })
    }

    fn current_email() -> String {
        current_session().unwrap().user.email
    }

    #[tokio::test]
    async fn test_binding_survives_suspension() {
        bind_session(Some(session_for("a@example.com")), async {
            assert_eq!(current_email(), "a@example.com");
            tokio::task::yield_now().await;
            assert_eq!(current_email(), "a@example.com");
            tokio::time::sleep(Duration::from_millis(1)).await;
            assert_eq!(current_email(), "a@example.com");
        })
        .await;
    }

    #[tokio::test]
    async fn test_binding_does_not_outlive_scope() {
        bind_session(Some(session_for("a@example.com")), async {}).await;
        assert!(current_session().is_none());
    }

    #[tokio::test]
    async fn test_anonymous_binding_reads_none() {
        bind_session(None, async {
            assert!(current_session().is_none());
        })
        .await;
    }

    #[tokio::test]
    async fn test_nested_binding_restores_outer() {
        bind_session(Some(session_for("outer@example.com")), async {
            assert_eq!(current_email(), "outer@example.com");

            bind_session(Some(session_for("inner@example.com")), async {
                assert_eq!(current_email(), "inner@example.com");
                tokio::task::yield_now().await;
                assert_eq!(current_email(), "inner@example.com");
            })
            .await;

            assert_eq!(current_email(), "outer@example.com");
        })
        .await;
    }

    #[tokio::test]
    async fn test_interleaved_futures_stay_isolated() {
        // #[tokio::test] runs on a single-threaded runtime: both futures are
        // polled by the same worker, so a binding leaking past its own future
        // would surface as a cross-read here.
        let run = |email: &'static str| {
            bind_session(Some(session_for(email)), async move {
                for _ in 0..32 {
                    assert_eq!(current_email(), email);
                    tokio::task::yield_now().await;
                }
            })
        };

        tokio::join!(run("one@example.com"), run("two@example.com"));
    }

    #[tokio::test]
    async fn test_spawned_tasks_stay_isolated() {
        let mut handles = Vec::new();
        for i in 0..8 {
            let email = format!("user{i}@example.com");
            handles.push(tokio::spawn(bind_session(
                Some(session_for(&email)),
                async move {
                    for _ in 0..16 {
                        assert_eq!(current_email(), email);
                        tokio::task::yield_now().await;
                    }
                },
            )));
        }
        for handle in handles {
            handle.await.unwrap();
        }
    }
}
