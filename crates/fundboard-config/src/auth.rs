use std::env;

/// Route-level authentication settings.
///
/// Controls where unauthenticated and under-privileged callers are sent,
/// and which cookie carries the session token.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// Path of the sign-in page unauthenticated callers are redirected to.
    pub sign_in_path: String,
    /// Query parameter carrying the originally requested path through the
    /// sign-in round trip.
    pub redirect_param: String,
    /// Landing page for already-authenticated callers of the auth pages.
    pub admin_home: String,
    /// Safe fallback for authenticated callers with an insufficient role.
    pub fallback_path: String,
    /// Name of the cookie carrying the session token.
    pub session_cookie: String,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            sign_in_path: env::var("AUTH_SIGN_IN_PATH")
                .unwrap_or_else(|_| "/auth/sign-in".to_string()),
            redirect_param: env::var("AUTH_REDIRECT_PARAM")
                .unwrap_or_else(|_| "redirectTo".to_string()),
            admin_home: env::var("AUTH_ADMIN_HOME").unwrap_or_else(|_| "/admin".to_string()),
            fallback_path: env::var("AUTH_FALLBACK_PATH").unwrap_or_else(|_| "/".to_string()),
            session_cookie: env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| "fundboard_session".to_string()),
        }
    }
}
