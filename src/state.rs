use std::sync::Arc;

use fundboard_config::{AuthConfig, CorsConfig, JwtConfig, SessionBackend};
use fundboard_session::{JwtSessions, MemorySessions, SessionProvider};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionProvider>,
    pub auth_config: AuthConfig,
    pub cors_config: CorsConfig,
}

pub fn init_app_state() -> AppState {
    let auth_config = AuthConfig::from_env();

    let sessions: Arc<dyn SessionProvider> = match SessionBackend::from_env() {
        SessionBackend::Jwt => Arc::new(JwtSessions::new(
            JwtConfig::from_env(),
            auth_config.session_cookie.clone(),
        )),
        SessionBackend::Memory => {
            Arc::new(MemorySessions::new(auth_config.session_cookie.clone()))
        }
    };

    AppState {
        sessions,
        auth_config,
        cors_config: CorsConfig::from_env(),
    }
}
