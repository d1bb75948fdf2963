use std::env;

/// HTTP listener settings.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which session backend the server resolves sessions against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionBackend {
    /// Stateless signed tokens, verified locally.
    Jwt,
    /// In-process token store, for tests and embedded deployments.
    Memory,
}

impl SessionBackend {
    pub fn from_env() -> Self {
        match env::var("SESSION_BACKEND").as_deref() {
            Ok("memory") => SessionBackend::Memory,
            _ => SessionBackend::Jwt,
        }
    }
}
