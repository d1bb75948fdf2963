//! # Fundboard Session
//!
//! Session provider interface and adapters for the Fundboard dashboard API.
//!
//! A [`SessionProvider`] answers one question per request: given the inbound
//! headers, who is calling? Absent, malformed, or expired credentials are a
//! `None` answer, not an error; a provider error means the backend itself
//! could not answer and the request must fail rather than proceed as
//! anonymous.
//!
//! Two adapters ship with the crate:
//!
//! - [`JwtSessions`]: stateless signed session tokens, verified locally
//! - [`MemorySessions`]: in-process token store for tests and embedded
//!   deployments
//!
//! # Example
//!
//! ```ignore
//! use fundboard_config::JwtConfig;
//! use fundboard_session::{JwtSessions, SessionProvider, create_session_token};
//!
//! let config = JwtConfig::from_env();
//! let token = create_session_token(&user, &config)?;
//!
//! let provider = JwtSessions::new(config, "fundboard_session");
//! let session = provider.resolve_session(&headers).await?;
//! ```

pub mod claims;
pub mod credentials;
pub mod jwt;
pub mod memory;
pub mod provider;

// Re-export commonly used types at crate root
pub use claims::SessionClaims;
pub use credentials::session_token;
pub use jwt::{JwtSessions, TokenError, create_session_token, verify_session_token};
pub use memory::MemorySessions;
pub use provider::{ProviderError, SessionProvider};
