//! # Fundboard Config
//!
//! Configuration types for the Fundboard dashboard API.
//!
//! This crate provides configuration structures loaded from environment
//! variables, each with documented defaults suitable for development:
//!
//! - [`auth`]: sign-in routing and session cookie settings
//! - [`jwt`]: signed session token configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: HTTP listener settings and session backend selection
//!
//! # Example
//!
//! ```ignore
//! use fundboard_config::{AuthConfig, CorsConfig, JwtConfig, ServerConfig};
//!
//! // Load all configs from environment
//! let auth_config = AuthConfig::from_env();
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod auth;
pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use auth::AuthConfig;
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::{ServerConfig, SessionBackend};
