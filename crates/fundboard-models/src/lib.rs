//! # Fundboard Models
//!
//! Domain models shared across the Fundboard dashboard API.
//!
//! This crate holds the types the authentication core passes around:
//!
//! - [`users`]: user identity and the role used for route gating
//! - [`sessions`]: the per-request resolved session state

pub mod sessions;
pub mod users;

// Re-export commonly used types at crate root
pub use sessions::Session;
pub use users::{ParseRoleError, Role, User};
