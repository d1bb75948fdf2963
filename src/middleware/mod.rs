//! Middleware for request processing.
//!
//! This module contains the pre-handler interceptors that resolve and bind
//! the caller's session:
//!
//! - [`auth::load_session`]: bind the session, anonymous allowed
//! - [`auth::require_auth`]: bind the session or redirect to sign-in
//!
//! # Request Flow
//!
//! 1. The router attaches one of the layers to a route subtree
//! 2. The layer resolves the session via the configured provider
//! 3. The session is bound into the request context for the rest of the
//!    request
//! 4. Handlers read it through the `fundboard-context` guards; role checks
//!    are the consuming route's responsibility, not the pipeline's

pub mod auth;
