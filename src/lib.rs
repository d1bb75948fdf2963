//! # Fundboard API
//!
//! Backend for the Fundboard admin dashboard: a request-scoped
//! authentication context and access-control pipeline built with Axum.
//!
//! ## Overview
//!
//! Every inbound request passes through a session-resolving middleware
//! layer before its handler runs:
//!
//! - **`load_session`** resolves the caller's session and binds it into a
//!   request-scoped context; anonymous callers are valid
//! - **`require_auth`** does the same but redirects unauthenticated callers
//!   to the sign-in page, carrying the originally requested path
//!
//! Handlers never receive the session as a parameter. They read it through
//! the `fundboard-context` guards (`current_session`, `current_user`,
//! `require_user`), which resolve against the binding made for exactly the
//! request being processed — bindings are isolated per request even under
//! concurrent load. Role-specific rules (for example "must be admin") are
//! enforced by the consuming route, not by the pipeline.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── fundboard-models     # User, Role, Session
//! ├── fundboard-config     # env-driven configuration
//! ├── fundboard-context    # request-scoped session binding + guards
//! └── fundboard-session    # session provider interface and adapters
//! src/
//! ├── middleware/          # load_session / require_auth layers
//! ├── modules/             # route modules (home, auth, settings, admin)
//! ├── router.rs            # route tree and layer composition
//! ├── state.rs             # shared application state
//! ├── logging.rs           # request logging middleware
//! └── utils/               # error type, redirect helpers
//! ```
//!
//! Each route module follows a consistent structure: `controller.rs` for
//! handlers, `model.rs` for DTOs, `router.rs` for the subtree.
//!
//! ## Session Backends
//!
//! The server resolves sessions against one of two providers, selected via
//! `SESSION_BACKEND`:
//!
//! | Backend  | Description                                    |
//! |----------|------------------------------------------------|
//! | `jwt`    | Stateless signed tokens, verified locally      |
//! | `memory` | In-process token store (tests, embedded use)   |
//!
//! A dev session token can be minted from the CLI:
//!
//! ```bash
//! cargo run -- issue-token admin@example.com "Admin User" admin
//! ```
//!
//! ## Security Considerations
//!
//! - A provider outage fails the request (502); it never degrades to
//!   anonymous access
//! - `require_user()` on a route without session middleware is a loud 500,
//!   never a silent anonymous default
//! - Unknown role strings never parse; a token carrying one resolves as
//!   anonymous

pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;

// Re-export workspace crates for convenience
pub use fundboard_config;
pub use fundboard_context;
pub use fundboard_models;
pub use fundboard_session;
