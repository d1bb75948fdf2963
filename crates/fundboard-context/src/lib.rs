//! # Fundboard Context
//!
//! Request-scoped session propagation for the Fundboard dashboard API.
//!
//! The middleware pipeline resolves a caller's session once per request and
//! binds it here. Everything running inside that request's call graph can
//! then read it through the guard functions without the session being
//! threaded through every signature:
//!
//! ```ignore
//! use fundboard_context::{bind_session, require_user};
//!
//! bind_session(session, async {
//!     // ... arbitrarily deep in handler code:
//!     let session = require_user()?;
//! })
//! .await;
//! ```
//!
//! The binding is attached to the request's future, not to an OS thread, so
//! it survives `.await` suspension and stays isolated per logical request
//! even when one worker thread interleaves many requests.
//!
//! # Modules
//!
//! - [`store`]: the task-local binding itself
//! - [`guards`]: accessors for the bound session

pub mod guards;
pub mod store;

// Re-export commonly used items at crate root
pub use guards::{ContextMisuse, current_session, current_user, require_user};
pub use store::bind_session;
