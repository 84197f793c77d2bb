//! HTTP middleware stack for the portal.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, trace requests)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with `PostgreSQL` store)

pub mod auth;
pub mod session;

pub use auth::{OptionalAuth, RequireAuth, clear_current_user, login_redirect, set_current_user};
pub use session::create_session_layer;
