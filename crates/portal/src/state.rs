//! Application state shared across handlers.
//!
//! The session layer and database pool are injected here rather than living
//! in process-wide globals, so handlers stay testable in isolation.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::PortalConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to shared resources like the
/// database pool and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: PortalConfig,
    pool: PgPool,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: PortalConfig, pool: PgPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, pool }),
        }
    }

    /// Get a reference to the portal configuration.
    #[must_use]
    pub fn config(&self) -> &PortalConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }
}
