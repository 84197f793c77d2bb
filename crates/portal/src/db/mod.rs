//! Database operations for the portal `PostgreSQL`.
//!
//! # Tables (schema `portal`)
//!
//! - `users` - Portal authentication accounts
//! - `user_password` - Argon2 password hashes
//! - `vendor` - Vendor profiles (status, business name, commission rate)
//! - `brand` - Storefront identities owned by vendors
//!
//! Sessions live in `tower_sessions.session` (tower-sessions store).
//!
//! # Migrations
//!
//! Migrations are stored in `crates/portal/migrations/` and run via:
//! ```bash
//! cargo run -p vendor-portal-cli -- migrate
//! ```

pub mod users;
pub mod vendors;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use users::UserRepository;
pub use vendors::VendorRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
