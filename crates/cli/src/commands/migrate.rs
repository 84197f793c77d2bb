//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! vp-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `PORTAL_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)
//!
//! Migration files live in `crates/portal/migrations/` and are embedded into
//! the binary at compile time.

use super::{CommandError, connect};

/// Run portal database migrations.
///
/// # Errors
///
/// Returns `CommandError::MissingEnvVar` if no database URL is configured,
/// `CommandError::Database` if the connection fails, or
/// `CommandError::Migration` if a migration fails to apply.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    tracing::info!("Running portal migrations...");
    sqlx::migrate!("../portal/migrations").run(&pool).await?;

    tracing::info!("Portal migrations complete!");
    Ok(())
}
