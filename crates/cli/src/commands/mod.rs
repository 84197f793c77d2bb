//! CLI command implementations.

pub mod migrate;
pub mod user;
pub mod vendor;

use sqlx::PgPool;
use thiserror::Error;

use vendor_portal::db::RepositoryError;
use vendor_portal::services::auth::AuthError;

/// Errors that can occur while running a CLI command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Authentication error (registration, password hashing).
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Repository error.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// No portal account with the given email.
    #[error("No account found for email: {0}")]
    UserNotFound(String),

    /// Commission rate could not be parsed or is out of range.
    #[error("Invalid commission rate: {0}")]
    InvalidRate(String),

    /// Vendor status string is not one of PENDING, APPROVED, REJECTED.
    #[error("Invalid status: {0}. Valid values: PENDING, APPROVED, REJECTED")]
    InvalidStatus(String),

    /// Email address is malformed.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
}

/// Connect to the portal database using `PORTAL_DATABASE_URL` (falling back
/// to `DATABASE_URL`).
pub(crate) async fn connect() -> Result<PgPool, CommandError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("PORTAL_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| CommandError::MissingEnvVar("PORTAL_DATABASE_URL"))?;

    tracing::info!("Connecting to portal database...");
    Ok(PgPool::connect(&database_url).await?)
}
