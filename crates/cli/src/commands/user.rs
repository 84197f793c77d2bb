//! Portal account management commands.
//!
//! # Usage
//!
//! ```bash
//! vp-cli user create -e vendor@example.com -p "a strong password"
//! ```
//!
//! # Environment Variables
//!
//! - `PORTAL_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)

use vendor_portal::services::auth::AuthService;

use super::{CommandError, connect};

/// Create a new portal account with email and password.
///
/// Password requirements are the same as the registration form's.
///
/// # Errors
///
/// Returns `CommandError::Auth` if the email is invalid, the password is too
/// weak, or the email is already registered.
pub async fn create(email: &str, password: &str) -> Result<i32, CommandError> {
    let pool = connect().await?;

    tracing::info!("Creating portal account: {}", email);

    let user = AuthService::new(&pool)
        .register_with_password(email, password)
        .await?;

    tracing::info!(
        "Account created successfully! ID: {}, Email: {}",
        user.id,
        user.email
    );

    Ok(user.id.as_i32())
}
