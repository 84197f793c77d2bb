//! Integration tests for the vendor portal.
//!
//! # Running Tests
//!
//! ```bash
//! # Run migrations and start the portal
//! cargo run -p vendor-portal-cli -- migrate
//! cargo run -p vendor-portal
//!
//! # Run integration tests against it
//! cargo test -p vendor-portal-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `PORTAL_BASE_URL` - Base URL of the running portal (default
//!   `http://localhost:3002`)
//! - `PORTAL_DATABASE_URL` - `PostgreSQL` connection string, used to seed
//!   vendor rows directly (falls back to `DATABASE_URL`)

use reqwest::Client;
use sqlx::PgPool;

/// Base URL for the portal (configurable via environment).
#[must_use]
pub fn portal_base_url() -> String {
    std::env::var("PORTAL_BASE_URL").unwrap_or_else(|_| "http://localhost:3002".to_string())
}

/// HTTP client with a cookie store and redirects disabled.
///
/// Redirects are disabled so tests can assert on `Location` headers directly.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Connect to the portal database for seeding test data.
pub async fn portal_pool() -> PgPool {
    let database_url = std::env::var("PORTAL_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("PORTAL_DATABASE_URL or DATABASE_URL must be set");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to portal database")
}

/// Register a fresh account through the portal and leave its session cookie
/// in the client's cookie store. Returns the generated email.
pub async fn register_account(client: &Client, password: &str) -> String {
    let base_url = portal_base_url();
    let email = format!("integration-test-{}@example.com", uuid::Uuid::new_v4());

    let resp = client
        .post(format!("{base_url}/auth/register"))
        .form(&[
            ("email", email.as_str()),
            ("password", password),
            ("password_confirm", password),
        ])
        .send()
        .await
        .expect("Failed to register account");

    assert!(
        resp.status().is_redirection(),
        "Expected redirect after registration, got: {}",
        resp.status()
    );

    email
}

/// Seed a vendor profile for an account directly in the database.
///
/// Returns the vendor ID.
pub async fn seed_vendor(
    pool: &PgPool,
    email: &str,
    business_name: &str,
    status: &str,
    commission_rate: &str,
) -> i32 {
    let user_id = sqlx::query_scalar::<_, i32>("SELECT id FROM portal.users WHERE email = $1")
        .bind(email)
        .fetch_one(pool)
        .await
        .expect("Account not found for seeding");

    sqlx::query_scalar::<_, i32>(
        r"
        INSERT INTO portal.vendor (user_id, business_name, status, commission_rate)
        VALUES ($1, $2, $3, $4::numeric)
        RETURNING id
        ",
    )
    .bind(user_id)
    .bind(business_name)
    .bind(status)
    .bind(commission_rate)
    .fetch_one(pool)
    .await
    .expect("Failed to seed vendor")
}

/// Seed a brand for a vendor directly in the database.
pub async fn seed_brand(pool: &PgPool, vendor_id: i32, name: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        r"
        INSERT INTO portal.brand (vendor_id, name)
        VALUES ($1, $2)
        RETURNING id
        ",
    )
    .bind(vendor_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("Failed to seed brand")
}
