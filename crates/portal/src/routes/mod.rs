//! HTTP route handlers for the portal.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                    - Home page
//! GET  /health              - Liveness check
//! GET  /health/ready        - Readiness check (verifies database)
//!
//! # Auth
//! GET  /auth/login          - Login page (accepts callbackUrl)
//! POST /auth/login          - Login action
//! GET  /auth/register       - Registration page
//! POST /auth/register       - Registration action
//! POST /auth/logout         - Logout action
//!
//! # Dashboard (requires auth)
//! GET  /dashboard           - Generic dashboard landing
//! GET  /dashboard/orders    - Orders page, behind the vendor access gate
//! ```

pub mod auth;
pub mod dashboard;
pub mod home;
pub mod orders;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Create all routes for the portal.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        // Auth
        .route("/auth/login", get(auth::login_page).post(auth::login))
        .route(
            "/auth/register",
            get(auth::register_page).post(auth::register),
        )
        .route("/auth/logout", post(auth::logout))
        // Dashboard
        .route("/dashboard", get(dashboard::index))
        .route("/dashboard/orders", get(orders::orders))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use secrecy::SecretString;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    use crate::config::{PortalConfig, SentryConfig};
    use crate::state::AppState;

    /// Build the full router with a memory session store and a lazy pool.
    ///
    /// The pool never connects unless a handler actually queries it, which
    /// lets these tests assert that certain paths issue no database reads.
    fn test_app() -> axum::Router {
        let config = PortalConfig {
            database_url: SecretString::from("postgres://localhost/unreachable"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3002,
            base_url: "http://localhost:3002".to_string(),
            session_secret: SecretString::from("kR8vL2mQ9xT4wN7bJ1pF6hD3sG0yC5zA"),
            sentry: SentryConfig::default(),
        };
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unreachable")
            .unwrap();
        let state = AppState::new(config, pool);
        let session_layer = SessionManagerLayer::new(MemoryStore::default());

        axum::Router::new()
            .merge(super::routes())
            .layer(session_layer)
            .with_state(state)
    }

    async fn get_response(path: &str) -> axum::response::Response {
        test_app()
            .oneshot(
                Request::builder()
                    .uri(path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_is_ok() {
        let response = get_response("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_home_renders() {
        let response = get_response("/").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_login_page_renders() {
        let response = get_response("/auth/login").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_orders_unauthenticated_redirects_with_callback() {
        // The gate must redirect before touching the database: the lazy pool
        // in this app points at an unreachable server, so any query would
        // fail the request instead of redirecting.
        let response = get_response("/dashboard/orders").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/auth/login?callbackUrl=%2Fdashboard%2Forders"
        );
    }

    #[tokio::test]
    async fn test_dashboard_unauthenticated_redirects_to_login() {
        let response = get_response("/dashboard").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/auth/login?callbackUrl=%2Fdashboard"
        );
    }
}
