//! Integration tests for portal authentication.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The portal server running (cargo run -p vendor-portal)
//!
//! Run with: cargo test -p vendor-portal-integration-tests -- --ignored

use reqwest::StatusCode;

use vendor_portal_integration_tests::{client, portal_base_url, register_account};

const TEST_PASSWORD: &str = "integration-test-password";

// ============================================================================
// Health Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running portal server"]
async fn test_health_endpoints() {
    let client = client();
    let base_url = portal_base_url();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to get health");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/health/ready"))
        .send()
        .await
        .expect("Failed to get readiness");
    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Registration & Login Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running portal server"]
async fn test_register_logs_user_in() {
    let client = client();
    let base_url = portal_base_url();

    let email = register_account(&client, TEST_PASSWORD).await;

    // The session cookie from registration grants dashboard access
    let resp = client
        .get(format!("{base_url}/dashboard"))
        .send()
        .await
        .expect("Failed to get dashboard");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains(&email));
}

#[tokio::test]
#[ignore = "Requires running portal server"]
async fn test_login_with_wrong_password() {
    let client = client();
    let base_url = portal_base_url();

    let email = register_account(&client, TEST_PASSWORD).await;

    // A fresh client, so no session cookie carries over
    let client = vendor_portal_integration_tests::client();
    let resp = client
        .post(format!("{base_url}/auth/login"))
        .form(&[("email", email.as_str()), ("password", "wrong password")])
        .send()
        .await
        .expect("Failed to post login");

    assert!(resp.status().is_redirection());
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("Missing Location header");
    assert!(location.contains("/auth/login?error=credentials"));
}

#[tokio::test]
#[ignore = "Requires running portal server"]
async fn test_login_follows_callback_url() {
    let client = client();
    let base_url = portal_base_url();

    let email = register_account(&client, TEST_PASSWORD).await;

    let client = vendor_portal_integration_tests::client();
    let resp = client
        .post(format!("{base_url}/auth/login"))
        .form(&[
            ("email", email.as_str()),
            ("password", TEST_PASSWORD),
            ("callbackUrl", "/dashboard/orders"),
        ])
        .send()
        .await
        .expect("Failed to post login");

    assert!(resp.status().is_redirection());
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("Missing Location header");
    assert_eq!(location, "/dashboard/orders");
}

// ============================================================================
// Logout Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running portal server"]
async fn test_logout_destroys_session() {
    let client = client();
    let base_url = portal_base_url();

    register_account(&client, TEST_PASSWORD).await;

    let resp = client
        .post(format!("{base_url}/auth/logout"))
        .send()
        .await
        .expect("Failed to post logout");
    assert!(resp.status().is_redirection());

    // Dashboard now redirects back to login
    let resp = client
        .get(format!("{base_url}/dashboard"))
        .send()
        .await
        .expect("Failed to get dashboard");

    assert!(resp.status().is_redirection());
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("Missing Location header");
    assert!(location.starts_with("/auth/login"));
}
