//! Integration tests for the vendor orders page.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The portal server running (cargo run -p vendor-portal)
//! - `PORTAL_DATABASE_URL` set, for seeding vendor rows directly
//!
//! Run with: cargo test -p vendor-portal-integration-tests -- --ignored

use reqwest::StatusCode;

use vendor_portal_integration_tests::{
    client, portal_base_url, portal_pool, register_account, seed_brand, seed_vendor,
};

const TEST_PASSWORD: &str = "integration-test-password";

// ============================================================================
// Access Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running portal server"]
async fn test_orders_requires_login() {
    let client = client();
    let base_url = portal_base_url();

    let resp = client
        .get(format!("{base_url}/dashboard/orders"))
        .send()
        .await
        .expect("Failed to get orders page");

    assert!(resp.status().is_redirection());
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("Missing Location header");
    assert_eq!(location, "/auth/login?callbackUrl=%2Fdashboard%2Forders");
}

#[tokio::test]
#[ignore = "Requires running portal server and database access"]
async fn test_orders_without_vendor_profile_redirects_to_dashboard() {
    let client = client();
    let base_url = portal_base_url();

    register_account(&client, TEST_PASSWORD).await;

    let resp = client
        .get(format!("{base_url}/dashboard/orders"))
        .send()
        .await
        .expect("Failed to get orders page");

    assert!(resp.status().is_redirection());
    let location = resp
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("Missing Location header");
    assert_eq!(location, "/dashboard");
}

#[tokio::test]
#[ignore = "Requires running portal server and database access"]
async fn test_unapproved_vendor_redirects_to_dashboard() {
    let base_url = portal_base_url();
    let pool = portal_pool().await;

    for status in ["PENDING", "REJECTED"] {
        let client = client();
        let email = register_account(&client, TEST_PASSWORD).await;
        seed_vendor(&pool, &email, "Unapproved Goods", status, "10.00").await;

        let resp = client
            .get(format!("{base_url}/dashboard/orders"))
            .send()
            .await
            .expect("Failed to get orders page");

        assert!(resp.status().is_redirection(), "status {status}");
        let location = resp
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .expect("Missing Location header");
        assert_eq!(location, "/dashboard", "status {status}");
    }
}

// ============================================================================
// Approved Vendor Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running portal server and database access"]
async fn test_approved_vendor_sees_first_brand() {
    let client = client();
    let base_url = portal_base_url();
    let pool = portal_pool().await;

    let email = register_account(&client, TEST_PASSWORD).await;
    let vendor_id = seed_vendor(&pool, &email, "Acme Goods", "APPROVED", "12.50").await;
    let first_brand_id = seed_brand(&pool, vendor_id, "Acme Outdoor").await;
    seed_brand(&pool, vendor_id, "Acme Indoor").await;

    let resp = client
        .get(format!("{base_url}/dashboard/orders"))
        .send()
        .await
        .expect("Failed to get orders page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");

    assert!(body.contains("Acme Outdoor"));
    assert!(!body.contains("Acme Indoor"));
    assert!(body.contains(&format!(r#"data-brand-id="{first_brand_id}""#)));
    assert!(body.contains(r#"data-commission-rate="12.5""#));
}

#[tokio::test]
#[ignore = "Requires running portal server and database access"]
async fn test_approved_vendor_without_brands_shows_business_name() {
    let client = client();
    let base_url = portal_base_url();
    let pool = portal_pool().await;

    let email = register_account(&client, TEST_PASSWORD).await;
    seed_vendor(&pool, &email, "Brandless Goods", "APPROVED", "7.25").await;

    let resp = client
        .get(format!("{base_url}/dashboard/orders"))
        .send()
        .await
        .expect("Failed to get orders page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");

    assert!(body.contains("Brandless Goods"));
    assert!(!body.contains("data-brand-id"));
}
