//! Generic dashboard route handler.
//!
//! The landing page for every authenticated user, vendor or not. It is also
//! the redirect target for users denied by the vendor access gate.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use vendor_portal_core::VendorStatus;

use crate::db::VendorRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Vendor summary for the dashboard template.
pub struct VendorView {
    pub business_name: String,
    pub status: VendorStatus,
}

/// Dashboard landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub email: String,
    pub vendor: Option<VendorView>,
}

/// Display the dashboard landing page.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse> {
    let vendor = VendorRepository::new(state.pool())
        .get_by_user_id(user.id)
        .await?
        .map(|profile| VendorView {
            business_name: profile.business_name,
            status: profile.status,
        });

    Ok(DashboardTemplate {
        email: user.email.to_string(),
        vendor,
    })
}
