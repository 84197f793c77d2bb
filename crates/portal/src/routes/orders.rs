//! Orders page behind the vendor access gate.
//!
//! The gate is a sequence of short-circuiting checks per request:
//!
//! 1. No authenticated session -> redirect to login with `callbackUrl`
//!    (no database read on this path).
//! 2. No vendor profile, or profile not approved -> redirect to the generic
//!    dashboard. The distinct causes are kept apart in [`VendorAccess`] but
//!    deliberately collapse to one user-visible outcome.
//! 3. Approved -> resolve the page parameters and render.
//!
//! The gate only reads; vendor mutations belong to the onboarding workflow.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::http::Uri;
use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::Session;

use vendor_portal_core::BrandId;

use crate::db::VendorRepository;
use crate::error::Result;
use crate::filters;
use crate::middleware::login_redirect;
use crate::models::{CurrentUser, OrdersPageParams, VendorAccess, session_keys};
use crate::state::AppState;

/// Redirect target for authenticated users denied vendor access.
const DASHBOARD_ROUTE: &str = "/dashboard";

/// Orders page template.
///
/// Renders the page shell; the orders table itself is a client-rendered
/// component that receives these parameters and manages its own listing.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/orders.html")]
pub struct OrdersTemplate {
    pub brand_id: Option<BrandId>,
    pub brand_name: String,
    pub commission_rate: f64,
}

impl From<OrdersPageParams> for OrdersTemplate {
    fn from(params: OrdersPageParams) -> Self {
        Self {
            brand_id: params.brand_id,
            brand_name: params.brand_name,
            commission_rate: params.commission_rate,
        }
    }
}

/// Display the orders page, or redirect per the access gate.
pub async fn orders(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> Result<Response> {
    // Session check comes first: unauthenticated requests must not reach
    // the vendor directory.
    let Some(user) = session
        .get::<CurrentUser>(session_keys::CURRENT_USER)
        .await?
    else {
        return Ok(Redirect::to(&login_redirect(uri.path())).into_response());
    };

    let profile = VendorRepository::new(state.pool())
        .get_by_user_id(user.id)
        .await?;

    match VendorAccess::classify(profile) {
        VendorAccess::Approved(profile) => {
            let params = OrdersPageParams::resolve(&profile);
            tracing::debug!(vendor_id = %profile.id, "rendering orders page");
            Ok(OrdersTemplate::from(params).into_response())
        }
        denied @ (VendorAccess::NoProfile | VendorAccess::Pending | VendorAccess::Rejected) => {
            tracing::debug!(user_id = %user.id, ?denied, "vendor access denied");
            Ok(Redirect::to(DASHBOARD_ROUTE).into_response())
        }
    }
}
