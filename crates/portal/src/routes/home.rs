//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::filters;
use crate::middleware::OptionalAuth;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub logged_in: bool,
}

/// Display the home page.
pub async fn home(OptionalAuth(user): OptionalAuth) -> impl IntoResponse {
    HomeTemplate {
        logged_in: user.is_some(),
    }
}
