//! Authentication route handlers.
//!
//! Login, registration, and logout for portal accounts.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{AppError, Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Fallback target after login when no callback was requested.
const DEFAULT_POST_LOGIN_ROUTE: &str = "/dashboard";

// =============================================================================
// Form & Query Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    #[serde(rename = "callbackUrl")]
    pub callback_url: Option<String>,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Query parameters for the login page.
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub error: Option<String>,
    pub success: Option<String>,
    #[serde(rename = "callbackUrl")]
    pub callback_url: Option<String>,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub success: Option<String>,
    pub callback_url: Option<String>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
}

// =============================================================================
// Helpers
// =============================================================================

/// Pick the post-login redirect target.
///
/// Only local absolute paths are honored, which keeps the `callbackUrl`
/// parameter from becoming an open redirect.
fn post_login_target(callback: Option<&str>) -> &str {
    match callback {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => DEFAULT_POST_LOGIN_ROUTE,
    }
}

/// Build the login-failed redirect, preserving the callback.
fn login_failed_redirect(callback: Option<&str>) -> String {
    callback.map_or_else(
        || "/auth/login?error=credentials".to_owned(),
        |cb| {
            format!(
                "/auth/login?error=credentials&callbackUrl={}",
                urlencoding::encode(cb)
            )
        },
    )
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(Query(query): Query<LoginQuery>) -> impl IntoResponse {
    LoginTemplate {
        error: query.error,
        success: query.success,
        callback_url: query.callback_url,
    }
}

/// Handle login form submission.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let callback = form.callback_url.as_deref();

    match AuthService::new(state.pool())
        .login_with_password(&form.email, &form.password)
        .await
    {
        Ok(user) => {
            let current_user = CurrentUser {
                id: user.id,
                email: user.email.clone(),
            };
            set_current_user(&session, &current_user).await?;
            set_sentry_user(&user.id, Some(user.email.as_str()));

            Ok(Redirect::to(post_login_target(callback)).into_response())
        }
        Err(AuthError::InvalidCredentials | AuthError::InvalidEmail(_)) => {
            tracing::warn!("Login failed");
            Ok(Redirect::to(&login_failed_redirect(callback)).into_response())
        }
        Err(e) => Err(AppError::Auth(e)),
    }
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
pub async fn register_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    RegisterTemplate { error: query.error }
}

/// Handle registration form submission.
///
/// Creates the account and logs the user straight in. Becoming a vendor is a
/// separate onboarding step, not part of account creation.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    if form.password != form.password_confirm {
        return Ok(Redirect::to("/auth/register?error=password_mismatch").into_response());
    }

    match AuthService::new(state.pool())
        .register_with_password(&form.email, &form.password)
        .await
    {
        Ok(user) => {
            let current_user = CurrentUser {
                id: user.id,
                email: user.email.clone(),
            };
            set_current_user(&session, &current_user).await?;
            set_sentry_user(&user.id, Some(user.email.as_str()));

            Ok(Redirect::to(DEFAULT_POST_LOGIN_ROUTE).into_response())
        }
        Err(AuthError::UserAlreadyExists) => {
            Ok(Redirect::to("/auth/register?error=email_taken").into_response())
        }
        Err(AuthError::WeakPassword(_)) => {
            Ok(Redirect::to("/auth/register?error=password_too_short").into_response())
        }
        Err(AuthError::InvalidEmail(_)) => {
            Ok(Redirect::to("/auth/register?error=invalid_email").into_response())
        }
        Err(e) => Err(AppError::Auth(e)),
    }
}

// =============================================================================
// Logout Route
// =============================================================================

/// Handle logout.
///
/// Clears the user from the session and destroys the session itself.
pub async fn logout(session: Session) -> Result<Response> {
    clear_current_user(&session).await?;
    session.flush().await?;
    clear_sentry_user();

    Ok(Redirect::to("/").into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_login_target_local_path() {
        assert_eq!(
            post_login_target(Some("/dashboard/orders")),
            "/dashboard/orders"
        );
    }

    #[test]
    fn test_post_login_target_default() {
        assert_eq!(post_login_target(None), "/dashboard");
    }

    #[test]
    fn test_post_login_target_rejects_external() {
        assert_eq!(post_login_target(Some("https://evil.example")), "/dashboard");
        assert_eq!(post_login_target(Some("//evil.example")), "/dashboard");
        assert_eq!(post_login_target(Some("evil")), "/dashboard");
    }

    #[test]
    fn test_login_failed_redirect_preserves_callback() {
        assert_eq!(
            login_failed_redirect(Some("/dashboard/orders")),
            "/auth/login?error=credentials&callbackUrl=%2Fdashboard%2Forders"
        );
        assert_eq!(login_failed_redirect(None), "/auth/login?error=credentials");
    }
}
