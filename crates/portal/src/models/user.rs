//! User domain types.
//!
//! These types represent validated domain objects separate from database row
//! types.

use chrono::{DateTime, Utc};

use vendor_portal_core::{Email, UserId};

/// A portal user (domain type).
///
/// A user account may or may not have an associated vendor profile; the
/// vendor directory decides that separately.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}
