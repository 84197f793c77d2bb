//! Domain models for the portal.

pub mod session;
pub mod user;
pub mod vendor;

pub use session::{CurrentUser, keys as session_keys};
pub use user::User;
pub use vendor::{Brand, OrdersPageParams, VendorAccess, VendorProfile};
