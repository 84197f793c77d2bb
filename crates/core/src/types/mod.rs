//! Shared domain types.

pub mod email;
pub mod id;
pub mod rate;
pub mod status;

pub use email::{Email, EmailError};
pub use id::{BrandId, UserId, VendorId};
pub use rate::{CommissionRate, CommissionRateError};
pub use status::VendorStatus;
