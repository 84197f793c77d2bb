//! Vendor directory management commands.
//!
//! # Usage
//!
//! ```bash
//! # Create a vendor profile for an existing account (starts as PENDING)
//! vp-cli vendor create -e vendor@example.com -b "Acme Goods" -c 12.50
//!
//! # Approve or reject a vendor
//! vp-cli vendor set-status -v 1 -s APPROVED
//!
//! # Add a brand (the earliest-created brand is the active one on vendor pages)
//! vp-cli vendor add-brand -v 1 -n "Acme Outdoor"
//! ```
//!
//! # Environment Variables
//!
//! - `PORTAL_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)

use std::str::FromStr;

use rust_decimal::Decimal;

use vendor_portal::db::{UserRepository, VendorRepository};
use vendor_portal_core::{CommissionRate, Email, VendorId, VendorStatus};

use super::{CommandError, connect};

/// Create a vendor profile for an existing portal account.
///
/// The profile starts with status `PENDING` and no brands.
///
/// # Errors
///
/// Returns `CommandError::UserNotFound` if no account exists for the email,
/// `CommandError::InvalidRate` if the commission rate is malformed or out of
/// the 0 to 100 range, or `CommandError::Repository` if the account already
/// has a vendor profile.
pub async fn create(
    email: &str,
    business_name: &str,
    commission_rate: &str,
) -> Result<i32, CommandError> {
    let email = Email::parse(email).map_err(|e| CommandError::InvalidEmail(e.to_string()))?;

    let rate = Decimal::from_str(commission_rate)
        .map_err(|_| CommandError::InvalidRate(commission_rate.to_owned()))?;
    let rate =
        CommissionRate::new(rate).map_err(|e| CommandError::InvalidRate(e.to_string()))?;

    let pool = connect().await?;

    let user = UserRepository::new(&pool)
        .get_by_email(&email)
        .await?
        .ok_or_else(|| CommandError::UserNotFound(email.to_string()))?;

    tracing::info!("Creating vendor profile: {} ({})", business_name, email);

    let profile = VendorRepository::new(&pool)
        .create(user.id, business_name, rate)
        .await?;

    tracing::info!(
        "Vendor created successfully! ID: {}, Business: {}, Status: {}",
        profile.id,
        profile.business_name,
        profile.status
    );

    Ok(profile.id.as_i32())
}

/// Update a vendor's approval status.
///
/// # Errors
///
/// Returns `CommandError::InvalidStatus` if the status string is not one of
/// `PENDING`, `APPROVED`, `REJECTED`, or `CommandError::Repository` if the
/// vendor doesn't exist.
pub async fn set_status(vendor_id: i32, status: &str) -> Result<(), CommandError> {
    let status = VendorStatus::from_str(status)
        .map_err(|_| CommandError::InvalidStatus(status.to_owned()))?;

    let pool = connect().await?;

    VendorRepository::new(&pool)
        .set_status(VendorId::new(vendor_id), status)
        .await?;

    tracing::info!("Vendor {} status set to {}", vendor_id, status);

    Ok(())
}

/// Add a brand to a vendor.
///
/// # Errors
///
/// Returns `CommandError::Repository` if the insert fails, including when
/// the vendor doesn't exist.
pub async fn add_brand(vendor_id: i32, name: &str) -> Result<i32, CommandError> {
    let pool = connect().await?;

    let brand = VendorRepository::new(&pool)
        .add_brand(VendorId::new(vendor_id), name)
        .await?;

    tracing::info!(
        "Brand added successfully! ID: {}, Name: {}, Vendor: {}",
        brand.id,
        brand.name,
        vendor_id
    );

    Ok(brand.id.as_i32())
}
