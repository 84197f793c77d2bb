//! Vendor directory repository.
//!
//! Reads vendor profiles and their brands for the access gate, and provides
//! the write operations used by the management CLI. The gate itself performs
//! reads only.

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::PgPool;

use vendor_portal_core::{BrandId, CommissionRate, UserId, VendorId, VendorStatus};

use super::RepositoryError;
use crate::models::vendor::{Brand, VendorProfile};

/// Database row for a vendor profile.
#[derive(sqlx::FromRow)]
struct VendorRow {
    id: i32,
    user_id: i32,
    business_name: String,
    status: String,
    commission_rate: Decimal,
}

impl VendorRow {
    fn into_profile(self, brands: Vec<Brand>) -> Result<VendorProfile, RepositoryError> {
        let status = VendorStatus::from_str(&self.status)
            .map_err(|e| RepositoryError::DataCorruption(format!("vendor {}: {e}", self.id)))?;

        let commission_rate = CommissionRate::new(self.commission_rate).map_err(|e| {
            RepositoryError::DataCorruption(format!("vendor {}: {e}", self.id))
        })?;

        Ok(VendorProfile {
            id: VendorId::new(self.id),
            user_id: UserId::new(self.user_id),
            business_name: self.business_name,
            status,
            commission_rate,
            brands,
        })
    }
}

/// Database row for a brand.
#[derive(sqlx::FromRow)]
struct BrandRow {
    id: i32,
    name: String,
}

impl From<BrandRow> for Brand {
    fn from(row: BrandRow) -> Self {
        Self {
            id: BrandId::new(row.id),
            name: row.name,
        }
    }
}

/// Repository for vendor directory operations.
pub struct VendorRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> VendorRepository<'a> {
    /// Create a new vendor repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get the vendor profile for a user, including its brands.
    ///
    /// Brands are returned in insertion order; the first one is the page's
    /// active brand.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored status or
    /// commission rate is invalid.
    pub async fn get_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<VendorProfile>, RepositoryError> {
        let row = sqlx::query_as::<_, VendorRow>(
            r"
            SELECT id, user_id, business_name, status, commission_rate
            FROM portal.vendor
            WHERE user_id = $1
            ",
        )
        .bind(user_id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let brands = self.get_brands(VendorId::new(row.id)).await?;
        Ok(Some(row.into_profile(brands)?))
    }

    /// Get a vendor's brands in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_brands(&self, vendor_id: VendorId) -> Result<Vec<Brand>, RepositoryError> {
        let rows = sqlx::query_as::<_, BrandRow>(
            r"
            SELECT id, name
            FROM portal.brand
            WHERE vendor_id = $1
            ORDER BY created_at ASC, id ASC
            ",
        )
        .bind(vendor_id.as_i32())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Brand::from).collect())
    }

    /// Create a vendor profile for a user (status starts as `PENDING`).
    ///
    /// Used by the onboarding tooling, not by the gate.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the user already has a profile.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        user_id: UserId,
        business_name: &str,
        commission_rate: CommissionRate,
    ) -> Result<VendorProfile, RepositoryError> {
        let row = sqlx::query_as::<_, VendorRow>(
            r"
            INSERT INTO portal.vendor (user_id, business_name, status, commission_rate)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, business_name, status, commission_rate
            ",
        )
        .bind(user_id.as_i32())
        .bind(business_name)
        .bind(VendorStatus::Pending.to_string())
        .bind(commission_rate.as_decimal())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("user already has a vendor profile".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        row.into_profile(Vec::new())
    }

    /// Update a vendor's approval status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the vendor doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_status(
        &self,
        vendor_id: VendorId,
        status: VendorStatus,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE portal.vendor
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            ",
        )
        .bind(status.to_string())
        .bind(vendor_id.as_i32())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Add a brand to a vendor.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including
    /// when the vendor doesn't exist).
    pub async fn add_brand(
        &self,
        vendor_id: VendorId,
        name: &str,
    ) -> Result<Brand, RepositoryError> {
        let row = sqlx::query_as::<_, BrandRow>(
            r"
            INSERT INTO portal.brand (vendor_id, name)
            VALUES ($1, $2)
            RETURNING id, name
            ",
        )
        .bind(vendor_id.as_i32())
        .bind(name)
        .fetch_one(self.pool)
        .await?;

        Ok(Brand::from(row))
    }
}
