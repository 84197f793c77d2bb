//! Vendor domain types and the access-gate decision logic.
//!
//! The gate's outcome is modeled as a tagged [`VendorAccess`] value so callers
//! and tests can distinguish why access was denied, even though the portal
//! currently shows one generic dashboard redirect for every denied case.

use vendor_portal_core::{BrandId, CommissionRate, UserId, VendorId, VendorStatus};

/// A vendor profile (domain type).
///
/// Owned by the vendor-onboarding workflow; the portal reads it to decide
/// access and to resolve page parameters.
#[derive(Debug, Clone)]
pub struct VendorProfile {
    /// Unique vendor ID.
    pub id: VendorId,
    /// The user account this profile belongs to.
    pub user_id: UserId,
    /// Registered business name.
    pub business_name: String,
    /// Approval status.
    pub status: VendorStatus,
    /// Platform commission rate (exact decimal).
    pub commission_rate: CommissionRate,
    /// Brands in insertion order; the first is the page's active brand.
    pub brands: Vec<Brand>,
}

/// A named storefront identity owned by a vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    /// Unique brand ID.
    pub id: BrandId,
    /// Display name of the brand.
    pub name: String,
}

/// Outcome of resolving a user against the vendor directory.
#[derive(Debug, Clone)]
pub enum VendorAccess {
    /// The user never applied as a vendor.
    NoProfile,
    /// Application submitted, awaiting review.
    Pending,
    /// Application rejected.
    Rejected,
    /// Approved vendor; carries the full profile.
    Approved(VendorProfile),
}

impl VendorAccess {
    /// Classify a vendor directory lookup result.
    #[must_use]
    pub fn classify(profile: Option<VendorProfile>) -> Self {
        match profile {
            None => Self::NoProfile,
            Some(p) => match p.status {
                VendorStatus::Pending => Self::Pending,
                VendorStatus::Rejected => Self::Rejected,
                VendorStatus::Approved => Self::Approved(p),
            },
        }
    }

    /// Whether this outcome grants access to vendor-facing pages.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self, Self::Approved(_))
    }

    /// Extract the approved profile, if any.
    #[must_use]
    pub fn into_approved(self) -> Option<VendorProfile> {
        match self {
            Self::Approved(profile) => Some(profile),
            Self::NoProfile | Self::Pending | Self::Rejected => None,
        }
    }
}

/// Resolved parameters handed to the orders table component.
///
/// The commission rate is a floating-point view for display only; it must
/// never flow back into financial calculations or storage.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdersPageParams {
    /// Active brand ID; absent when the vendor has no brands yet.
    pub brand_id: Option<BrandId>,
    /// Active brand name, falling back to the registered business name.
    pub brand_name: String,
    /// Commission rate as a float, for display.
    pub commission_rate: f64,
}

impl OrdersPageParams {
    /// Resolve page parameters from an approved vendor's profile.
    ///
    /// The active brand is the first brand in insertion order. Brand-less
    /// vendors get the business name with no brand ID.
    #[must_use]
    pub fn resolve(profile: &VendorProfile) -> Self {
        let (brand_id, brand_name) = match profile.brands.first() {
            Some(brand) => (Some(brand.id), brand.name.clone()),
            None => (None, profile.business_name.clone()),
        };

        Self {
            brand_id,
            brand_name,
            commission_rate: profile.commission_rate.display_value(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn profile(status: VendorStatus, brands: Vec<Brand>) -> VendorProfile {
        VendorProfile {
            id: VendorId::new(1),
            user_id: UserId::new(10),
            business_name: "Acme Goods".to_owned(),
            status,
            commission_rate: CommissionRate::new("12.50".parse().unwrap()).unwrap(),
            brands,
        }
    }

    fn brand(id: i32, name: &str) -> Brand {
        Brand {
            id: BrandId::new(id),
            name: name.to_owned(),
        }
    }

    #[test]
    fn test_classify_no_profile() {
        let access = VendorAccess::classify(None);
        assert!(matches!(access, VendorAccess::NoProfile));
        assert!(!access.is_approved());
    }

    #[test]
    fn test_classify_pending_and_rejected_both_denied() {
        // PENDING and REJECTED must produce the same external outcome as
        // having no profile at all: access denied.
        let pending = VendorAccess::classify(Some(profile(VendorStatus::Pending, vec![])));
        let rejected = VendorAccess::classify(Some(profile(VendorStatus::Rejected, vec![])));
        let missing = VendorAccess::classify(None);

        assert!(matches!(pending, VendorAccess::Pending));
        assert!(matches!(rejected, VendorAccess::Rejected));
        assert_eq!(pending.is_approved(), missing.is_approved());
        assert_eq!(rejected.is_approved(), missing.is_approved());
        assert!(pending.into_approved().is_none());
        assert!(rejected.into_approved().is_none());
    }

    #[test]
    fn test_classify_approved_carries_profile() {
        let access = VendorAccess::classify(Some(profile(VendorStatus::Approved, vec![])));
        assert!(access.is_approved());
        let p = access.into_approved().unwrap();
        assert_eq!(p.business_name, "Acme Goods");
    }

    #[test]
    fn test_resolve_first_brand_wins() {
        let p = profile(
            VendorStatus::Approved,
            vec![brand(5, "Northwind"), brand(6, "Southbreeze")],
        );
        let params = OrdersPageParams::resolve(&p);
        assert_eq!(params.brand_id, Some(BrandId::new(5)));
        assert_eq!(params.brand_name, "Northwind");
    }

    #[test]
    fn test_resolve_business_name_fallback() {
        let p = profile(VendorStatus::Approved, vec![]);
        let params = OrdersPageParams::resolve(&p);
        assert_eq!(params.brand_id, None);
        assert_eq!(params.brand_name, "Acme Goods");
    }

    #[test]
    fn test_resolve_commission_rate_display_conversion() {
        let p = profile(VendorStatus::Approved, vec![]);
        let params = OrdersPageParams::resolve(&p);
        assert!((params.commission_rate - 12.5_f64).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resolve_preserves_exact_storage() {
        // The float view is derived; the profile keeps the exact decimal.
        let p = profile(VendorStatus::Approved, vec![]);
        let _ = OrdersPageParams::resolve(&p);
        assert_eq!(p.commission_rate.as_decimal(), Decimal::new(1250, 2));
    }
}
