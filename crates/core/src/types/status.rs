//! Vendor approval status.

use serde::{Deserialize, Serialize};

/// Approval status of a vendor account.
///
/// Set by the vendor-onboarding workflow; the portal only reads it. A vendor
/// may use vendor-facing pages only while `Approved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VendorStatus {
    /// Application submitted, not yet reviewed.
    #[default]
    Pending,
    /// Application approved; vendor may sell.
    Approved,
    /// Application rejected.
    Rejected,
}

impl VendorStatus {
    /// Whether this status permits access to vendor-facing pages.
    #[must_use]
    pub const fn is_approved(self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl std::fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Approved => write!(f, "APPROVED"),
            Self::Rejected => write!(f, "REJECTED"),
        }
    }
}

impl std::str::FromStr for VendorStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(format!("invalid vendor status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_is_approved() {
        assert!(VendorStatus::Approved.is_approved());
        assert!(!VendorStatus::Pending.is_approved());
        assert!(!VendorStatus::Rejected.is_approved());
    }

    #[test]
    fn test_display_from_str_roundtrip() {
        for status in [
            VendorStatus::Pending,
            VendorStatus::Approved,
            VendorStatus::Rejected,
        ] {
            let text = status.to_string();
            assert_eq!(VendorStatus::from_str(&text).unwrap(), status);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(VendorStatus::from_str("approved").is_err());
        assert!(VendorStatus::from_str("").is_err());
    }
}
