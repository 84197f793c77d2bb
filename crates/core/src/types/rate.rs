//! Commission rate type.
//!
//! Commission rates are stored as exact decimals so financial records never
//! accumulate rounding error. The only floating-point view is
//! [`CommissionRate::display_value`], which exists for presentation and must
//! never be fed back into calculations or storage.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`CommissionRate`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CommissionRateError {
    /// The rate is outside the 0-100 percent range.
    #[error("commission rate must be between 0 and 100 percent (got {0})")]
    OutOfRange(Decimal),
}

/// The percentage fee retained by the platform on a vendor's sales.
///
/// Wraps an exact [`Decimal`] between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommissionRate(Decimal);

impl CommissionRate {
    /// Create a commission rate from a decimal percentage.
    ///
    /// # Errors
    ///
    /// Returns [`CommissionRateError::OutOfRange`] if the value is not within
    /// 0-100 inclusive.
    pub fn new(percent: Decimal) -> Result<Self, CommissionRateError> {
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(CommissionRateError::OutOfRange(percent));
        }
        Ok(Self(percent))
    }

    /// Get the exact decimal percentage.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Lossy floating-point view of the rate, for display only.
    ///
    /// One-directional: the result must never be written back to storage or
    /// used in financial arithmetic.
    #[must_use]
    pub fn display_value(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

impl std::fmt::Display for CommissionRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_in_range() {
        let rate = CommissionRate::new(Decimal::new(1250, 2)).unwrap();
        assert_eq!(rate.as_decimal(), Decimal::new(1250, 2));
    }

    #[test]
    fn test_new_out_of_range() {
        assert!(CommissionRate::new(Decimal::new(-1, 0)).is_err());
        assert!(CommissionRate::new(Decimal::new(10050, 2)).is_err());
        assert!(CommissionRate::new(Decimal::ZERO).is_ok());
        assert!(CommissionRate::new(Decimal::ONE_HUNDRED).is_ok());
    }

    #[test]
    fn test_display_value_conversion() {
        // "12.50" stored exactly, displayed as 12.5
        let rate = CommissionRate::new("12.50".parse().unwrap()).unwrap();
        assert!((rate.display_value() - 12.5_f64).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_keeps_stored_scale() {
        let rate = CommissionRate::new("12.50".parse().unwrap()).unwrap();
        assert_eq!(rate.to_string(), "12.50");
    }
}
