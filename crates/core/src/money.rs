//! Money value object.
//!
//! Amounts are stored in the smallest currency unit (cents) to keep
//! arithmetic exact; only discount application rounds, to the nearest cent.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A non-negative monetary amount in cents.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Build an amount from whole currency units plus cents.
    ///
    /// Fails validation when `cents >= 100` (e.g. `$20,000.50` is
    /// `from_major(20_000, 50)`).
    pub fn from_major(units: u64, cents: u8) -> DomainResult<Self> {
        if cents >= 100 {
            return Err(DomainError::validation(format!(
                "cents part must be below 100, got {cents}"
            )));
        }
        Ok(Self(units * 100 + u64::from(cents)))
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    /// The amount after applying a percentage discount, rounded to the cent.
    ///
    /// Fails validation unless `0.0 <= percent <= 100.0`.
    pub fn discounted(self, percent: f64) -> DomainResult<Money> {
        if !(0.0..=100.0).contains(&percent) || percent.is_nan() {
            return Err(DomainError::validation(format!(
                "discount percent must be between 0 and 100, got {percent}"
            )));
        }
        let reduced = (self.0 as f64 * (1.0 - percent / 100.0)).round() as u64;
        Ok(Money(reduced))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_major_combines_units_and_cents() {
        let price = Money::from_major(20_000, 50).unwrap();
        assert_eq!(price.cents(), 2_000_050);
        assert_eq!(price.to_string(), "$20000.50");
    }

    #[test]
    fn from_major_rejects_overflowing_cents() {
        assert!(matches!(
            Money::from_major(1, 100),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn discount_reduces_amount() {
        let price = Money::from_cents(2_000_050);
        let reduced = price.discounted(10.0).unwrap();
        assert_eq!(reduced.cents(), 1_800_045);
    }

    #[test]
    fn discount_rejects_out_of_range_percent() {
        let price = Money::from_cents(100);
        assert!(price.discounted(-1.0).is_err());
        assert!(price.discounted(100.5).is_err());
        assert!(price.discounted(f64::NAN).is_err());
    }

    proptest! {
        /// Property: a valid discount never increases the amount, and a full
        /// discount always zeroes it.
        #[test]
        fn discount_never_increases(cents in 0u64..10_000_000, percent in 0.0f64..=100.0) {
            let price = Money::from_cents(cents);
            let reduced = price.discounted(percent).unwrap();
            prop_assert!(reduced <= price);
            prop_assert_eq!(price.discounted(100.0).unwrap(), Money::ZERO);
        }
    }
}
