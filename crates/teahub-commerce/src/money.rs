//! Money type for representing prices.
//!
//! The storefront only sells in Indian rupees, so amounts are stored as
//! integer paise and formatted with the rupee sign.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rupee sign used when formatting amounts.
pub const RUPEE_SYMBOL: &str = "\u{20b9}";

const PAISE_PER_RUPEE: i64 = 100;

/// A monetary value in Indian rupees.
///
/// Amounts are stored in paise to avoid floating-point precision issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in paise.
    pub amount_paise: i64,
}

impl Money {
    /// Create a new Money value from paise.
    pub const fn new(amount_paise: i64) -> Self {
        Self { amount_paise }
    }

    /// Create a Money value from whole rupees.
    ///
    /// ```
    /// use teahub_commerce::money::Money;
    /// let price = Money::rupees(599);
    /// assert_eq!(price.amount_paise, 59_900);
    /// ```
    pub const fn rupees(rupees: i64) -> Self {
        Self::new(rupees * PAISE_PER_RUPEE)
    }

    /// Whole rupee part of the amount.
    pub fn whole_rupees(&self) -> i64 {
        self.amount_paise / PAISE_PER_RUPEE
    }

    /// Paise left over after the whole rupees.
    pub fn paise_part(&self) -> i64 {
        (self.amount_paise % PAISE_PER_RUPEE).abs()
    }

    /// Format as a display string (e.g., "₹599" or "₹49.50").
    pub fn display(&self) -> String {
        format!("{}{}", RUPEE_SYMBOL, self.display_amount())
    }

    /// Format without the symbol, dropping the paise when they are zero.
    pub fn display_amount(&self) -> String {
        if self.paise_part() == 0 {
            self.whole_rupees().to_string()
        } else {
            format!("{}.{:02}", self.whole_rupees(), self.paise_part())
        }
    }

    /// Percentage saved relative to a higher original price.
    ///
    /// Returns `None` when `original` is not higher than `self`.
    pub fn discount_from(&self, original: &Money) -> Option<f64> {
        if original.amount_paise > self.amount_paise && original.amount_paise > 0 {
            let savings = original.amount_paise - self.amount_paise;
            Some(savings as f64 / original.amount_paise as f64 * 100.0)
        } else {
            None
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_rupees() {
        let m = Money::rupees(449);
        assert_eq!(m.amount_paise, 44_900);
        assert_eq!(m.whole_rupees(), 449);
        assert_eq!(m.paise_part(), 0);
    }

    #[test]
    fn test_money_display_whole() {
        assert_eq!(Money::rupees(599).display(), "\u{20b9}599");
        assert_eq!(Money::rupees(599).to_string(), "\u{20b9}599");
    }

    #[test]
    fn test_money_display_with_paise() {
        assert_eq!(Money::new(4_950).display(), "\u{20b9}49.50");
        assert_eq!(Money::new(4_905).display_amount(), "49.05");
    }

    #[test]
    fn test_discount_from_original() {
        let price = Money::rupees(75);
        let original = Money::rupees(100);
        let pct = price.discount_from(&original).unwrap();
        assert!((pct - 25.0).abs() < 0.001);

        assert!(original.discount_from(&price).is_none());
        assert!(price.discount_from(&price).is_none());
    }
}
