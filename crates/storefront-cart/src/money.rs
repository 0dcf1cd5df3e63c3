//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The storefront prices
//! everything in US dollars, so there is no currency tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monetary value in US cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal dollar amount.
    ///
    /// ```
    /// use storefront_cart::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// Zero dollars.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal dollar value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format for display (e.g. "$1,049.99").
    pub fn display(&self) -> String {
        format_currency(*self)
    }

    /// Add another amount, returning None on overflow.
    pub fn checked_add(&self, other: &Money) -> Option<Money> {
        self.amount_cents.checked_add(other.amount_cents).map(Money::new)
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn checked_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents.checked_mul(factor).map(Money::new)
    }

    /// Sum an iterator of Money values, returning None on overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>) -> Option<Money> {
        iter.try_fold(Money::zero(), |acc, m| acc.checked_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Format an amount the way an en-US storefront shows prices.
///
/// Thousands are grouped with commas and cents are always printed:
/// `$0.50`, `$1,234.56`, `-$5.00`. Purely presentational; nothing in the
/// cart computes with the returned string.
pub fn format_currency(amount: Money) -> String {
    let cents = amount.amount_cents.unsigned_abs();
    let dollars = (cents / 100).to_string();
    let remainder = cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{sign}${grouped}.{remainder:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).amount_cents, 4999);
        assert_eq!(Money::from_decimal(109.95).amount_cents, 10995);
        assert_eq!(Money::from_decimal(0.0), Money::zero());
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(4999);
        assert!((m.to_decimal() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Money::new(0)), "$0.00");
        assert_eq!(format_currency(Money::new(50)), "$0.50");
        assert_eq!(format_currency(Money::new(4999)), "$49.99");
        assert_eq!(format_currency(Money::new(100_000)), "$1,000.00");
        assert_eq!(format_currency(Money::new(123_456_789)), "$1,234,567.89");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(Money::new(-500)), "-$5.00");
        assert_eq!(format_currency(Money::new(-123_456)), "-$1,234.56");
    }

    #[test]
    fn test_money_display_matches_format() {
        let m = Money::new(299_999);
        assert_eq!(m.to_string(), "$2,999.99");
        assert_eq!(m.display(), format_currency(m));
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::new(1000);
        assert_eq!(a.checked_add(&Money::new(500)), Some(Money::new(1500)));
        assert_eq!(a.checked_multiply(3), Some(Money::new(3000)));
        assert_eq!(Money::new(i64::MAX).checked_add(&Money::new(1)), None);
        assert_eq!(Money::new(i64::MAX).checked_multiply(2), None);
    }

    #[test]
    fn test_try_sum() {
        let amounts = [Money::new(100), Money::new(250), Money::new(5)];
        assert_eq!(Money::try_sum(amounts.iter()), Some(Money::new(355)));

        let overflowing = [Money::new(i64::MAX), Money::new(1)];
        assert_eq!(Money::try_sum(overflowing.iter()), None);
    }
}
