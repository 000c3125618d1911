//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. All engine arithmetic stays in integer cents; the only rounding
//! happens in `div_days` and `scale`, both of which round half away from zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// Using i64 cents avoids floating-point precision issues and supports
/// amounts up to approximately $92 quadrillion (both positive and negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use pocketplan::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from dollars and cents
    pub const fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self(dollars * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Clamp negative amounts to zero
    pub fn floor_at_zero(&self) -> Self {
        Self(self.0.max(0))
    }

    /// Spread the amount evenly over a number of days, rounding half away
    /// from zero. Returns zero when `days <= 0` so callers never divide by
    /// zero when a deadline has lapsed.
    pub fn div_days(&self, days: i64) -> Self {
        if days <= 0 {
            return Self::zero();
        }
        Self(div_round(self.0 as i128, days as i128))
    }

    /// Multiply by the rational `num / den`, rounding half away from zero.
    ///
    /// Used for the preferred-day multiplier, where the scaling factor is a
    /// fixed-point ratio rather than a whole number.
    pub fn scale(&self, num: i64, den: i64) -> Self {
        debug_assert!(den > 0);
        if den <= 0 {
            return Self::zero();
        }
        Self(div_round(self.0 as i128 * num as i128, den as i128))
    }

    /// This amount as a percentage of `whole`, at full f64 precision.
    ///
    /// Returns 0.0 when `whole` is zero or negative.
    pub fn percent_of(&self, whole: Money) -> f64 {
        if whole.0 <= 0 {
            return 0.0;
        }
        self.0 as f64 * 100.0 / whole.0 as f64
    }
}

/// Integer division rounding half away from zero. Intermediate math is done
/// in i128 so scaled cent amounts cannot overflow.
fn div_round(num: i128, den: i128) -> i64 {
    debug_assert!(den > 0);
    let half = den / 2;
    let rounded = if num >= 0 {
        (num + half) / den
    } else {
        (num - half) / den
    };
    rounded as i64
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_div_days() {
        // $3000.00 over 12 days = $250.00
        assert_eq!(Money::from_cents(300_000).div_days(12).cents(), 25_000);
        // $1750.00 over 31 days = $56.45 (5645.16 rounds down)
        assert_eq!(Money::from_cents(175_000).div_days(31).cents(), 5645);
        // Negative amounts round away from zero
        assert_eq!(Money::from_cents(-100).div_days(3).cents(), -33);
        assert_eq!(Money::from_cents(-50).div_days(4).cents(), -13);
        // Lapsed deadlines yield zero instead of dividing by zero
        assert_eq!(Money::from_cents(1000).div_days(0), Money::zero());
        assert_eq!(Money::from_cents(1000).div_days(-5), Money::zero());
    }

    #[test]
    fn test_scale() {
        // $140.00 * 150/100 = $210.00
        assert_eq!(Money::from_cents(14_000).scale(150, 100).cents(), 21_000);
        // $140.00 * 650/700 = $130.00
        assert_eq!(Money::from_cents(14_000).scale(650, 700).cents(), 13_000);
        // Rounding: $0.01 * 1/2 = $0.01 (half away from zero)
        assert_eq!(Money::from_cents(1).scale(1, 2).cents(), 1);
        assert_eq!(Money::from_cents(-1).scale(1, 2).cents(), -1);
    }

    #[test]
    fn test_percent_of() {
        let half = Money::from_cents(50_000);
        let whole = Money::from_cents(100_000);
        assert_eq!(half.percent_of(whole), 50.0);
        assert_eq!(whole.percent_of(whole), 100.0);
        assert_eq!(half.percent_of(Money::zero()), 0.0);
    }

    #[test]
    fn test_floor_at_zero() {
        assert_eq!(Money::from_cents(-500).floor_at_zero(), Money::zero());
        assert_eq!(Money::from_cents(500).floor_at_zero().cents(), 500);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
