//! User profile model
//!
//! The profile carries the figures the planner reads: monthly income, the
//! shared current balance, the preferred-spending-day set, and the daily
//! budget multiplier. The profile is owned and mutated elsewhere; the engine
//! only reads snapshots of it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::money::Money;
use super::weekday::Weekday;

/// Daily budget multiplier, a fixed-point factor in [0.10, 10.00]
///
/// Stored as hundredths (150 = 1.50x) so multiplier math stays in integers,
/// like `Money`. Values outside the range are clamped on construction, so a
/// multiplier read from any source is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct BudgetMultiplier(i64);

impl BudgetMultiplier {
    const MIN_HUNDREDTHS: i64 = 10;
    const MAX_HUNDREDTHS: i64 = 1000;

    /// The identity multiplier (1.00x)
    pub const fn identity() -> Self {
        Self(100)
    }

    /// Create a multiplier from hundredths, clamping into [0.10, 10.00]
    pub fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths.clamp(Self::MIN_HUNDREDTHS, Self::MAX_HUNDREDTHS))
    }

    /// The raw value in hundredths
    pub const fn hundredths(&self) -> i64 {
        self.0
    }

    /// The multiplier as a float, for display
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Apply the multiplier to a daily budget.
    ///
    /// On a preferred day the budget is amplified to `budget * m`. On other
    /// days it is reduced to `budget * (1 - (m - 1) / 7)` to compensate, so
    /// the identity multiplier leaves every day unchanged. In hundredths the
    /// reduction factor is `(800 - m) / 700`.
    pub fn apply(&self, budget: Money, is_preferred_day: bool) -> Money {
        if is_preferred_day {
            budget.scale(self.0, 100)
        } else {
            budget.scale(800 - self.0, 700)
        }
    }
}

impl Default for BudgetMultiplier {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<i64> for BudgetMultiplier {
    fn from(hundredths: i64) -> Self {
        Self::from_hundredths(hundredths)
    }
}

impl From<BudgetMultiplier> for i64 {
    fn from(m: BudgetMultiplier) -> Self {
        m.0
    }
}

impl fmt::Display for BudgetMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}x", self.0 / 100, self.0 % 100)
    }
}

/// A user's financial profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Income deposited once per month (on the 1st)
    #[serde(default)]
    pub monthly_income: Money,

    /// The single shared balance all goals draw against
    #[serde(default)]
    pub current_amount: Money,

    /// Preferred-day amplification factor
    #[serde(default)]
    pub daily_budget_multiplier: BudgetMultiplier,

    /// Weekdays on which the user opts into an amplified budget
    #[serde(default)]
    pub preferred_spending_days: BTreeSet<Weekday>,
}

impl UserProfile {
    /// Create a profile with the identity multiplier and no preferred days
    pub fn new(monthly_income: Money, current_amount: Money) -> Self {
        Self {
            monthly_income,
            current_amount,
            daily_budget_multiplier: BudgetMultiplier::identity(),
            preferred_spending_days: BTreeSet::new(),
        }
    }

    /// Whether `date` falls on one of the preferred spending days
    pub fn is_preferred_day(&self, date: NaiveDate) -> bool {
        self.preferred_spending_days
            .contains(&Weekday::from_date(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_clamping() {
        assert_eq!(BudgetMultiplier::from_hundredths(5).hundredths(), 10);
        assert_eq!(BudgetMultiplier::from_hundredths(150).hundredths(), 150);
        assert_eq!(BudgetMultiplier::from_hundredths(5000).hundredths(), 1000);
    }

    #[test]
    fn test_multiplier_identity() {
        let m = BudgetMultiplier::identity();
        let budget = Money::from_cents(12_345);
        assert_eq!(m.apply(budget, true), budget);
        assert_eq!(m.apply(budget, false), budget);
    }

    #[test]
    fn test_multiplier_apply() {
        let m = BudgetMultiplier::from_hundredths(150);
        let budget = Money::from_cents(14_000);
        // Preferred day: $140.00 * 1.5 = $210.00
        assert_eq!(m.apply(budget, true).cents(), 21_000);
        // Other days: $140.00 * (1 - 0.5/7) = $140.00 * 650/700 = $130.00
        assert_eq!(m.apply(budget, false).cents(), 13_000);
    }

    #[test]
    fn test_multiplier_extreme_drains_other_days() {
        // At 8.00x the compensation factor (1 - 7/7) reaches exactly zero
        let m = BudgetMultiplier::from_hundredths(800);
        let budget = Money::from_cents(10_000);
        assert_eq!(m.apply(budget, true).cents(), 80_000);
        assert_eq!(m.apply(budget, false), Money::zero());
    }

    #[test]
    fn test_multiplier_serde_clamps() {
        let m: BudgetMultiplier = serde_json::from_str("2500").unwrap();
        assert_eq!(m.hundredths(), 1000);
        assert_eq!(serde_json::to_string(&m).unwrap(), "1000");
    }

    #[test]
    fn test_preferred_day_lookup() {
        let mut profile = UserProfile::new(Money::from_cents(300_000), Money::zero());
        profile.preferred_spending_days.insert(Weekday::Saturday);

        // 2025-01-25 is a Saturday
        assert!(profile.is_preferred_day(NaiveDate::from_ymd_opt(2025, 1, 25).unwrap()));
        assert!(!profile.is_preferred_day(NaiveDate::from_ymd_opt(2025, 1, 24).unwrap()));
    }

    #[test]
    fn test_display() {
        assert_eq!(BudgetMultiplier::from_hundredths(150).to_string(), "1.50x");
        assert_eq!(BudgetMultiplier::identity().to_string(), "1.00x");
    }
}
