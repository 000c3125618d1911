//! Savings goal model
//!
//! Goals are immutable inputs to the planning engine. A goal is "active"
//! relative to an as-of date iff its deadline has not lapsed; lapsed goals
//! still exist and still appear in portfolio reports.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{PocketPlanError, PocketPlanResult};

/// A savings goal with a target amount and deadline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Amount to save (must be positive for a well-formed goal)
    pub target_amount: Money,

    /// Date by which the target should be met
    pub deadline: NaiveDate,

    /// When the goal was created; anchors the on-track calculation
    pub created_at: NaiveDate,
}

impl Goal {
    /// Create a new goal
    pub fn new(
        name: impl Into<String>,
        target_amount: Money,
        deadline: NaiveDate,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            target_amount,
            deadline,
            created_at,
        }
    }

    /// Whether the goal's deadline has not lapsed as of `as_of`
    pub fn is_active(&self, as_of: NaiveDate) -> bool {
        self.deadline >= as_of
    }

    /// The positive gap between the target and `balance`, floored at zero
    pub fn shortfall(&self, balance: Money) -> Money {
        (self.target_amount - balance).floor_at_zero()
    }

    /// Total lifetime of the goal in days, never less than one
    pub fn total_duration_days(&self) -> i64 {
        (self.deadline - self.created_at).num_days().max(1)
    }

    /// Validate the goal
    ///
    /// Deadlines must be strictly after creation; targets must be positive.
    pub fn validate(&self) -> PocketPlanResult<()> {
        if !self.target_amount.is_positive() {
            return Err(PocketPlanError::Validation(format!(
                "goal target must be positive, got {}",
                self.target_amount
            )));
        }

        if self.deadline <= self.created_at {
            return Err(PocketPlanError::Validation(format!(
                "goal deadline {} is not after creation date {}",
                self.deadline, self.created_at
            )));
        }

        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} by {})", self.name, self.target_amount, self.deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal() -> Goal {
        Goal::new(
            "Emergency fund",
            Money::from_cents(100_000),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_is_active() {
        let g = goal();
        assert!(g.is_active(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()));
        assert!(g.is_active(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()));
        assert!(!g.is_active(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()));
    }

    #[test]
    fn test_shortfall() {
        let g = goal();
        assert_eq!(g.shortfall(Money::from_cents(40_000)).cents(), 60_000);
        assert_eq!(g.shortfall(Money::from_cents(150_000)), Money::zero());
    }

    #[test]
    fn test_total_duration_never_zero() {
        let mut g = goal();
        g.created_at = g.deadline;
        assert_eq!(g.total_duration_days(), 1);
    }

    #[test]
    fn test_validate() {
        assert!(goal().validate().is_ok());

        let mut g = goal();
        g.target_amount = Money::zero();
        assert!(g.validate().is_err());

        let mut g = goal();
        g.deadline = g.created_at;
        assert!(g.validate().is_err());
    }
}
