//! Goal progress tracking
//!
//! Computes progress, shortfall, pace, and on-track status for a single goal
//! against the user's shared balance. The shared balance is applied
//! independently to every goal, so with several concurrent goals the same
//! money is counted toward each one; sums of per-goal progress are not a
//! partition of the balance.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::models::{Goal, Money};

/// Lifecycle status of a goal, derived from its progress percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "Not started"),
            Self::InProgress => write!(f, "In progress"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// Progress figures for one goal
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    /// Percent of the target covered by the balance, capped at 100
    pub progress_percentage: f64,
    /// Money still needed, floored at zero
    pub remaining_amount: Money,
    /// Days until the deadline, floored at zero
    pub days_remaining: i64,
    /// Savings per day required to close the gap by the deadline
    pub daily_savings_needed: Money,
    /// Derived lifecycle status
    pub status: GoalStatus,
    /// Whether the saved fraction is at least the elapsed fraction of the
    /// goal's lifetime
    pub is_on_track: bool,
}

/// Compute progress for a goal given the shared current balance.
///
/// A non-positive target yields zero progress rather than an error; invalid
/// goal data is a caller-side validation concern.
pub fn compute_goal_progress(goal: &Goal, current_balance: Money, as_of: NaiveDate) -> GoalProgress {
    debug!(goal = %goal.name, as_of = %as_of, "computing goal progress");

    let progress_percentage = if goal.target_amount.is_positive() {
        current_balance
            .floor_at_zero()
            .percent_of(goal.target_amount)
            .min(100.0)
    } else {
        0.0
    };

    let remaining_amount = goal.shortfall(current_balance);
    let days_remaining = (goal.deadline - as_of).num_days().max(0);

    let daily_savings_needed = if days_remaining > 0 && remaining_amount.is_positive() {
        remaining_amount.div_days(days_remaining)
    } else {
        Money::zero()
    };

    let status = if progress_percentage >= 100.0 {
        GoalStatus::Completed
    } else if progress_percentage > 0.0 {
        GoalStatus::InProgress
    } else {
        GoalStatus::NotStarted
    };

    // On track iff the fraction saved is at least the fraction of the goal's
    // lifetime already elapsed.
    let total_duration = goal.total_duration_days();
    let expected_percentage = (1.0 - days_remaining as f64 / total_duration as f64) * 100.0;
    let is_on_track = progress_percentage >= expected_percentage;

    GoalProgress {
        progress_percentage,
        remaining_amount,
        days_remaining,
        daily_savings_needed,
        status,
        is_on_track,
    }
}
