//! Daily budget planner
//!
//! The central allocator: turns a profile and the active goal set into a
//! recommended daily spend. Two planners live here. `plan_daily_budget` is
//! the authoritative one: it projects income deposits up to the earliest
//! goal deadline, reserves every active goal's full target, and applies the
//! preferred-day multiplier. `plan_month_scoped_budget` is the legacy
//! variant kept under a distinct name: it reserves only each goal's
//! shortfall and always spreads over the rest of the current calendar month.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::models::{BudgetMultiplier, Goal, Money, UserProfile};

/// Result of the authoritative daily budget calculation
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBudgetPlan {
    /// Recommended spend per day before the preferred-day adjustment
    pub daily_budget: Money,
    /// Recommended spend for the as-of day after the multiplier
    pub daily_budget_with_multiplier: Money,
    /// Funds left after goal reservations; negative means the goals are not
    /// fully fundable by the deadline and the caller should surface a
    /// deficit warning rather than clamp it away
    pub available_for_spending: Money,
    /// Sum of the full targets of all active goals
    pub goal_contributions: Money,
    /// Balance plus projected income deposits up to the earliest deadline
    pub total_available: Money,
    /// Whether the as-of day is one of the preferred spending days
    pub is_preferred_day: bool,
    /// The multiplier in effect
    pub multiplier: BudgetMultiplier,
    /// Days from the as-of date through the earliest deadline, inclusive;
    /// zero when there are no active goals
    pub days_until_deadline: i64,
    /// Days in the as-of month
    pub days_in_month: u32,
    /// Days left in the as-of month, counting the as-of day itself
    pub days_remaining_in_month: u32,
}

/// Result of the legacy month-scoped calculation
#[derive(Debug, Clone, PartialEq)]
pub struct MonthScopedBudgetPlan {
    /// Recommended spend per remaining day of the current month
    pub daily_budget: Money,
    /// Sum of the active goals' shortfalls against the shared balance
    pub reserved_for_goals: Money,
    /// Days left in the as-of month, counting the as-of day itself
    pub days_remaining_in_month: u32,
}

/// Compute the recommended daily budget.
///
/// With no active goals the whole monthly income is spread over the rest of
/// the current calendar month. With active goals, spending is planned against
/// the earliest deadline: the balance plus every income deposit expected by
/// then, minus the full target of every active goal, spread over the days up
/// to and including the deadline.
pub fn plan_daily_budget(
    profile: &UserProfile,
    goals: &[Goal],
    as_of: NaiveDate,
) -> DailyBudgetPlan {
    let active: Vec<&Goal> = goals.iter().filter(|g| g.is_active(as_of)).collect();
    debug!(active_goals = active.len(), as_of = %as_of, "planning daily budget");

    let month_len = days_in_month(as_of.year(), as_of.month());
    let month_days_left = month_len - as_of.day() + 1;

    let (daily_budget, available, contributions, total_available, days_until_deadline) =
        match active.iter().map(|g| g.deadline).min() {
            None => {
                // No goals: the entire monthly income is spendable this month
                let daily = profile.monthly_income.div_days(month_days_left as i64);
                (
                    daily,
                    profile.monthly_income,
                    Money::zero(),
                    profile.current_amount,
                    0,
                )
            }
            Some(deadline) => {
                let deposits = income_deposits_until(as_of, deadline);
                let projected_income = profile.monthly_income.scale(deposits, 1);
                let total_available = profile.current_amount + projected_income;

                let contributions: Money = active.iter().map(|g| g.target_amount).sum();
                let available = total_available - contributions;

                let days = (deadline - as_of).num_days() + 1;
                (
                    available.div_days(days),
                    available,
                    contributions,
                    total_available,
                    days,
                )
            }
        };

    let is_preferred_day = profile.is_preferred_day(as_of);
    let multiplier = profile.daily_budget_multiplier;

    DailyBudgetPlan {
        daily_budget,
        daily_budget_with_multiplier: multiplier.apply(daily_budget, is_preferred_day),
        available_for_spending: available,
        goal_contributions: contributions,
        total_available,
        is_preferred_day,
        multiplier,
        days_until_deadline,
        days_in_month: month_len,
        days_remaining_in_month: month_days_left,
    }
}

/// Compute the legacy month-scoped daily budget.
///
/// Reserves only each active goal's shortfall against the shared balance,
/// ignores preferred days, and always divides by the days remaining in the
/// current calendar month.
pub fn plan_month_scoped_budget(
    profile: &UserProfile,
    goals: &[Goal],
    as_of: NaiveDate,
) -> MonthScopedBudgetPlan {
    let reserved: Money = goals
        .iter()
        .filter(|g| g.is_active(as_of))
        .map(|g| g.shortfall(profile.current_amount))
        .sum();

    let month_days_left = days_in_month(as_of.year(), as_of.month()) - as_of.day() + 1;
    let available = profile.current_amount + profile.monthly_income - reserved;

    MonthScopedBudgetPlan {
        daily_budget: available.div_days(month_days_left as i64),
        reserved_for_goals: reserved,
        days_remaining_in_month: month_days_left,
    }
}

/// Number of monthly income deposits between `as_of` and `deadline`
/// inclusive: one for the as-of day itself, plus one for every subsequent
/// first-of-month reached on or before the deadline.
fn income_deposits_until(as_of: NaiveDate, deadline: NaiveDate) -> i64 {
    let month_index = |d: NaiveDate| d.year() as i64 * 12 + d.month() as i64;
    1 + (month_index(deadline) - month_index(as_of)).max(0)
}

/// Days in a calendar month
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            }
        }
    }
}
