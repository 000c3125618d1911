//! Income forecast
//!
//! Answers "how much extra income per day is required to meet the nearest
//! goal deadline" — a planning aid distinct from the daily budget planner,
//! which answers how much may be spent.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{Goal, Money};

/// Required-income figures across all active goals
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeForecast {
    /// Extra income per day needed to close the shortfall by the earliest
    /// deadline; zero when the balance already covers every target
    pub money_needed_per_day: Money,
    /// Sum of the targets of all active goals
    pub total_needed: Money,
    /// Days until the earliest active deadline
    pub days_remaining: i64,
    /// Positive gap between the total needed and the balance
    pub shortfall: Money,
    /// Earliest active deadline, if any goal is active
    pub earliest_deadline: Option<NaiveDate>,
}

impl IncomeForecast {
    /// The all-zero forecast returned when no goal is active
    fn empty() -> Self {
        Self {
            money_needed_per_day: Money::zero(),
            total_needed: Money::zero(),
            days_remaining: 0,
            shortfall: Money::zero(),
            earliest_deadline: None,
        }
    }
}

/// Compute the minimum additional income per day needed to fund all active
/// goals by the nearest deadline.
pub fn compute_money_needed_per_day(
    goals: &[Goal],
    current_balance: Money,
    as_of: NaiveDate,
) -> IncomeForecast {
    let active: Vec<&Goal> = goals.iter().filter(|g| g.is_active(as_of)).collect();
    debug!(active_goals = active.len(), as_of = %as_of, "computing income forecast");

    let earliest = match active.iter().map(|g| g.deadline).min() {
        Some(d) => d,
        None => return IncomeForecast::empty(),
    };

    let total_needed: Money = active.iter().map(|g| g.target_amount).sum();
    let days_remaining = (earliest - as_of).num_days();
    let shortfall = (total_needed - current_balance).floor_at_zero();

    let money_needed_per_day = if days_remaining > 0 && shortfall.is_positive() {
        shortfall.div_days(days_remaining)
    } else {
        Money::zero()
    };

    IncomeForecast {
        money_needed_per_day,
        total_needed,
        days_remaining,
        shortfall,
        earliest_deadline: Some(earliest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal(target_cents: i64, deadline: NaiveDate) -> Goal {
        Goal::new("goal", Money::from_cents(target_cents), deadline, date(2025, 1, 1))
    }

    #[test]
    fn test_shortfall_spread_over_days() {
        // Total 5000.00, balance 2000.00, 100 days out
        // (2025-01-01 to 2025-04-11 is exactly 100 days)
        let goals = [
            goal(300_000, date(2025, 4, 11)),
            goal(200_000, date(2025, 5, 1)),
        ];
        let forecast =
            compute_money_needed_per_day(&goals, Money::from_cents(200_000), date(2025, 1, 1));

        assert_eq!(forecast.total_needed.cents(), 500_000);
        assert_eq!(forecast.shortfall.cents(), 300_000);
        assert_eq!(forecast.days_remaining, 100);
        assert_eq!(forecast.money_needed_per_day.cents(), 3000);
        assert_eq!(forecast.earliest_deadline, Some(date(2025, 4, 11)));
    }

    #[test]
    fn test_funded_goals_need_nothing() {
        let goals = [goal(100_000, date(2025, 3, 1))];
        let forecast =
            compute_money_needed_per_day(&goals, Money::from_cents(100_000), date(2025, 1, 1));

        assert_eq!(forecast.shortfall, Money::zero());
        assert_eq!(forecast.money_needed_per_day, Money::zero());
    }

    #[test]
    fn test_no_active_goals() {
        let goals = [goal(100_000, date(2025, 1, 10))];
        let forecast =
            compute_money_needed_per_day(&goals, Money::zero(), date(2025, 2, 1));

        assert_eq!(forecast, IncomeForecast::empty());
        assert_eq!(forecast.earliest_deadline, None);
    }

    #[test]
    fn test_deadline_today_needs_nothing_per_day() {
        // Zero days remaining resolves to zero instead of dividing by zero
        let goals = [goal(100_000, date(2025, 1, 20))];
        let forecast =
            compute_money_needed_per_day(&goals, Money::zero(), date(2025, 1, 20));

        assert_eq!(forecast.days_remaining, 0);
        assert_eq!(forecast.shortfall.cents(), 100_000);
        assert_eq!(forecast.money_needed_per_day, Money::zero());
    }

    #[test]
    fn test_lapsed_goals_excluded_from_total() {
        let goals = [
            goal(100_000, date(2025, 1, 10)),
            goal(50_000, date(2025, 3, 1)),
        ];
        let forecast =
            compute_money_needed_per_day(&goals, Money::zero(), date(2025, 1, 20));

        assert_eq!(forecast.total_needed.cents(), 50_000);
        assert_eq!(forecast.earliest_deadline, Some(date(2025, 3, 1)));
    }
}
