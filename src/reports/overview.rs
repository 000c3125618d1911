//! Daily budget overview
//!
//! Merges the daily budget plan and the income forecast for one snapshot and
//! as-of date, the combined view a dashboard shows first.

use chrono::NaiveDate;

use crate::models::LedgerSnapshot;
use crate::services::{
    compute_money_needed_per_day, plan_daily_budget, DailyBudgetPlan, IncomeForecast,
};

/// Combined budget-and-forecast view for one day
#[derive(Debug, Clone)]
pub struct FinancialOverview {
    /// The date the overview was computed for
    pub as_of: NaiveDate,
    /// Number of goals still active on `as_of`
    pub active_goals: usize,
    /// The recommended spending plan
    pub budget: DailyBudgetPlan,
    /// The required-income side of the same picture
    pub forecast: IncomeForecast,
}

impl FinancialOverview {
    /// Generate the overview for a snapshot
    pub fn generate(snapshot: &LedgerSnapshot, as_of: NaiveDate) -> Self {
        let budget = plan_daily_budget(&snapshot.profile, &snapshot.goals, as_of);
        let forecast = compute_money_needed_per_day(
            &snapshot.goals,
            snapshot.profile.current_amount,
            as_of,
        );

        Self {
            as_of,
            active_goals: snapshot.active_goals(as_of).len(),
            budget,
            forecast,
        }
    }
}
