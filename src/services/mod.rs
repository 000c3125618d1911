//! The planning engine
//!
//! Four pure, deterministic operations over a ledger snapshot: daily budget
//! planning, goal progress tracking, income forecasting, and spending
//! analysis. None of them mutates anything, performs I/O, or holds state
//! between calls; identical inputs always yield identical outputs.

pub mod daily_budget;
pub mod forecast;
pub mod goal_progress;
pub mod spending;

pub use daily_budget::{
    plan_daily_budget, plan_month_scoped_budget, DailyBudgetPlan, MonthScopedBudgetPlan,
};
pub use forecast::{compute_money_needed_per_day, IncomeForecast};
pub use goal_progress::{compute_goal_progress, GoalProgress, GoalStatus};
pub use spending::{analyze_spending_pattern, SpendingAnalysis};
