//! Composed reports
//!
//! Read-only views assembled from engine calls: the daily overview, the goal
//! portfolio, and the monthly report. Like the engine itself, report
//! generation is pure; rendering lives in the display module.

pub mod goal_portfolio;
pub mod monthly;
pub mod overview;

pub use goal_portfolio::{GoalPortfolioEntry, GoalPortfolioReport};
pub use monthly::{DayActivity, MonthlyReport};
pub use overview::FinancialOverview;
