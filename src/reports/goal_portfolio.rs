//! Goal portfolio report
//!
//! Progress rows for every goal, lapsed ones included, plus an overall
//! progress figure. The shared balance feeds every row independently, so
//! `overall_progress` is a mean of per-goal percentages, not a partition of
//! the balance across goals.

use chrono::NaiveDate;

use crate::models::{Goal, LedgerSnapshot, Money};
use crate::services::{compute_goal_progress, GoalProgress};

/// One row of the portfolio: a goal and its progress figures
#[derive(Debug, Clone)]
pub struct GoalPortfolioEntry {
    /// The goal itself
    pub goal: Goal,
    /// Progress against the shared balance
    pub progress: GoalProgress,
}

/// Progress across all of a user's goals
#[derive(Debug, Clone)]
pub struct GoalPortfolioReport {
    /// The date the report was computed for
    pub as_of: NaiveDate,
    /// One entry per goal, in snapshot order
    pub entries: Vec<GoalPortfolioEntry>,
    /// The shared balance every entry was computed against
    pub current_balance: Money,
    /// Arithmetic mean of the per-goal progress percentages; zero with no goals
    pub overall_progress: f64,
}

impl GoalPortfolioReport {
    /// Generate the portfolio report for a snapshot
    pub fn generate(snapshot: &LedgerSnapshot, as_of: NaiveDate) -> Self {
        let balance = snapshot.profile.current_amount;

        let entries: Vec<GoalPortfolioEntry> = snapshot
            .goals
            .iter()
            .map(|goal| GoalPortfolioEntry {
                goal: goal.clone(),
                progress: compute_goal_progress(goal, balance, as_of),
            })
            .collect();

        let overall_progress = if entries.is_empty() {
            0.0
        } else {
            entries
                .iter()
                .map(|e| e.progress.progress_percentage)
                .sum::<f64>()
                / entries.len() as f64
        };

        Self {
            as_of,
            entries,
            current_balance: balance,
            overall_progress,
        }
    }
}
