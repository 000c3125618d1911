//! CLI command handlers
//!
//! Each handler loads the snapshot, runs the relevant engine operation or
//! report, and prints the rendered result. Handlers are the crate's only
//! consumers of the current date; every engine call receives an explicit
//! as-of date.

use chrono::{Local, NaiveDate};
use std::path::Path;

use crate::display;
use crate::error::{PocketPlanError, PocketPlanResult};
use crate::reports::{FinancialOverview, GoalPortfolioReport, MonthlyReport};
use crate::services::{compute_money_needed_per_day, plan_month_scoped_budget};
use crate::storage::load_snapshot;

/// Parse an optional YYYY-MM-DD argument, defaulting to today
pub fn resolve_as_of(date: Option<&str>) -> PocketPlanResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| PocketPlanError::InvalidDate(format!("{} (expected YYYY-MM-DD)", s))),
        None => Ok(Local::now().date_naive()),
    }
}

/// Show the daily budget (authoritative planner, merged with the forecast)
pub fn handle_budget(
    snapshot_path: &Path,
    date: Option<&str>,
    month_scope: bool,
) -> PocketPlanResult<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let as_of = resolve_as_of(date)?;

    if month_scope {
        let plan = plan_month_scoped_budget(&snapshot.profile, &snapshot.goals, as_of);
        print!("{}", display::format_month_scoped(&plan));
    } else {
        let overview = FinancialOverview::generate(&snapshot, as_of);
        print!("{}", display::format_overview(&overview));
    }

    Ok(())
}

/// Show per-goal progress and the portfolio mean
pub fn handle_goals(snapshot_path: &Path, date: Option<&str>) -> PocketPlanResult<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let as_of = resolve_as_of(date)?;

    let report = GoalPortfolioReport::generate(&snapshot, as_of);
    print!("{}", display::format_goal_portfolio(&report));
    Ok(())
}

/// Show the extra income needed per day to fund all active goals
pub fn handle_forecast(snapshot_path: &Path, date: Option<&str>) -> PocketPlanResult<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let as_of = resolve_as_of(date)?;

    let forecast =
        compute_money_needed_per_day(&snapshot.goals, snapshot.profile.current_amount, as_of);

    match forecast.earliest_deadline {
        Some(deadline) => {
            println!("Income forecast as of {}", as_of);
            println!("  Total needed:        {}", forecast.total_needed);
            println!("  Shortfall:           {}", forecast.shortfall);
            println!(
                "  Earliest deadline:   {} ({} days)",
                deadline, forecast.days_remaining
            );
            println!(
                "  Extra income needed: {} per day",
                forecast.money_needed_per_day
            );
        }
        None => println!("No active goals as of {}", as_of),
    }

    Ok(())
}

/// Analyze spending over an explicit date range
pub fn handle_spending(snapshot_path: &Path, start: &str, end: &str) -> PocketPlanResult<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let start = resolve_as_of(Some(start))?;
    let end = resolve_as_of(Some(end))?;

    let analysis =
        crate::services::analyze_spending_pattern(&snapshot.transactions, start, end);

    println!("Spending from {} to {}", start, end);
    print!("{}", display::format_spending_analysis(&analysis));
    Ok(())
}

/// Show the monthly report with its per-day breakdown
pub fn handle_monthly(snapshot_path: &Path, year: i32, month: u32) -> PocketPlanResult<()> {
    let snapshot = load_snapshot(snapshot_path)?;
    let report = MonthlyReport::generate(&snapshot.transactions, year, month)?;
    print!("{}", display::format_monthly_report(&report));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_as_of_parses_iso_dates() {
        let date = resolve_as_of(Some("2025-01-20")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
    }

    #[test]
    fn test_resolve_as_of_rejects_garbage() {
        let err = resolve_as_of(Some("20/01/2025")).unwrap_err();
        assert!(matches!(err, PocketPlanError::InvalidDate(_)));
    }

    #[test]
    fn test_resolve_as_of_defaults_to_today() {
        assert!(resolve_as_of(None).is_ok());
    }
}
