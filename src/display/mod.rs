//! Display formatting for terminal output
//!
//! Renders engine results and composed reports as plain-text tables. All
//! rendering is read-only; nothing here touches the engine's numbers beyond
//! formatting them.

pub mod report;

use std::fmt::Write;

use crate::models::Money;
use crate::reports::{FinancialOverview, GoalPortfolioReport, MonthlyReport};
use crate::services::{MonthScopedBudgetPlan, SpendingAnalysis};

use report::{format_bar, format_money_colored, format_percentage, right_align, separator};

const TABLE_WIDTH: usize = 64;

/// Render the combined daily budget and forecast overview
pub fn format_overview(overview: &FinancialOverview) -> String {
    let mut out = String::new();
    let budget = &overview.budget;

    let _ = writeln!(out, "Daily budget for {}", overview.as_of);
    let _ = writeln!(out, "{}", separator(TABLE_WIDTH));
    let _ = writeln!(
        out,
        "  Recommended today:      {}",
        format_money_colored(budget.daily_budget_with_multiplier)
    );
    let _ = writeln!(out, "  Base daily budget:      {}", budget.daily_budget);
    if budget.is_preferred_day {
        let _ = writeln!(
            out,
            "  Preferred spending day  ({} applied)",
            budget.multiplier
        );
    }
    let _ = writeln!(
        out,
        "  Available for spending: {}",
        format_money_colored(budget.available_for_spending)
    );
    if budget.available_for_spending.is_negative() {
        let _ = writeln!(
            out,
            "  Warning: goals are not fully fundable by the deadline"
        );
    }
    let _ = writeln!(out, "  Reserved for goals:     {}", budget.goal_contributions);

    if overview.active_goals > 0 {
        let _ = writeln!(out, "{}", separator(TABLE_WIDTH));
        let _ = writeln!(
            out,
            "  Active goals: {} (nearest deadline in {} days)",
            overview.active_goals, budget.days_until_deadline
        );
        let forecast = &overview.forecast;
        let _ = writeln!(out, "  Total needed:           {}", forecast.total_needed);
        let _ = writeln!(out, "  Shortfall:              {}", forecast.shortfall);
        let _ = writeln!(
            out,
            "  Extra income needed:    {} per day",
            forecast.money_needed_per_day
        );
    } else {
        let _ = writeln!(
            out,
            "  No active goals; income spread over {} remaining days of the month",
            budget.days_remaining_in_month
        );
    }

    out
}

/// Render the legacy month-scoped plan
pub fn format_month_scoped(plan: &MonthScopedBudgetPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Month-scoped daily budget");
    let _ = writeln!(out, "{}", separator(TABLE_WIDTH));
    let _ = writeln!(
        out,
        "  Daily budget:        {}",
        format_money_colored(plan.daily_budget)
    );
    let _ = writeln!(out, "  Goal shortfalls:     {}", plan.reserved_for_goals);
    let _ = writeln!(
        out,
        "  Days left in month:  {}",
        plan.days_remaining_in_month
    );
    out
}

/// Render the goal portfolio as a table with progress bars
pub fn format_goal_portfolio(report: &GoalPortfolioReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Goal progress as of {}", report.as_of);
    let _ = writeln!(out, "{}", separator(TABLE_WIDTH));

    if report.entries.is_empty() {
        let _ = writeln!(out, "  No goals yet");
        return out;
    }

    for entry in &report.entries {
        let p = &entry.progress;
        let _ = writeln!(
            out,
            "  {:<20} {} {:>6}  {}",
            truncate_name(&entry.goal.name, 20),
            format_bar(p.progress_percentage, 100.0, 16),
            format_percentage(p.progress_percentage),
            p.status
        );
        let _ = writeln!(
            out,
            "    target {}  remaining {}  {} days left  {}/day  {}",
            entry.goal.target_amount,
            p.remaining_amount,
            p.days_remaining,
            p.daily_savings_needed,
            if p.is_on_track { "on track" } else { "behind" }
        );
    }

    let _ = writeln!(out, "{}", separator(TABLE_WIDTH));
    let _ = writeln!(
        out,
        "  Overall progress: {} across {} goals (balance {})",
        format_percentage(report.overall_progress),
        report.entries.len(),
        report.current_balance
    );

    out
}

/// Render a spending analysis with its category table and insights
pub fn format_spending_analysis(analysis: &SpendingAnalysis) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "  Income:   {}", right_align(&analysis.total_income.to_string(), 12));
    let _ = writeln!(out, "  Expenses: {}", right_align(&analysis.total_expenses.to_string(), 12));
    let _ = writeln!(
        out,
        "  Net:      {}",
        right_align(&format_money_colored(analysis.net_change), 12)
    );
    let _ = writeln!(
        out,
        "  Average daily expense: {}",
        analysis.average_daily_expense
    );

    if !analysis.category_breakdown.is_empty() {
        let _ = writeln!(out, "{}", separator(TABLE_WIDTH));
        let max_cents = analysis
            .category_breakdown
            .values()
            .map(Money::cents)
            .max()
            .unwrap_or(0) as f64;

        for (category, amount) in &analysis.category_breakdown {
            let share = amount.percent_of(analysis.total_expenses);
            let _ = writeln!(
                out,
                "  {:<18} {:>10}  {} {:>6}",
                category.label(),
                amount.to_string(),
                format_bar(amount.cents() as f64, max_cents, 12),
                format_percentage(share)
            );
        }
    }

    if !analysis.insights.is_empty() {
        let _ = writeln!(out, "{}", separator(TABLE_WIDTH));
        for insight in &analysis.insights {
            let _ = writeln!(out, "  • {}", insight);
        }
    }

    out
}

/// Render the monthly report: aggregate analysis plus the per-day breakdown
pub fn format_monthly_report(report: &MonthlyReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Monthly report for {}-{:02}", report.year, report.month);
    let _ = writeln!(out, "{}", separator(TABLE_WIDTH));
    out.push_str(&format_spending_analysis(&report.analysis));

    if !report.daily_breakdown.is_empty() {
        let _ = writeln!(out, "{}", separator(TABLE_WIDTH));
        let _ = writeln!(out, "  {:>3}  {:>12}  {:>12}", "Day", "Income", "Expenses");
        for (day, activity) in &report.daily_breakdown {
            let _ = writeln!(
                out,
                "  {:>3}  {:>12}  {:>12}",
                day,
                activity.income.to_string(),
                activity.expenses.to_string()
            );
        }
    }

    out
}

/// Truncate a goal name to fit its column
fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        name.to_string()
    } else {
        let truncated: String = name.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
