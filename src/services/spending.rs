//! Spending pattern analysis
//!
//! Aggregates a transaction set over a date range into income and expense
//! totals, a per-category breakdown, and qualitative insights. All output is
//! deterministic: the breakdown is an ordered map and ranking ties are broken
//! by the canonical category order, never by map iteration order.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{ExpenseCategory, Money, Transaction};

/// Aggregated spending figures for a date range
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingAnalysis {
    /// Sum of income amounts
    pub total_income: Money,
    /// Sum of expense amounts
    pub total_expenses: Money,
    /// `total_income - total_expenses`
    pub net_change: Money,
    /// Expenses spread over every day of the range, inclusive
    pub average_daily_expense: Money,
    /// Expense totals per category; income transactions never appear
    pub category_breakdown: BTreeMap<ExpenseCategory, Money>,
    /// Ordered qualitative statements about the period
    pub insights: Vec<String>,
}

impl SpendingAnalysis {
    /// The all-zero analysis for an empty or degenerate input
    fn empty() -> Self {
        Self {
            total_income: Money::zero(),
            total_expenses: Money::zero(),
            net_change: Money::zero(),
            average_daily_expense: Money::zero(),
            category_breakdown: BTreeMap::new(),
            insights: Vec::new(),
        }
    }
}

/// Analyze spending over `[start_date, end_date]` inclusive.
///
/// An empty transaction set or an inverted range yields the all-zero
/// analysis with no insights.
pub fn analyze_spending_pattern(
    transactions: &[Transaction],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> SpendingAnalysis {
    debug!(
        transactions = transactions.len(),
        start = %start_date,
        end = %end_date,
        "analyzing spending pattern"
    );

    if transactions.is_empty() || end_date < start_date {
        return SpendingAnalysis::empty();
    }

    let mut total_income = Money::zero();
    let mut total_expenses = Money::zero();
    let mut category_breakdown: BTreeMap<ExpenseCategory, Money> = BTreeMap::new();

    for txn in transactions {
        if txn.is_income() {
            total_income += txn.amount;
        } else {
            total_expenses += txn.amount;
            if let Some(category) = txn.category {
                *category_breakdown.entry(category).or_insert(Money::zero()) += txn.amount;
            }
        }
    }

    let net_change = total_income - total_expenses;
    let days_in_period = (end_date - start_date).num_days() + 1;
    let average_daily_expense = total_expenses.div_days(days_in_period);

    let insights = build_insights(&category_breakdown, net_change);

    SpendingAnalysis {
        total_income,
        total_expenses,
        net_change,
        average_daily_expense,
        category_breakdown,
        insights,
    }
}

/// Assemble the ordered insight statements: top category, top three, and the
/// net-positive or net-negative summary.
fn build_insights(
    breakdown: &BTreeMap<ExpenseCategory, Money>,
    net_change: Money,
) -> Vec<String> {
    let mut insights = Vec::new();

    if !breakdown.is_empty() {
        // Descending by amount, ties broken toward the earlier category in
        // canonical order.
        let mut ranked: Vec<(ExpenseCategory, Money)> =
            breakdown.iter().map(|(c, m)| (*c, *m)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let (top_category, _) = ranked[0];
        insights.push(format!(
            "Your highest spending category is {}",
            top_category.label()
        ));

        if ranked.len() > 1 {
            let top_three: Vec<&str> = ranked
                .iter()
                .take(3)
                .map(|(c, _)| c.label())
                .collect();
            insights.push(format!("Top 3 categories: {}", top_three.join(", ")));
        }
    }

    if net_change.is_positive() {
        insights.push(format!("You saved {} during this period", net_change));
    } else if net_change.is_negative() {
        insights.push(format!(
            "You spent {} more than you earned",
            net_change.abs()
        ));
    }

    insights
}
