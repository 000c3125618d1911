//! Monthly report
//!
//! Runs the spending analyzer over one calendar month and adds a per-day
//! income/expense breakdown. The breakdown map is ordered by day of month so
//! the report renders identically on every run.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::error::{PocketPlanError, PocketPlanResult};
use crate::models::{Money, Transaction};
use crate::services::{analyze_spending_pattern, SpendingAnalysis};

/// Income and expense totals for a single day
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayActivity {
    pub income: Money,
    pub expenses: Money,
}

/// Spending analysis for one calendar month with a per-day breakdown
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    /// The analyzer's aggregate view of the month
    pub analysis: SpendingAnalysis,
    /// Activity per day of month, days with no transactions omitted
    pub daily_breakdown: BTreeMap<u32, DayActivity>,
}

impl MonthlyReport {
    /// Generate the report for a given year and month.
    ///
    /// Transactions outside the month are ignored, so callers may pass an
    /// unfiltered set.
    pub fn generate(
        transactions: &[Transaction],
        year: i32,
        month: u32,
    ) -> PocketPlanResult<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            PocketPlanError::InvalidPeriod(format!("{}-{:02} is not a calendar month", year, month))
        })?;
        let end = last_day_of_month(start);

        let in_month: Vec<Transaction> = transactions
            .iter()
            .filter(|t| t.date >= start && t.date <= end)
            .cloned()
            .collect();

        let analysis = analyze_spending_pattern(&in_month, start, end);

        let mut daily_breakdown: BTreeMap<u32, DayActivity> = BTreeMap::new();
        for txn in &in_month {
            let day = daily_breakdown.entry(txn.date.day()).or_default();
            if txn.is_income() {
                day.income += txn.amount;
            } else {
                day.expenses += txn.amount;
            }
        }

        Ok(Self {
            year,
            month,
            analysis,
            daily_breakdown,
        })
    }
}

/// The last calendar day of the month containing `first`
fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    let (next_year, next_month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    // The 1st of the following month always exists
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or(first)
        .pred_opt()
        .unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::income(Money::from_cents(200_000), date(2025, 1, 1)),
            Transaction::expense(
                Money::from_cents(100_000),
                ExpenseCategory::BillsUtilities,
                date(2025, 1, 5),
            ),
            Transaction::expense(
                Money::from_cents(75_000),
                ExpenseCategory::Groceries,
                date(2025, 1, 5),
            ),
            // Outside January, must be ignored
            Transaction::income(Money::from_cents(999_999), date(2025, 2, 1)),
        ]
    }

    #[test]
    fn test_monthly_totals_and_breakdown() {
        let report = MonthlyReport::generate(&sample(), 2025, 1).unwrap();

        assert_eq!(report.analysis.total_income.cents(), 200_000);
        assert_eq!(report.analysis.total_expenses.cents(), 175_000);
        assert_eq!(report.analysis.average_daily_expense.cents(), 5645);

        assert_eq!(report.daily_breakdown.len(), 2);
        assert_eq!(report.daily_breakdown[&1].income.cents(), 200_000);
        assert_eq!(report.daily_breakdown[&5].expenses.cents(), 175_000);
        assert_eq!(report.daily_breakdown[&5].income, Money::zero());
    }

    #[test]
    fn test_invalid_month_rejected() {
        let err = MonthlyReport::generate(&[], 2025, 13).unwrap_err();
        assert!(matches!(err, PocketPlanError::InvalidPeriod(_)));
    }

    #[test]
    fn test_empty_month() {
        let report = MonthlyReport::generate(&sample(), 2025, 3).unwrap();
        assert!(report.daily_breakdown.is_empty());
        assert_eq!(report.analysis.total_income, Money::zero());
        assert!(report.analysis.insights.is_empty());
    }

    #[test]
    fn test_december_range() {
        let txns = vec![Transaction::income(
            Money::from_cents(1000),
            date(2024, 12, 31),
        )];
        let report = MonthlyReport::generate(&txns, 2024, 12).unwrap();
        assert_eq!(report.analysis.total_income.cents(), 1000);
    }
}
