//! Transaction model
//!
//! Transactions are immutable inputs to the planning engine: the engine never
//! creates, updates, or deletes them. Amounts are always positive; direction
//! is carried by the transaction type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::money::Money;
use crate::error::{PocketPlanError, PocketPlanResult};

/// Whether a transaction adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Amount (always positive; direction is given by `kind`)
    pub amount: Money,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Expense category; never present on income transactions
    #[serde(default)]
    pub category: Option<ExpenseCategory>,

    /// Transaction date
    pub date: NaiveDate,

    /// Free-form description
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create an income transaction
    pub fn income(amount: Money, date: NaiveDate) -> Self {
        Self {
            amount,
            kind: TransactionType::Income,
            category: None,
            date,
            description: String::new(),
        }
    }

    /// Create an expense transaction
    pub fn expense(amount: Money, category: ExpenseCategory, date: NaiveDate) -> Self {
        Self {
            amount,
            kind: TransactionType::Expense,
            category: Some(category),
            date,
            description: String::new(),
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Validate the transaction
    ///
    /// Amounts must be positive and income transactions never carry a
    /// category. Expense categories are optional (uncategorized expenses are
    /// legal; they simply do not appear in category breakdowns).
    pub fn validate(&self) -> PocketPlanResult<()> {
        if !self.amount.is_positive() {
            return Err(PocketPlanError::Validation(format!(
                "transaction amount must be positive, got {}",
                self.amount
            )));
        }

        if self.is_income() && self.category.is_some() {
            return Err(PocketPlanError::Validation(
                "income transactions cannot carry an expense category".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_constructors() {
        let income = Transaction::income(Money::from_cents(200_000), day(1));
        assert!(income.is_income());
        assert!(income.category.is_none());

        let expense =
            Transaction::expense(Money::from_cents(4500), ExpenseCategory::Groceries, day(2));
        assert!(expense.is_expense());
        assert_eq!(expense.category, Some(ExpenseCategory::Groceries));
    }

    #[test]
    fn test_validate_rejects_nonpositive_amount() {
        let txn = Transaction::income(Money::zero(), day(1));
        assert!(txn.validate().is_err());

        let txn = Transaction::income(Money::from_cents(-100), day(1));
        assert!(txn.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_categorized_income() {
        let mut txn = Transaction::income(Money::from_cents(100), day(1));
        txn.category = Some(ExpenseCategory::Shopping);
        assert!(txn.validate().is_err());
    }

    #[test]
    fn test_uncategorized_expense_is_valid() {
        let mut txn =
            Transaction::expense(Money::from_cents(100), ExpenseCategory::Shopping, day(1));
        txn.category = None;
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{"amount":4500,"type":"expense","category":"GROCERIES","date":"2025-01-02"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.kind, TransactionType::Expense);
        assert_eq!(txn.category, Some(ExpenseCategory::Groceries));
        assert_eq!(txn.amount.cents(), 4500);
    }
}
