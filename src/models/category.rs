//! Expense category enumeration
//!
//! Categories form a fixed, closed set. The declaration order below is the
//! canonical order used to break ties deterministically when ranking
//! categories by spending, so reordering variants is a behavior change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Expense category for a transaction
///
/// `Ord` follows declaration order, which doubles as the canonical tie-break
/// order for spending rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    FoodDining,
    Groceries,
    Transportation,
    Shopping,
    Entertainment,
    BillsUtilities,
    Healthcare,
    Education,
    Travel,
    Fitness,
    PersonalCare,
    GiftsDonations,
    Business,
    Miscellaneous,
}

impl ExpenseCategory {
    /// All categories in canonical order
    pub const ALL: [ExpenseCategory; 14] = [
        Self::FoodDining,
        Self::Groceries,
        Self::Transportation,
        Self::Shopping,
        Self::Entertainment,
        Self::BillsUtilities,
        Self::Healthcare,
        Self::Education,
        Self::Travel,
        Self::Fitness,
        Self::PersonalCare,
        Self::GiftsDonations,
        Self::Business,
        Self::Miscellaneous,
    ];

    /// Human-readable label for display
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FoodDining => "Food & Dining",
            Self::Groceries => "Groceries",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::BillsUtilities => "Bills & Utilities",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Travel => "Travel",
            Self::Fitness => "Fitness",
            Self::PersonalCare => "Personal Care",
            Self::GiftsDonations => "Gifts & Donations",
            Self::Business => "Business",
            Self::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
