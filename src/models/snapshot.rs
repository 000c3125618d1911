//! Ledger snapshot
//!
//! A snapshot is the read-only unit of input the engine consumes: the user's
//! profile plus their goals and transactions, as assembled by the caller at
//! call time. The engine holds no state between calls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::goal::Goal;
use super::profile::UserProfile;
use super::transaction::Transaction;
use crate::error::PocketPlanResult;

/// A self-consistent snapshot of one user's financial data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Profile figures (income, balance, spending preferences)
    pub profile: UserProfile,

    /// All goals, lapsed ones included
    #[serde(default)]
    pub goals: Vec<Goal>,

    /// Transactions, typically pre-filtered to a date range by the caller
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl LedgerSnapshot {
    /// Create a snapshot with no goals or transactions
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            goals: Vec::new(),
            transactions: Vec::new(),
        }
    }

    /// Goals whose deadline has not lapsed as of `as_of`
    pub fn active_goals(&self, as_of: NaiveDate) -> Vec<&Goal> {
        self.goals.iter().filter(|g| g.is_active(as_of)).collect()
    }

    /// Validate every goal and transaction in the snapshot
    pub fn validate(&self) -> PocketPlanResult<()> {
        for goal in &self.goals {
            goal.validate()?;
        }
        for txn in &self.transactions {
            txn.validate()?;
        }
        Ok(())
    }
}
