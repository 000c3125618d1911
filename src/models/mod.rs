//! Core data models for pocketplan
//!
//! This module contains the data structures the planning engine consumes:
//! money, user profile, goals, transactions, and the snapshot container that
//! bundles them for a single engine call.

pub mod category;
pub mod goal;
pub mod money;
pub mod profile;
pub mod snapshot;
pub mod transaction;
pub mod weekday;

pub use category::ExpenseCategory;
pub use goal::Goal;
pub use money::Money;
pub use profile::{BudgetMultiplier, UserProfile};
pub use snapshot::LedgerSnapshot;
pub use transaction::{Transaction, TransactionType};
pub use weekday::Weekday;
