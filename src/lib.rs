//! pocketplan - deterministic personal-finance planning engine
//!
//! This library turns a read-only snapshot of a user's income, balance,
//! spending history and savings goals into a recommended daily spending
//! allowance, per-goal progress and forecast figures, and spending-pattern
//! analytics. All engine operations are pure functions: no I/O, no internal
//! state, and identical inputs always produce identical outputs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (money, profile, goals, transactions, snapshot)
//! - `services`: The planning engine (budget, progress, forecast, analysis)
//! - `reports`: Composed read-only reports built from engine calls
//! - `storage`: Read-only JSON snapshot loading
//! - `display`: Terminal rendering of reports
//! - `cli`: Command handlers for the `pocketplan` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pocketplan::models::{LedgerSnapshot, Money, UserProfile};
//! use pocketplan::services::plan_daily_budget;
//!
//! let profile = UserProfile::new(Money::from_cents(300_000), Money::from_cents(50_000));
//! let snapshot = LedgerSnapshot::new(profile);
//! let as_of = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
//!
//! let plan = plan_daily_budget(&snapshot.profile, &snapshot.goals, as_of);
//! assert_eq!(plan.daily_budget, Money::from_cents(25_000));
//! ```

pub mod cli;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PocketPlanError, PocketPlanResult};
