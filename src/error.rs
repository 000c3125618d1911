//! Custom error types for pocketplan
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions. The planning engine itself never fails
//! on a well-typed snapshot; errors arise only at the boundaries (snapshot
//! loading, argument parsing, report period validation).

use thiserror::Error;

/// The main error type for pocketplan operations
#[derive(Error, Debug)]
pub enum PocketPlanError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for snapshot data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Date or period parsing errors
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Report period errors (e.g. month outside 1-12)
    #[error("Invalid report period: {0}")]
    InvalidPeriod(String),
}

impl PocketPlanError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for PocketPlanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PocketPlanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for pocketplan operations
pub type PocketPlanResult<T> = Result<T, PocketPlanError>;
