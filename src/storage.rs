//! Read-only snapshot loading
//!
//! The engine itself performs no I/O; this module is the boundary where a
//! snapshot file becomes a validated `LedgerSnapshot`. Monetary fields are
//! integer cents and the multiplier is integer hundredths, matching the
//! serde representations of `Money` and `BudgetMultiplier`.

use std::fs;
use std::path::Path;

use crate::error::PocketPlanResult;
use crate::models::LedgerSnapshot;

/// Load and validate a snapshot from a JSON file
pub fn load_snapshot(path: &Path) -> PocketPlanResult<LedgerSnapshot> {
    let contents = fs::read_to_string(path)?;
    let snapshot: LedgerSnapshot = serde_json::from_str(&contents)?;
    snapshot.validate()?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PocketPlanError;
    use std::io::Write;

    const SNAPSHOT_JSON: &str = r#"{
        "profile": {
            "monthly_income": 300000,
            "current_amount": 50000,
            "daily_budget_multiplier": 150,
            "preferred_spending_days": ["Saturday"]
        },
        "goals": [
            {
                "name": "Laptop",
                "target_amount": 200000,
                "deadline": "2025-03-10",
                "created_at": "2025-01-01"
            }
        ],
        "transactions": [
            {"amount": 4500, "type": "expense", "category": "GROCERIES", "date": "2025-01-05"}
        ]
    }"#;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_snapshot() {
        let file = write_temp(SNAPSHOT_JSON);
        let snapshot = load_snapshot(file.path()).unwrap();

        assert_eq!(snapshot.profile.monthly_income.cents(), 300_000);
        assert_eq!(snapshot.profile.daily_budget_multiplier.hundredths(), 150);
        assert_eq!(snapshot.goals.len(), 1);
        assert_eq!(snapshot.transactions.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = load_snapshot(Path::new("/nonexistent/snapshot.json")).unwrap_err();
        assert!(matches!(err, PocketPlanError::Io(_)));
    }

    #[test]
    fn test_malformed_json() {
        let file = write_temp("{not json");
        let err = load_snapshot(file.path()).unwrap_err();
        assert!(matches!(err, PocketPlanError::Json(_)));
    }

    #[test]
    fn test_invalid_snapshot_rejected() {
        let file = write_temp(
            r#"{
                "profile": {"monthly_income": 0, "current_amount": 0},
                "goals": [{"target_amount": 0, "deadline": "2025-03-10", "created_at": "2025-01-01"}],
                "transactions": []
            }"#,
        );
        let err = load_snapshot(file.path()).unwrap_err();
        assert!(err.is_validation());
    }
}
