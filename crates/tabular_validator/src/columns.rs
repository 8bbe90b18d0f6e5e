//! Required-columns check.
//!
//! First pipeline stage. Per-row rules are meaningless when their columns may
//! not exist, so any absence halts the pipeline with a single structural
//! error.

use crate::{REQUIRED_COLUMNS, Rule, RuleOutcome};
use tabular_core::Violation;
use tabular_loader::Table;

/// Verifies that every required column is declared in the header.
///
/// Matching is case-sensitive and exact: `Email` does not satisfy `email`.
pub struct RequiredColumnsRule {
    required: Vec<&'static str>,
}

impl RequiredColumnsRule {
    /// Creates the rule with the engine's required column set.
    pub fn new() -> Self {
        Self {
            required: REQUIRED_COLUMNS.to_vec(),
        }
    }
}

impl Default for RequiredColumnsRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for RequiredColumnsRule {
    fn name(&self) -> &'static str {
        "required-columns"
    }

    fn evaluate(&self, table: &Table) -> RuleOutcome {
        let missing: Vec<String> = self
            .required
            .iter()
            .filter(|column| !table.has_column(column))
            .map(|column| column.to_string())
            .collect();

        if missing.is_empty() {
            RuleOutcome::clean()
        } else {
            RuleOutcome::halt_with(Violation::missing_columns(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabular_loader::load_csv;

    #[test]
    fn test_all_columns_present() {
        let table = load_csv(b"id,email,age\n").unwrap();
        let outcome = RequiredColumnsRule::new().evaluate(&table);
        assert_eq!(outcome, RuleOutcome::clean());
    }

    #[test]
    fn test_extra_columns_allowed() {
        let table = load_csv(b"id,email,age,notes\n").unwrap();
        let outcome = RequiredColumnsRule::new().evaluate(&table);
        assert!(!outcome.halt);
        assert!(outcome.violations.is_empty());
    }

    #[test]
    fn test_single_missing_column_halts() {
        let table = load_csv(b"id,email\n").unwrap();
        let outcome = RequiredColumnsRule::new().evaluate(&table);

        assert!(outcome.halt);
        assert_eq!(outcome.violations.len(), 1);
        assert_eq!(
            outcome.violations[0].to_string(),
            "Missing required columns: age"
        );
    }

    #[test]
    fn test_multiple_missing_columns_one_error() {
        let table = load_csv(b"name\n").unwrap();
        let outcome = RequiredColumnsRule::new().evaluate(&table);

        assert!(outcome.halt);
        assert_eq!(outcome.violations.len(), 1);
        assert_eq!(
            outcome.violations[0].to_string(),
            "Missing required columns: age, email, id"
        );
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let table = load_csv(b"Id,Email,Age\n").unwrap();
        let outcome = RequiredColumnsRule::new().evaluate(&table);

        assert!(outcome.halt);
        assert_eq!(
            outcome.violations[0].to_string(),
            "Missing required columns: age, email, id"
        );
    }
}
