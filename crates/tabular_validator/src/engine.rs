//! Pipeline orchestration.
//!
//! Runs the rule stages in their fixed order: required columns, volume,
//! email completeness, age validity. Structural stages halt the pipeline;
//! row-level stages accumulate. Violations are concatenated rule-major —
//! all of one stage's errors (in row order) before the next stage's.

use crate::{AgeRule, EmailPresenceRule, RequiredColumnsRule, Rule, VolumeRule};
use tabular_core::ValidationReport;
use tabular_loader::Table;
use tracing::debug;

/// The validation engine: an ordered rule pipeline over one table.
///
/// Deterministic and side-effect free — the same table always yields the
/// same report, byte for byte. Carries no mutable state, so one validator
/// can serve any number of sequential or concurrent requests.
///
/// # Example
///
/// ```rust
/// use tabular_loader::load_csv;
/// use tabular_validator::TableValidator;
///
/// let table = load_csv(b"id,age\nu-1,30\n").unwrap();
/// let report = TableValidator::new().validate(&table);
///
/// assert!(!report.passed());
/// assert_eq!(report.errors()[0].error_message, "Missing required columns: email");
/// ```
pub struct TableValidator {
    rules: Vec<Box<dyn Rule>>,
}

impl TableValidator {
    /// Creates a validator with the standard pipeline.
    pub fn new() -> Self {
        Self::with_rules(vec![
            Box::new(RequiredColumnsRule::new()),
            Box::new(VolumeRule::new()),
            Box::new(EmailPresenceRule::new()),
            Box::new(AgeRule::new()),
        ])
    }

    /// Creates a validator with a custom pipeline, evaluated in order.
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Validates a table against the pipeline.
    ///
    /// Returns a report whose `status` is `pass` iff no violations were
    /// found. On a structural halt the report carries exactly that stage's
    /// single error and nothing else.
    pub fn validate(&self, table: &Table) -> ValidationReport {
        let mut violations = Vec::new();

        for rule in &self.rules {
            let outcome = rule.evaluate(table);
            debug!(
                rule = rule.name(),
                violations = outcome.violations.len(),
                halt = outcome.halt,
                "rule evaluated"
            );

            if outcome.halt {
                // A halting stage replaces the result with its own violations
                return ValidationReport::from_violations(outcome.violations);
            }
            violations.extend(outcome.violations);
        }

        ValidationReport::from_violations(violations)
    }
}

impl Default for TableValidator {
    fn default() -> Self {
        Self::new()
    }
}
