//! The rule contract.
//!
//! The pipeline is an ordered list of independent rule objects sharing one
//! evaluation contract, so new rules append to the list without touching
//! existing ones.

use tabular_core::{IdValue, Violation};
use tabular_loader::{Row, Table};

/// What one rule stage produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    /// Violations found by this stage, in row order
    pub violations: Vec<Violation>,
    /// When true, no further stage runs and the report carries only this
    /// stage's violations
    pub halt: bool,
}

impl RuleOutcome {
    /// A clean outcome: nothing found, pipeline continues.
    pub fn clean() -> Self {
        Self {
            violations: Vec::new(),
            halt: false,
        }
    }

    /// Accumulating outcome: violations are appended, pipeline continues.
    pub fn accumulate(violations: Vec<Violation>) -> Self {
        Self {
            violations,
            halt: false,
        }
    }

    /// Short-circuit outcome: exactly one structural violation, pipeline
    /// stops here.
    pub fn halt_with(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
            halt: true,
        }
    }
}

/// One stage of the validation pipeline.
///
/// Implementations must be deterministic and side-effect free: the same
/// table always yields the same outcome.
pub trait Rule: Send + Sync {
    /// Stable name used in log events.
    fn name(&self) -> &'static str;

    /// Inspects the table and reports what this stage found.
    fn evaluate(&self, table: &Table) -> RuleOutcome;
}

/// Reads a row's declared `id` cell for error attribution.
///
/// The value is carried as-is, untyped; a missing or empty cell yields
/// `None` so structural absence and blank cells serialize as `null`.
pub(crate) fn declared_id(row: &Row) -> Option<IdValue> {
    match row.get("id") {
        Some("") | None => None,
        Some(raw) => Some(IdValue::Str(raw.to_string())),
    }
}
