//! Final validation outcome.
//!
//! `status` is derived from the error list and never set independently:
//! `pass` iff no errors were recorded.

use crate::{ErrorRecord, Violation};
use serde::{Deserialize, Serialize};

/// Overall outcome of one validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// No violations were found
    Pass,
    /// At least one violation was found
    Fail,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Pass => write!(f, "pass"),
            Status::Fail => write!(f, "fail"),
        }
    }
}

/// The complete result of validating one table.
///
/// Constructed once per validation run and returned verbatim to the caller;
/// the shells serialize it unchanged as the response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    status: Status,
    errors: Vec<ErrorRecord>,
}

impl ValidationReport {
    /// Builds a report from typed violations, deriving the status.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self::from_records(violations.iter().map(Violation::to_record).collect())
    }

    /// Builds a report from wire records, deriving the status.
    pub fn from_records(errors: Vec<ErrorRecord>) -> Self {
        let status = if errors.is_empty() {
            Status::Pass
        } else {
            Status::Fail
        };
        Self { status, errors }
    }

    /// The derived overall status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// All recorded violations, in pipeline order.
    pub fn errors(&self) -> &[ErrorRecord] {
        &self.errors
    }

    /// Returns true if validation found no violations.
    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_report_passes() {
        let report = ValidationReport::from_records(Vec::new());
        assert!(report.passed());
        assert_eq!(report.status(), Status::Pass);
        assert!(report.errors().is_empty());
    }

    #[test]
    fn test_non_empty_report_fails() {
        let report =
            ValidationReport::from_violations(vec![Violation::insufficient_rows(10, 3)]);
        assert!(!report.passed());
        assert_eq!(report.status(), Status::Fail);
        assert_eq!(report.errors().len(), 1);
    }

    #[test]
    fn test_wire_shape() {
        let report = ValidationReport::from_violations(vec![Violation::missing_email(
            3,
            Some("u-3".into()),
        )]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["status"], "fail");
        assert_eq!(json["errors"][0]["row_index"], 3);
        assert_eq!(json["errors"][0]["id"], "u-3");
        assert_eq!(json["errors"][0]["column"], "email");
        assert_eq!(json["errors"][0]["error_message"], "Email is required.");
    }

    #[test]
    fn test_passing_wire_shape() {
        let report = ValidationReport::from_records(Vec::new());
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"status":"pass","errors":[]}"#);
    }
}
