//! Age validity check.
//!
//! Fourth pipeline stage: every row's `age` cell must be a base-10 integer
//! within the inclusive [`AGE_MIN`](crate::AGE_MIN)..[`AGE_MAX`](crate::AGE_MAX)
//! range. A row contributes at most one age violation; the format check takes
//! precedence over the range check. Never halts.

use crate::{AGE_MAX, AGE_MIN, Rule, RuleOutcome, rule::declared_id};
use regex::Regex;
use std::sync::LazyLock;
use tabular_core::Violation;
use tabular_loader::{Row, Table};

static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+$").expect("valid pattern"));

/// Flags rows whose `age` cell is missing, malformed, or out of range.
pub struct AgeRule {
    min: i64,
    max: i64,
}

impl AgeRule {
    /// Creates the rule with the engine's allowed age range.
    pub fn new() -> Self {
        Self {
            min: AGE_MIN,
            max: AGE_MAX,
        }
    }

    /// Classifies one row's `age` cell, returning at most one violation.
    fn check_row(&self, row: &Row) -> Option<Violation> {
        let raw = row.get("age").unwrap_or("");
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Some(Violation::missing_age(row.index(), declared_id(row)));
        }

        if !INTEGER_RE.is_match(trimmed) {
            // The message shows the cell as it appeared, whitespace included
            return Some(Violation::invalid_age_format(
                row.index(),
                declared_id(row),
                raw,
            ));
        }

        match trimmed.parse::<i64>() {
            Ok(age) if (self.min..=self.max).contains(&age) => None,
            Ok(age) => Some(Violation::age_out_of_range(
                row.index(),
                declared_id(row),
                age.to_string(),
                self.min,
                self.max,
            )),
            // An integer literal too large for i64 cannot fall in range
            Err(_) => Some(Violation::age_out_of_range(
                row.index(),
                declared_id(row),
                trimmed,
                self.min,
                self.max,
            )),
        }
    }
}

impl Default for AgeRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for AgeRule {
    fn name(&self) -> &'static str {
        "age-validity"
    }

    fn evaluate(&self, table: &Table) -> RuleOutcome {
        let violations = table
            .rows()
            .iter()
            .filter_map(|row| self.check_row(row))
            .collect();

        RuleOutcome::accumulate(violations)
    }
}
