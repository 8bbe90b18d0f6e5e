//! Email completeness check.
//!
//! Third pipeline stage: every row must carry a non-blank `email` cell.
//! Evaluates every row independently and never halts, so multiple violating
//! rows each contribute their own error.

use crate::{Rule, RuleOutcome, rule::declared_id};
use tabular_core::Violation;
use tabular_loader::Table;

/// Flags rows whose `email` cell is empty or whitespace-only.
pub struct EmailPresenceRule;

impl EmailPresenceRule {
    /// Creates the rule.
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmailPresenceRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for EmailPresenceRule {
    fn name(&self) -> &'static str {
        "email-presence"
    }

    fn evaluate(&self, table: &Table) -> RuleOutcome {
        let violations = table
            .rows()
            .iter()
            .filter(|row| row.get_trimmed("email").is_empty())
            .map(|row| Violation::missing_email(row.index(), declared_id(row)))
            .collect();

        RuleOutcome::accumulate(violations)
    }
}
