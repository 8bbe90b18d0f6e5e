//! Volume check.
//!
//! Second pipeline stage: the table must hold strictly more than
//! [`MIN_DATA_ROWS`](crate::MIN_DATA_ROWS) data rows, otherwise the pipeline
//! halts with a single structural error and no per-row stage runs.

use crate::{MIN_DATA_ROWS, Rule, RuleOutcome};
use tabular_core::Violation;
use tabular_loader::Table;

/// Rejects datasets with too few data rows.
pub struct VolumeRule {
    required: usize,
}

impl VolumeRule {
    /// Creates the rule with the engine's row-count threshold.
    pub fn new() -> Self {
        Self {
            required: MIN_DATA_ROWS,
        }
    }
}

impl Default for VolumeRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for VolumeRule {
    fn name(&self) -> &'static str {
        "volume"
    }

    fn evaluate(&self, table: &Table) -> RuleOutcome {
        let found = table.len();
        if found > self.required {
            RuleOutcome::clean()
        } else {
            RuleOutcome::halt_with(Violation::insufficient_rows(self.required, found))
        }
    }
}
