//! Typed rule violations.
//!
//! Each variant corresponds to one outcome of the rule pipeline. The display
//! messages are part of the wire contract and mirror the upstream service's
//! wording exactly.

use crate::{ErrorRecord, IdValue};
use thiserror::Error;

/// A single independent violation found by the rule pipeline.
///
/// Structural variants carry no row attribution; row-level variants carry the
/// 1-based row index and the row's declared `id` cell.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    /// One or more required columns are absent from the header
    #[error("Missing required columns: {}", .columns.join(", "))]
    MissingColumns {
        /// Missing column names, sorted
        columns: Vec<String>,
    },

    /// The table holds too few data rows for validation to be meaningful
    #[error("File must contain more than {required} data rows. Found {found}.")]
    InsufficientRows { required: usize, found: usize },

    /// The `email` cell is empty or whitespace-only
    #[error("Email is required.")]
    MissingEmail {
        row_index: usize,
        id: Option<IdValue>,
    },

    /// The `age` cell is empty
    #[error("Age is missing or has an invalid format.")]
    MissingAge {
        row_index: usize,
        id: Option<IdValue>,
    },

    /// The `age` cell is not a base-10 integer
    #[error("Invalid age format: '{raw}'.")]
    InvalidAgeFormat {
        row_index: usize,
        id: Option<IdValue>,
        raw: String,
    },

    /// The `age` cell parses but falls outside the allowed range
    #[error("Age {age} is out of allowed range ({min}-{max}).")]
    AgeOutOfRange {
        row_index: usize,
        id: Option<IdValue>,
        age: String,
        min: i64,
        max: i64,
    },
}

impl Violation {
    /// Creates a missing-columns violation. Column names are sorted so the
    /// message is deterministic regardless of header order.
    pub fn missing_columns(mut columns: Vec<String>) -> Self {
        columns.sort();
        Self::MissingColumns { columns }
    }

    /// Creates an insufficient-rows violation.
    pub fn insufficient_rows(required: usize, found: usize) -> Self {
        Self::InsufficientRows { required, found }
    }

    /// Creates a missing-email violation for one row.
    pub fn missing_email(row_index: usize, id: Option<IdValue>) -> Self {
        Self::MissingEmail { row_index, id }
    }

    /// Creates a missing-age violation for one row.
    pub fn missing_age(row_index: usize, id: Option<IdValue>) -> Self {
        Self::MissingAge { row_index, id }
    }

    /// Creates an invalid-age-format violation for one row.
    pub fn invalid_age_format(row_index: usize, id: Option<IdValue>, raw: impl Into<String>) -> Self {
        Self::InvalidAgeFormat {
            row_index,
            id,
            raw: raw.into(),
        }
    }

    /// Creates an age-out-of-range violation for one row.
    pub fn age_out_of_range(
        row_index: usize,
        id: Option<IdValue>,
        age: impl Into<String>,
        min: i64,
        max: i64,
    ) -> Self {
        Self::AgeOutOfRange {
            row_index,
            id,
            age: age.into(),
            min,
            max,
        }
    }

    /// The 1-based row this violation is attributed to, if any.
    pub fn row_index(&self) -> Option<usize> {
        match self {
            Self::MissingColumns { .. } | Self::InsufficientRows { .. } => None,
            Self::MissingEmail { row_index, .. }
            | Self::MissingAge { row_index, .. }
            | Self::InvalidAgeFormat { row_index, .. }
            | Self::AgeOutOfRange { row_index, .. } => Some(*row_index),
        }
    }

    /// The declared `id` of the offending row, if any.
    pub fn id(&self) -> Option<&IdValue> {
        match self {
            Self::MissingColumns { .. } | Self::InsufficientRows { .. } => None,
            Self::MissingEmail { id, .. }
            | Self::MissingAge { id, .. }
            | Self::InvalidAgeFormat { id, .. }
            | Self::AgeOutOfRange { id, .. } => id.as_ref(),
        }
    }

    /// The column this violation is attributed to.
    ///
    /// Structural violations use the synthetic `columns`/`global` labels the
    /// response contract expects.
    pub fn column(&self) -> &'static str {
        match self {
            Self::MissingColumns { .. } => "columns",
            Self::InsufficientRows { .. } => "global",
            Self::MissingEmail { .. } => "email",
            Self::MissingAge { .. } | Self::InvalidAgeFormat { .. } | Self::AgeOutOfRange { .. } => {
                "age"
            }
        }
    }

    /// Returns true for dataset-level violations that short-circuit the
    /// pipeline.
    pub fn is_structural(&self) -> bool {
        self.row_index().is_none()
    }

    /// Converts this violation into its wire representation.
    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord::new(
            self.row_index(),
            self.id().cloned(),
            self.column(),
            self.to_string(),
        )
    }
}
