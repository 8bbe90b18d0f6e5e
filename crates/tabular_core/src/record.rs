//! Wire representation of a single violation.
//!
//! The response body contract permits `id` to be either text or a number,
//! so the field is modeled as a tagged union rather than coerced to one
//! representation.

use serde::{Deserialize, Serialize};

/// The declared `id` of a data row, carried into error payloads as-is.
///
/// Serialized untagged: a JSON string for `Str`, a JSON number for `Int`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    /// Textual identifier
    Str(String),
    /// Numeric identifier
    Int(i64),
}

impl IdValue {
    /// Returns the textual form if this is a string identifier.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            IdValue::Str(s) => Some(s),
            IdValue::Int(_) => None,
        }
    }

    /// Returns the numeric form if this is an integer identifier.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            IdValue::Int(i) => Some(*i),
            IdValue::Str(_) => None,
        }
    }
}

impl From<&str> for IdValue {
    fn from(s: &str) -> Self {
        IdValue::Str(s.to_string())
    }
}

impl From<String> for IdValue {
    fn from(s: String) -> Self {
        IdValue::Str(s)
    }
}

impl From<i64> for IdValue {
    fn from(i: i64) -> Self {
        IdValue::Int(i)
    }
}

/// One violation as it appears in the response body.
///
/// `row_index` and `id` are `None` only for dataset-level (structural)
/// violations that are not attributable to a single row. Immutable value;
/// never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// 1-based index of the offending data row, `null` for structural errors
    pub row_index: Option<usize>,
    /// The row's declared `id` cell, `null` when missing or structural
    pub id: Option<IdValue>,
    /// Column the violation is attributed to
    pub column: String,
    /// Human-readable description of the violation
    pub error_message: String,
}

impl ErrorRecord {
    /// Creates a new error record.
    pub fn new(
        row_index: Option<usize>,
        id: Option<IdValue>,
        column: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            row_index,
            id,
            column: column.into(),
            error_message: error_message.into(),
        }
    }

    /// Returns true if this record describes a dataset-level violation.
    pub fn is_structural(&self) -> bool {
        self.row_index.is_none()
    }
}
