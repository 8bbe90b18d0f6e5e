//! # Tabular Validator
//!
//! Validation engine for tabular datasets. Consumes a parsed [`Table`] and a
//! fixed, ordered rule set and returns a [`ValidationReport`] with every
//! violation found — row-level checks accumulate across the whole table
//! instead of failing fast, while structural checks (missing columns, too few
//! rows) short-circuit the pipeline with a single dataset-level error.
//!
//! ## Example
//!
//! ```rust
//! use tabular_loader::load_csv;
//! use tabular_validator::TableValidator;
//!
//! let table = load_csv(b"id,email,age\nu-1,,17\n").unwrap();
//! let report = TableValidator::new().validate(&table);
//!
//! // Too few rows: the volume check halts with one structural error
//! assert!(!report.passed());
//! assert_eq!(report.errors().len(), 1);
//! assert_eq!(report.errors()[0].column, "global");
//! ```
//!
//! [`Table`]: tabular_loader::Table
//! [`ValidationReport`]: tabular_core::ValidationReport

mod age;
mod columns;
mod email;
mod engine;
mod rule;
mod volume;

pub use age::*;
pub use columns::*;
pub use email::*;
pub use engine::*;
pub use rule::*;
pub use volume::*;

/// Columns every dataset must declare, matched case-sensitively.
pub const REQUIRED_COLUMNS: [&str; 3] = ["id", "email", "age"];

/// A table must contain strictly more data rows than this.
pub const MIN_DATA_ROWS: usize = 10;

/// Inclusive lower bound for a valid age.
pub const AGE_MIN: i64 = 18;

/// Inclusive upper bound for a valid age.
pub const AGE_MAX: i64 = 100;
