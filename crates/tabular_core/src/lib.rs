//! # Tabular Core
//!
//! Core types for the tabular validation engine. This crate provides the
//! shared vocabulary between the loader, the rule pipeline, and the shells:
//!
//! - `Violation`: a typed rule violation with its display message
//! - `ErrorRecord`: the wire shape of one violation in a response body
//! - `ValidationReport`: the final `pass`/`fail` outcome with all records
//!
//! ## Example
//!
//! ```rust
//! use tabular_core::{ValidationReport, Violation};
//!
//! let violations = vec![Violation::missing_email(3, Some("u-3".into()))];
//! let report = ValidationReport::from_violations(violations);
//!
//! assert!(!report.passed());
//! assert_eq!(report.errors()[0].column, "email");
//! ```

mod record;
mod report;
mod violation;

pub use record::*;
pub use report::*;
pub use violation::*;
