//! # Tabular Loader
//!
//! Turns raw uploaded bytes into a row-oriented in-memory [`Table`]:
//! the first line becomes the header, every subsequent line one [`Row`] in
//! source order with 1-based indexing. Ragged rows are accepted as records
//! (missing cells read as empty strings) so downstream rules can report
//! per-field issues instead of the whole file being rejected.
//!
//! ## Example
//!
//! ```rust
//! use tabular_loader::load_csv;
//!
//! let table = load_csv(b"id,email,age\nu-1,a@b.c,30\n").unwrap();
//! assert_eq!(table.header(), &["id", "email", "age"]);
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.rows()[0].get("email"), Some("a@b.c"));
//! ```

mod table;

pub use table::*;

use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Errors raised when the byte stream cannot be parsed as delimited text.
///
/// These are input errors, surfaced by the shells as transport-level
/// failures; they never appear inside a validation report.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The stream is not parseable as CSV (e.g. invalid UTF-8)
    #[error("Unable to read CSV: {0}")]
    Malformed(#[from] csv::Error),

    /// The input holds no bytes at all
    #[error("Uploaded file is empty.")]
    EmptyInput,

    /// The input has no header line
    #[error("CSV input has no header line")]
    MissingHeader,
}

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Parses raw bytes into a [`Table`].
///
/// The header row is taken as-is: order, casing, and duplicate names are
/// preserved. Each data row is keyed by the header; a row with fewer cells
/// than the header pads the missing cells with empty strings, a row with
/// more cells keeps only the named ones. No row is ever silently dropped.
pub fn load_csv(bytes: &[u8]) -> Result<Table> {
    if bytes.is_empty() {
        return Err(LoaderError::EmptyInput);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if header.iter().all(|name| name.is_empty()) {
        return Err(LoaderError::MissingHeader);
    }

    let mut rows = Vec::new();
    for (offset, record) in reader.records().enumerate() {
        let record = record?;
        let mut cells = HashMap::with_capacity(header.len());
        for (position, name) in header.iter().enumerate() {
            let value = record.get(position).unwrap_or("");
            cells.insert(name.clone(), value.to_string());
        }
        // Data rows are 1-based; the header is row 0
        rows.push(Row::new(offset + 1, cells));
    }

    debug!(columns = header.len(), rows = rows.len(), "loaded table");

    Ok(Table::new(header, rows))
}
