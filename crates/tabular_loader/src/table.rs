//! In-memory table representation.
//!
//! A `Table` is the full parsed dataset: an ordered header plus an ordered
//! sequence of rows. Rows are keyed by column name; every row carries the
//! same column keys as the header. Both are immutable once loaded.

use std::collections::HashMap;

/// A single data row.
///
/// `index` is 1-based among data rows (the header is row 0 in the source
/// file). Cells hold raw string values exactly as they appeared, including
/// surrounding whitespace; trimming is the responsibility of individual
/// rules, not the loader.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    index: usize,
    cells: HashMap<String, String>,
}

impl Row {
    /// Creates a row from its 1-based index and named cells.
    pub fn new(index: usize, cells: HashMap<String, String>) -> Self {
        Self { index, cells }
    }

    /// The row's 1-based position among data rows.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the raw cell value for a column, if the column exists.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Returns the cell value for a column after trimming surrounding
    /// whitespace. A missing column yields the empty string, matching how
    /// downstream rules treat absent cells.
    pub fn get_trimmed(&self, column: &str) -> &str {
        self.get(column).map(str::trim).unwrap_or("")
    }
}

/// The full parsed dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Assembles a table from a header and rows.
    ///
    /// The header preserves source order, casing, and duplicates as declared.
    pub fn new(header: Vec<String>, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    /// The column names as declared in the source, in order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Returns true if the header declares a column with this exact name.
    pub fn has_column(&self, name: &str) -> bool {
        self.header.iter().any(|h| h == name)
    }

    /// The data rows in source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
