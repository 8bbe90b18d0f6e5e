use anyhow::{Context, Result};
use tabular_loader::load_csv;

use crate::output;

/// Loads the table and prints its shape without running any rule.
pub fn execute(file: &str) -> Result<()> {
    let bytes =
        std::fs::read(file).with_context(|| format!("Failed to read file: {}", file))?;
    let table = load_csv(&bytes).with_context(|| format!("Failed to parse CSV: {}", file))?;

    output::print_success(&format!("Parsed {}", file));
    output::print_info(&format!("Columns: {}", table.header().join(", ")));
    output::print_info(&format!("Data rows: {}", table.len()));

    Ok(())
}
