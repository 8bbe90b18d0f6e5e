use anyhow::{Context, Result};
use tabular_loader::load_csv;
use tabular_validator::TableValidator;
use tracing::info;

use crate::output;

pub fn execute(file: &str, format: &str) -> Result<()> {
    info!("Validating file: {}", file);

    let bytes =
        std::fs::read(file).with_context(|| format!("Failed to read file: {}", file))?;
    let table = load_csv(&bytes).with_context(|| format!("Failed to parse CSV: {}", file))?;

    output::print_info(&format!(
        "Table loaded: {} columns, {} data rows",
        table.header().len(),
        table.len()
    ));

    let report = TableValidator::new().validate(&table);
    output::print_validation_report(&report, format);

    if !report.passed() {
        std::process::exit(1);
    }

    Ok(())
}
