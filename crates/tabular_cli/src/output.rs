use colored::*;
use tabular_core::{ErrorRecord, ValidationReport};

pub fn print_validation_report(report: &ValidationReport, format: &str) {
    match format {
        "json" => print_json_report(report),
        _ => print_text_report(report),
    }
}

fn print_text_report(report: &ValidationReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    if !report.errors().is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for (i, error) in report.errors().iter().enumerate() {
            println!("  {}. {}", i + 1, describe(error).red());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Total errors: {}", report.errors().len());
    println!("{}", "═".repeat(60));
}

fn describe(error: &ErrorRecord) -> String {
    match error.row_index {
        Some(row) => format!("row {} [{}]: {}", row, error.column, error.error_message),
        None => format!("[{}]: {}", error.column, error.error_message),
    }
}

fn print_json_report(report: &ValidationReport) {
    // The JSON form is the wire shape, verbatim
    match serde_json::to_string_pretty(report) {
        Ok(body) => println!("{}", body),
        Err(err) => eprintln!("Failed to serialize report: {}", err),
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
