//! End-to-end pipeline tests over loaded CSV tables.
//!
//! Exercises the short-circuit behavior of the structural stages, the
//! accumulation of the row-level stages, and the determinism of the whole
//! run: loader and engine together must behave identically on repeated
//! invocations.

use pretty_assertions::assert_eq;
use tabular_core::{IdValue, Status};
use tabular_loader::load_csv;
use tabular_validator::TableValidator;

fn csv_with_valid_rows(count: usize) -> String {
    let mut csv = String::from("id,email,age\n");
    for i in 0..count {
        csv.push_str(&format!("u-{i},user{i}@example.com,{}\n", 20 + i % 60));
    }
    csv
}

#[test]
fn fifteen_valid_rows_pass_with_empty_errors() {
    let table = load_csv(csv_with_valid_rows(15).as_bytes()).unwrap();
    let report = TableValidator::new().validate(&table);

    assert_eq!(report.status(), Status::Pass);
    assert!(report.errors().is_empty());

    let body = serde_json::to_string(&report).unwrap();
    assert_eq!(body, r#"{"status":"pass","errors":[]}"#);
}

#[test]
fn missing_required_column_yields_exactly_one_structural_error() {
    let mut csv = String::from("id,age\n");
    for i in 0..15 {
        csv.push_str(&format!("u-{i},30\n"));
    }
    let table = load_csv(csv.as_bytes()).unwrap();
    let report = TableValidator::new().validate(&table);

    assert_eq!(report.status(), Status::Fail);
    assert_eq!(report.errors().len(), 1);

    let error = &report.errors()[0];
    assert_eq!(error.row_index, None);
    assert_eq!(error.id, None);
    assert_eq!(error.column, "columns");
    assert_eq!(error.error_message, "Missing required columns: email");
}

#[test]
fn five_row_table_yields_single_volume_error() {
    let table = load_csv(csv_with_valid_rows(5).as_bytes()).unwrap();
    let report = TableValidator::new().validate(&table);

    assert_eq!(report.status(), Status::Fail);
    assert_eq!(report.errors().len(), 1);

    let error = &report.errors()[0];
    assert_eq!(error.row_index, None);
    assert_eq!(error.column, "global");
    assert_eq!(
        error.error_message,
        "File must contain more than 10 data rows. Found 5."
    );
}

#[test]
fn email_errors_precede_age_errors() {
    // 15-row table, row 3 has an empty email and row 7 has age "abc"
    let mut csv = String::from("id,email,age\n");
    for i in 1..=15 {
        match i {
            3 => csv.push_str(&format!("u-{i},,30\n")),
            7 => csv.push_str(&format!("u-{i},user{i}@example.com,abc\n")),
            _ => csv.push_str(&format!("u-{i},user{i}@example.com,30\n")),
        }
    }
    let table = load_csv(csv.as_bytes()).unwrap();
    let report = TableValidator::new().validate(&table);

    assert_eq!(report.status(), Status::Fail);
    assert_eq!(report.errors().len(), 2);

    let email_error = &report.errors()[0];
    assert_eq!(email_error.row_index, Some(3));
    assert_eq!(email_error.id, Some(IdValue::Str("u-3".into())));
    assert_eq!(email_error.column, "email");
    assert_eq!(email_error.error_message, "Email is required.");

    let age_error = &report.errors()[1];
    assert_eq!(age_error.row_index, Some(7));
    assert_eq!(age_error.id, Some(IdValue::Str("u-7".into())));
    assert_eq!(age_error.column, "age");
    assert_eq!(age_error.error_message, "Invalid age format: 'abc'.");
}

#[test]
fn row_with_blank_email_and_bad_age_gets_two_errors() {
    let mut csv = csv_with_valid_rows(11);
    csv.push_str("u-bad,,17\n");
    let table = load_csv(csv.as_bytes()).unwrap();
    let report = TableValidator::new().validate(&table);

    assert_eq!(report.errors().len(), 2);
    for error in report.errors() {
        assert_eq!(error.row_index, Some(12));
        assert_eq!(error.id, Some(IdValue::Str("u-bad".into())));
    }
    assert_eq!(report.errors()[0].column, "email");
    assert_eq!(report.errors()[1].column, "age");
}

#[test]
fn age_range_bounds_are_inclusive() {
    let mut csv = String::from("id,email,age\n");
    let ages = ["17", "18", "100", "101"];
    for (i, age) in ages.iter().enumerate() {
        csv.push_str(&format!("u-{i},user{i}@example.com,{age}\n"));
    }
    for i in ages.len()..12 {
        csv.push_str(&format!("u-{i},user{i}@example.com,50\n"));
    }
    let table = load_csv(csv.as_bytes()).unwrap();
    let report = TableValidator::new().validate(&table);

    // Only 17 and 101 are out of range
    assert_eq!(report.errors().len(), 2);
    assert_eq!(report.errors()[0].row_index, Some(1));
    assert_eq!(
        report.errors()[0].error_message,
        "Age 17 is out of allowed range (18-100)."
    );
    assert_eq!(report.errors()[1].row_index, Some(4));
    assert_eq!(
        report.errors()[1].error_message,
        "Age 101 is out of allowed range (18-100)."
    );
}

#[test]
fn validation_is_idempotent_byte_for_byte() {
    let mut csv = csv_with_valid_rows(12);
    csv.push_str("u-x,, unknown \n");
    let table = load_csv(csv.as_bytes()).unwrap();

    let validator = TableValidator::new();
    let first = serde_json::to_string(&validator.validate(&table)).unwrap();
    let second = serde_json::to_string(&validator.validate(&table)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn ragged_rows_are_validated_not_dropped() {
    // Row with missing cells still reaches the rules: its absent email and
    // age read as empty and are both reported
    let mut csv = csv_with_valid_rows(11);
    csv.push_str("u-short\n");
    let table = load_csv(csv.as_bytes()).unwrap();
    let report = TableValidator::new().validate(&table);

    assert_eq!(table.len(), 12);
    assert_eq!(report.errors().len(), 2);
    assert_eq!(report.errors()[0].column, "email");
    assert_eq!(report.errors()[0].row_index, Some(12));
    assert_eq!(report.errors()[1].column, "age");
    assert_eq!(
        report.errors()[1].error_message,
        "Age is missing or has an invalid format."
    );
}
