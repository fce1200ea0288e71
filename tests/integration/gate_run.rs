use std::fs;

use tempfile::tempdir;

use crate::common::{
    run_gate, stderr, stdout, write_output, write_valid_outputs, PIPELINE_OUTPUTS,
};

#[test]
fn complete_outputs_pass_with_confirmation() {
    let temp = tempdir().expect("create temp dir");
    write_valid_outputs(temp.path());

    let output = run_gate(temp.path(), &[]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr:\n{}",
        stderr(&output)
    );
    assert_eq!(stdout(&output), "Validation passed.\n");
}

#[test]
fn missing_output_fails_naming_the_path() {
    let temp = tempdir().expect("create temp dir");
    write_valid_outputs(temp.path());
    fs::remove_file(temp.path().join("data_clean/subsidies.csv")).expect("remove output");

    let output = run_gate(temp.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty(), "stdout: {}", stdout(&output));
    assert!(
        stderr(&output).contains("Missing expected file: data_clean/subsidies.csv"),
        "stderr:\n{}",
        stderr(&output)
    );
}

#[test]
fn zero_byte_output_fails_before_schema_checks() {
    let temp = tempdir().expect("create temp dir");
    write_valid_outputs(temp.path());
    write_output(temp.path(), "data_clean/demographics.csv", "Year\n");
    write_output(temp.path(), "TRANSFORMATION/forecast_demographic.csv", "");

    let output = run_gate(temp.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(
        stderr.contains("Empty file: TRANSFORMATION/forecast_demographic.csv"),
        "stderr:\n{stderr}"
    );
    assert!(!stderr.contains("No rows in"), "stderr:\n{stderr}");
}

#[test]
fn missing_column_is_listed_exactly() {
    let temp = tempdir().expect("create temp dir");
    write_valid_outputs(temp.path());
    write_output(
        temp.path(),
        "data_clean/demographics.csv",
        "Districts & Neighbourhoods,Population\nCentrum,1000\n",
    );

    let output = run_gate(temp.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains(r#"Missing columns in data_clean/demographics.csv: ["Year"]"#),
        "stderr:\n{}",
        stderr(&output)
    );
}

#[test]
fn header_only_table_fails_as_empty() {
    let temp = tempdir().expect("create temp dir");
    write_valid_outputs(temp.path());
    write_output(
        temp.path(),
        "TRANSFORMATION/forecast_subsidy_final.csv",
        "subsidy_year,Education,Care\n",
    );

    let output = run_gate(temp.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("No rows in TRANSFORMATION/forecast_subsidy_final.csv"),
        "stderr:\n{}",
        stderr(&output)
    );
}

#[test]
fn missing_file_is_reported_before_bad_columns_elsewhere() {
    let temp = tempdir().expect("create temp dir");
    write_valid_outputs(temp.path());
    write_output(temp.path(), "data_clean/students.csv", "education_type\nA\n");
    let (last, _) = PIPELINE_OUTPUTS[PIPELINE_OUTPUTS.len() - 1];
    fs::remove_file(temp.path().join(last)).expect("remove output");

    let output = run_gate(temp.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(
        stderr.contains(&format!("Missing expected file: {last}")),
        "stderr:\n{stderr}"
    );
    assert!(!stderr.contains("Missing columns"), "stderr:\n{stderr}");
}

#[test]
fn root_flag_resolves_paths_elsewhere() {
    let outputs = tempdir().expect("create temp dir");
    let elsewhere = tempdir().expect("create temp dir");
    write_valid_outputs(outputs.path());
    let root = outputs.path().to_string_lossy().into_owned();

    let output = run_gate(elsewhere.path(), &["--root", &root]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr:\n{}",
        stderr(&output)
    );
    assert_eq!(stdout(&output), "Validation passed.\n");
}
