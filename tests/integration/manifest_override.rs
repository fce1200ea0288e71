use std::process::Command;

use tempfile::tempdir;

use crate::common::{fixture, run_gate, stderr, stdout, write_output, BINARY_PATH, MANIFEST_ENV};

#[test]
fn manifest_flag_replaces_builtin_expectations() {
    let temp = tempdir().expect("create temp dir");
    write_output(temp.path(), "out/summary.csv", "Region,Total\nNorth,3\n");
    write_output(temp.path(), "out/notes.csv", "note\nok\n");
    let manifest = fixture("tests/fixtures/manifest_valid.toml");
    let manifest = manifest.to_string_lossy().into_owned();

    let output = run_gate(temp.path(), &["--manifest", &manifest]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr:\n{}",
        stderr(&output)
    );
    assert_eq!(stdout(&output), "Validation passed.\n");
}

#[test]
fn manifest_from_environment_is_used() {
    let temp = tempdir().expect("create temp dir");
    write_output(temp.path(), "out/summary.csv", "Region\nNorth\n");
    write_output(temp.path(), "out/notes.csv", "note\nok\n");

    let output = Command::new(BINARY_PATH)
        .current_dir(temp.path())
        .env(MANIFEST_ENV, fixture("tests/fixtures/manifest_valid.toml"))
        .env("RUST_LOG", "warn")
        .output()
        .expect("gate binary should start");

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains(r#"Missing columns in out/summary.csv: ["Total"]"#),
        "stderr:\n{}",
        stderr(&output)
    );
}

#[test]
fn invalid_manifest_exits_with_configuration_code() {
    let temp = tempdir().expect("create temp dir");
    let manifest = fixture("tests/fixtures/manifest_missing_files.toml");
    let manifest = manifest.to_string_lossy().into_owned();

    let output = run_gate(temp.path(), &["--manifest", &manifest]);

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains("is missing `files`"),
        "stderr:\n{}",
        stderr(&output)
    );
}

#[test]
fn manifest_command_prints_builtin_table() {
    let temp = tempdir().expect("create temp dir");

    let output = run_gate(temp.path(), &["manifest"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr:\n{}",
        stderr(&output)
    );
    let stdout = stdout(&output);
    assert!(stdout.contains("[[files]]"), "stdout:\n{stdout}");
    assert!(
        stdout.contains("Districts & Neighbourhoods"),
        "stdout:\n{stdout}"
    );
}
