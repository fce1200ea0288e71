use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    gate::validator::{assert_exists, validate_table},
    lib::{errors::ValidationError, fs::resolve_under, telemetry::RunSpan},
    manifest::{ExpectedFile, Manifest},
};

/// Message printed on stdout when every check passed.
pub const PASS_MESSAGE: &str = "Validation passed.";

/// Counts from a run where every check passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateReport {
    pub files_checked: usize,
    pub tables_validated: usize,
}

/// Run every check in the manifest against files under `root`.
///
/// All existence checks run before any table is opened. The first failure
/// stops the run and is returned unchanged.
pub fn run(manifest: &Manifest, root: &Path) -> Result<GateReport, ValidationError> {
    let run_span = RunSpan::start(&manifest.source.to_string(), manifest.files.len());
    let outcome = {
        let _entered = run_span.span().enter();
        info!(
            target: "validate_outputs::gate",
            root = %root.display(),
            "Starting output validation"
        );
        run_checks(&manifest.files, root)
    };

    match outcome {
        Ok(report) => {
            run_span.finish_passed(report.files_checked, report.tables_validated);
            Ok(report)
        }
        Err(err) => {
            run_span.finish_failed(&err);
            Err(err)
        }
    }
}

fn run_checks(files: &[ExpectedFile], root: &Path) -> Result<GateReport, ValidationError> {
    let resolved: Vec<(PathBuf, &ExpectedFile)> = files
        .iter()
        .map(|file| (resolve_under(root, Path::new(&file.path)), file))
        .collect();

    for (path, file) in &resolved {
        assert_exists(path, &file.path)?;
    }

    for (path, file) in &resolved {
        validate_table(path, &file.path, file.required_columns.as_deref())?;
    }

    Ok(GateReport {
        files_checked: resolved.len(),
        tables_validated: resolved.len(),
    })
}
