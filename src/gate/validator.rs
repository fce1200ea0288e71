//! Per-file checks: existence/size and table shape.

use std::path::Path;

use tracing::debug;

use crate::lib::{
    errors::ValidationError,
    fs::{probe_file, FileProbe},
    table::{load_table, TableSummary},
};

/// Fail unless `path` exists and has a non-zero size.
///
/// `label` is the declared manifest path used in the error.
pub fn assert_exists(path: &Path, label: &str) -> Result<(), ValidationError> {
    let probe = probe_file(path).map_err(|source| ValidationError::Metadata {
        path: label.to_string(),
        source,
    })?;

    match probe {
        FileProbe::Missing => Err(ValidationError::MissingFile {
            path: label.to_string(),
        }),
        FileProbe::Present { size_bytes: 0 } => Err(ValidationError::EmptyFile {
            path: label.to_string(),
        }),
        FileProbe::Present { size_bytes } => {
            debug!(
                target: "validate_outputs::gate",
                path = label,
                size_bytes,
                "Expected file present"
            );
            Ok(())
        }
    }
}

/// Load `path` as a table and check it has rows and every required column.
///
/// The row check runs first, so a header-only file fails as empty even when its
/// columns are wrong.
pub fn validate_table(
    path: &Path,
    label: &str,
    required_columns: Option<&[String]>,
) -> Result<TableSummary, ValidationError> {
    let summary = load_table(path, label)?;
    if summary.is_empty() {
        return Err(ValidationError::EmptyTable {
            path: label.to_string(),
        });
    }

    if let Some(required) = required_columns {
        let missing = summary.missing_columns(required);
        if !missing.is_empty() {
            return Err(ValidationError::MissingColumns {
                path: label.to_string(),
                missing,
            });
        }
    }

    debug!(
        target: "validate_outputs::gate",
        path = label,
        columns = summary.columns.len(),
        rows = summary.row_count,
        "Table shape accepted"
    );
    Ok(summary)
}
