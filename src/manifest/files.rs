use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

use super::ExpectedFile;

#[derive(Debug, Deserialize)]
pub struct RawExpectedFile {
    pub path: Option<String>,
    pub required_columns: Option<Vec<String>>,
}

pub fn parse_files_section(
    raw: Option<Vec<RawExpectedFile>>,
    path: &Path,
) -> Result<Vec<ExpectedFile>, ConfigError> {
    let entries = raw.ok_or(ConfigError::MissingField {
        path: path.to_path_buf(),
        field: "files",
    })?;
    if entries.is_empty() {
        return Err(invalid(
            path,
            "files",
            "Declare at least one [[files]] entry".into(),
        ));
    }

    let mut seen = HashSet::new();
    let mut files = Vec::with_capacity(entries.len());
    for entry in entries {
        let file_path = entry.path.ok_or(ConfigError::MissingField {
            path: path.to_path_buf(),
            field: "files.path",
        })?;
        validate_file_path(path, &file_path)?;
        if !seen.insert(file_path.clone()) {
            return Err(invalid(
                path,
                "files.path",
                format!("`{file_path}` is declared more than once"),
            ));
        }
        if let Some(columns) = &entry.required_columns {
            validate_required_columns(path, &file_path, columns)?;
        }
        files.push(ExpectedFile {
            path: file_path,
            required_columns: entry.required_columns,
        });
    }

    Ok(files)
}

fn validate_file_path(path: &Path, file_path: &str) -> Result<(), ConfigError> {
    if file_path.trim().is_empty() {
        return Err(invalid(path, "files.path", "Path must not be empty".into()));
    }
    if PathBuf::from(file_path).is_absolute() {
        return Err(invalid(
            path,
            "files.path",
            format!("`{file_path}` must be relative to the gate root"),
        ));
    }
    Ok(())
}

fn validate_required_columns(
    path: &Path,
    file_path: &str,
    columns: &[String],
) -> Result<(), ConfigError> {
    if columns.iter().any(|column| column.trim().is_empty()) {
        return Err(invalid(
            path,
            "files.required_columns",
            format!("`{file_path}` lists a blank column name"),
        ));
    }
    Ok(())
}

fn invalid(path: &Path, field: &'static str, message: String) -> ConfigError {
    ConfigError::InvalidField {
        path: path.to_path_buf(),
        field,
        message,
    }
}
