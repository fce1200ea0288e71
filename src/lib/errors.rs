use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating a manifest file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the manifest file.
    #[error("Failed to read manifest file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse manifest file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing.
    #[error("Manifest file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Manifest file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// A defect in one of the expected output files. Every variant is fatal for the run.
///
/// `path` is always the path as declared in the manifest, so messages name the
/// exact entry that failed rather than the resolved absolute location.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing expected file: {path}")]
    MissingFile { path: String },
    #[error("Empty file: {path}")]
    EmptyFile { path: String },
    #[error("No rows in {path}")]
    EmptyTable { path: String },
    #[error("Missing columns in {path}: {missing:?}")]
    MissingColumns { path: String, missing: Vec<String> },
    #[error("Failed to read metadata for {path}: {source}")]
    Metadata {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read table {path}: {source}")]
    TableRead {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("Malformed row in {path} at line {line}: expected at most {expected} fields, found {found}")]
    MalformedRow {
        path: String,
        line: u64,
        expected: usize,
        found: usize,
    },
}

impl ValidationError {
    /// Short machine-readable code used in structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingFile { .. } => "missing_file",
            ValidationError::EmptyFile { .. } => "empty_file",
            ValidationError::EmptyTable { .. } => "empty_table",
            ValidationError::MissingColumns { .. } => "missing_columns",
            ValidationError::Metadata { .. } => "metadata",
            ValidationError::TableRead { .. } => "table_read",
            ValidationError::MalformedRow { .. } => "malformed_row",
        }
    }

    /// Declared path of the file that failed.
    pub fn path(&self) -> &str {
        match self {
            ValidationError::MissingFile { path }
            | ValidationError::EmptyFile { path }
            | ValidationError::EmptyTable { path }
            | ValidationError::MissingColumns { path, .. }
            | ValidationError::Metadata { path, .. }
            | ValidationError::TableRead { path, .. }
            | ValidationError::MalformedRow { path, .. } => path,
        }
    }
}
