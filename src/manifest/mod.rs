//! Load and validate the manifest of expected output files.
use std::{env, fmt, path::PathBuf};

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::lib::errors::ConfigError;

pub mod defaults;
pub mod files;
pub mod telemetry;

pub use defaults::{default_expected_files, DEFAULT_EXPECTED_FILES};
pub use files::{parse_files_section, RawExpectedFile};

pub const MANIFEST_ENV_KEY: &str = "VALIDATE_OUTPUTS_MANIFEST";

/// One file the pipeline must have produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpectedFile {
    /// Path relative to the gate root.
    pub path: String,
    /// Columns that must appear in the header row, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_columns: Option<Vec<String>>,
}

/// Where the active manifest came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestSource::Builtin => f.write_str("builtin"),
            ManifestSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Ordered list of expected files. Checks run in this order.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub files: Vec<ExpectedFile>,
    pub source: ManifestSource,
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    files: Option<Vec<RawExpectedFile>>,
}

#[derive(Serialize)]
struct ManifestDocument<'a> {
    files: &'a [ExpectedFile],
}

impl Manifest {
    /// The fixed pipeline expectations.
    pub fn builtin() -> Self {
        Self {
            files: default_expected_files(),
            source: ManifestSource::Builtin,
        }
    }

    /// Resolve in the order: explicit path → `VALIDATE_OUTPUTS_MANIFEST` → built-in table.
    pub fn load(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = override_path {
            telemetry::log_source(Some(path.as_path()), false);
            return Self::load_from_path(path);
        }

        match env::var(MANIFEST_ENV_KEY) {
            Ok(value) if !value.trim().is_empty() => {
                let path = PathBuf::from(value);
                telemetry::log_source(Some(path.as_path()), true);
                Self::load_from_path(path)
            }
            _ => {
                telemetry::log_source(None, false);
                let manifest = Self::builtin();
                telemetry::log_loaded(&manifest);
                Ok(manifest)
            }
        }
    }

    /// Load a TOML manifest from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let source = config::File::from(path.clone()).format(config::FileFormat::Toml);
        let builder = config::Config::builder().add_source(source);
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "validate_outputs::manifest",
                path = %path.display(),
                reason = %error,
                "Failed to read manifest file"
            );
            error
        })?;

        let raw: RawManifest = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "validate_outputs::manifest",
                path = %path.display(),
                reason = %error,
                "Failed to parse manifest file"
            );
            error
        })?;

        let files = parse_files_section(raw.files, &path).map_err(|err| {
            error!(
                target: "validate_outputs::manifest",
                path = %path.display(),
                reason = %err,
                "Failed to validate manifest file"
            );
            err
        })?;

        let manifest = Self {
            files,
            source: ManifestSource::File(path),
        };
        telemetry::log_loaded(&manifest);
        Ok(manifest)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&ManifestDocument { files: &self.files })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&ManifestDocument { files: &self.files })
    }
}
