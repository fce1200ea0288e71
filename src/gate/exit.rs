use std::process::ExitCode;

use anyhow::Error;

use crate::lib::errors::{ConfigError, ValidationError};

/// Exit code for a failed output check.
pub const VALIDATION_FAILED_EXIT: u8 = 1;
/// Exit code for manifest, configuration, or startup failures.
pub const CONFIG_FAILED_EXIT: u8 = 2;

/// Bundles a failure message with the exit code it maps to.
#[derive(Debug)]
pub struct GateExit {
    message: String,
    exit_code: u8,
}

impl GateExit {
    pub fn from_validation(err: ValidationError) -> Self {
        Self {
            message: err.to_string(),
            exit_code: VALIDATION_FAILED_EXIT,
        }
    }

    pub fn from_config(err: ConfigError) -> Self {
        Self {
            message: err.to_string(),
            exit_code: CONFIG_FAILED_EXIT,
        }
    }

    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: CONFIG_FAILED_EXIT,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    /// Print the message to stderr and return the process exit code.
    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        ExitCode::from(self.exit_code)
    }
}
