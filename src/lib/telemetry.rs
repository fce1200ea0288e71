//! Telemetry initialization and gate run span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{error, info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

use crate::lib::errors::ValidationError;

/// Initialize `tracing` and format developer logs.
///
/// Logs go to stderr; stdout is reserved for the gate result.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one gate run.
pub struct RunSpan {
    span: Span,
    started_at: Instant,
    run_id: Uuid,
}

impl RunSpan {
    /// Start a run span.
    pub fn start(manifest_source: &str, expected_files: usize) -> Self {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            target: "validate_outputs::gate",
            "gate_run",
            %run_id,
            manifest_source,
            expected_files
        );
        Self {
            span,
            started_at: Instant::now(),
            run_id,
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Close the span after every check passed.
    pub fn finish_passed(self, files_checked: usize, tables_validated: usize) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "validate_outputs::gate",
            run_id = %self.run_id,
            status = "passed",
            files_checked,
            tables_validated,
            elapsed_ms,
            "Completed output validation"
        );
    }

    /// Close the span with the check that stopped the run.
    pub fn finish_failed(self, failure: &ValidationError) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        error!(
            target: "validate_outputs::gate",
            run_id = %self.run_id,
            status = "failed",
            code = failure.code(),
            path = failure.path(),
            reason = %failure,
            elapsed_ms,
            "Output validation failed"
        );
    }
}
