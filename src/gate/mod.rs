//! The output gate: existence checks, table checks, and the run that sequences them.
mod exit;
mod runner;
mod validator;

pub use exit::{GateExit, CONFIG_FAILED_EXIT, VALIDATION_FAILED_EXIT};
pub use runner::{run, GateReport, PASS_MESSAGE};
pub use validator::{assert_exists, validate_table};
