//! Shared library modules providing error types, file probes, CSV loading, and telemetry initialization.

pub mod errors;
pub mod fs;
pub mod table;
pub mod telemetry;
