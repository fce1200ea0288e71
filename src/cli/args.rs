//! CLI argument definitions and `GateProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::{resolve_root, GateProfile};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    RunGate(GateProfile),
    Cli {
        command: CliCommand,
        profile: GateProfile,
    },
}

/// Top-level optional CLI commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Print the effective manifest of expected files.
    #[command(
        about = "Print the effective manifest of expected files",
        after_help = "Hint: save the output as a TOML file and pass it with `--manifest` to customize the gate."
    )]
    Manifest(ManifestArgs),
}

/// Arguments for `manifest`.
#[derive(Debug, Clone, Args)]
pub struct ManifestArgs {
    /// Print JSON instead of TOML.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "validate-outputs",
    author,
    version,
    about = "Check that pipeline output CSV files exist, are non-empty, and carry their required columns",
    long_about = None
)]
pub struct GateArgs {
    /// Directory the expected paths are resolved against (defaults to the current directory).
    #[arg(long = "root", value_name = "DIR")]
    pub root_override: Option<PathBuf>,
    /// TOML manifest replacing the built-in expected files (overrides VALIDATE_OUTPUTS_MANIFEST).
    #[arg(long = "manifest", value_name = "FILE")]
    pub manifest_override: Option<PathBuf>,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl GateArgs {
    /// Build a `GateProfile` from CLI args.
    pub fn build(&self) -> Result<GateProfile> {
        let root = resolve_root(self.root_override.clone())?;
        Ok(GateProfile {
            root,
            manifest_path: self.manifest_override.clone(),
        })
    }

    /// Parse CLI args into either gate mode or utility command mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        let profile = self.build()?;
        match self.command {
            Some(command) => Ok(ParsedCommand::Cli { command, profile }),
            None => Ok(ParsedCommand::RunGate(profile)),
        }
    }
}
