//! CLI entrypoint module structure.
use anyhow::{Context, Result};

use crate::manifest::Manifest;

pub mod args;
pub mod profile;

pub use args::{CliCommand, GateArgs, ManifestArgs, ParsedCommand};
pub use profile::{resolve_root, GateProfile};

/// Execute CLI command mode and return the text to print on stdout.
pub fn execute_cli_command(command: CliCommand, profile: &GateProfile) -> Result<String> {
    match command {
        CliCommand::Manifest(args) => {
            let manifest = Manifest::load(profile.manifest_path.clone())?;
            render_manifest(&manifest, args.json)
        }
    }
}

fn render_manifest(manifest: &Manifest, json: bool) -> Result<String> {
    if json {
        return manifest
            .to_json()
            .context("failed to render manifest as JSON");
    }
    manifest
        .to_toml()
        .context("failed to render manifest as TOML")
}
