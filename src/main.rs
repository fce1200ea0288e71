//! Entry point for the output validation gate.
use std::process::ExitCode;

use clap::Parser;
use validate_outputs::{
    cli::{execute_cli_command, CliCommand, GateArgs, GateProfile, ParsedCommand},
    gate::{self, GateExit, PASS_MESSAGE},
    lib::telemetry,
    manifest::Manifest,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), GateExit> {
    telemetry::init_tracing().map_err(GateExit::from_error)?;
    let args = GateArgs::parse();
    let command = args.into_command().map_err(GateExit::from_error)?;

    match command {
        ParsedCommand::RunGate(profile) => run_gate(&profile),
        ParsedCommand::Cli { command, profile } => handle_cli_command(command, &profile),
    }
}

fn run_gate(profile: &GateProfile) -> Result<(), GateExit> {
    let manifest =
        Manifest::load(profile.manifest_path.clone()).map_err(GateExit::from_config)?;
    gate::run(&manifest, &profile.root).map_err(GateExit::from_validation)?;
    println!("{PASS_MESSAGE}");
    Ok(())
}

fn handle_cli_command(command: CliCommand, profile: &GateProfile) -> Result<(), GateExit> {
    let output = execute_cli_command(command, profile).map_err(GateExit::from_error)?;
    println!("{output}");
    Ok(())
}
