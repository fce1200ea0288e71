//! GateProfile and root directory resolution.
use std::{env, path::PathBuf};

use anyhow::{Context, Result};

/// Resolved settings for one gate invocation.
#[derive(Debug, Clone)]
pub struct GateProfile {
    /// Absolute directory the manifest paths are resolved against.
    pub root: PathBuf,
    /// Explicit manifest path from `--manifest`, if any.
    pub manifest_path: Option<PathBuf>,
}

/// Resolve the gate root: CLI override → current directory. Always absolute.
pub fn resolve_root(override_path: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = env::current_dir().context("failed to obtain current directory")?;
    let root = match override_path {
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path),
        None => cwd,
    };
    Ok(root)
}
