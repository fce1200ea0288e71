//! Filesystem probes for expected output files.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Result of looking up an expected file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileProbe {
    /// Nothing exists at the path.
    Missing,
    /// A file exists with the given size in bytes.
    Present { size_bytes: u64 },
}

/// Resolve a manifest path against the gate root.
///
/// Absolute paths are returned unchanged; relative ones are joined onto `root`.
pub fn resolve_under(root: &Path, declared: &Path) -> PathBuf {
    if declared.is_absolute() {
        return declared.to_path_buf();
    }
    root.join(declared)
}

/// Read the size of `path` without opening it.
///
/// A `NotFound` lookup is reported as [`FileProbe::Missing`]; every other I/O
/// failure is returned to the caller.
pub fn probe_file(path: &Path) -> Result<FileProbe, io::Error> {
    match fs::metadata(path) {
        Ok(meta) => Ok(FileProbe::Present {
            size_bytes: meta.len(),
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(FileProbe::Missing),
        Err(err) => Err(err),
    }
}
