use tracing::{debug, info};

use super::{Manifest, MANIFEST_ENV_KEY};

pub fn log_source(path: Option<&std::path::Path>, from_env: bool) {
    match path {
        Some(path) if from_env => info!(
            target: "validate_outputs::manifest",
            path = %path.display(),
            "Loading manifest using VALIDATE_OUTPUTS_MANIFEST environment variable"
        ),
        Some(path) => info!(
            target: "validate_outputs::manifest",
            path = %path.display(),
            "Loading manifest from --manifest"
        ),
        None => debug!(
            target: "validate_outputs::manifest",
            env = MANIFEST_ENV_KEY,
            "No manifest override; using built-in expected files"
        ),
    }
}

pub fn log_loaded(manifest: &Manifest) {
    let with_columns = manifest
        .files
        .iter()
        .filter(|file| file.required_columns.is_some())
        .count();
    info!(
        target: "validate_outputs::manifest",
        source = %manifest.source,
        expected_files = manifest.files.len(),
        with_required_columns = with_columns,
        "Manifest loaded successfully"
    );
}
