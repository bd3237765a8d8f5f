use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::obfuscator::Obfuscator;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// A rewritten build artifact and the byte length written back.
#[derive(Debug)]
pub struct TransformedArtifact {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Files under `build_dir` whose name ends with `extension`, in walk order.
/// Everything else is left alone.
pub fn collect_artifacts(build_dir: &str, extension: &str) -> Result<Vec<PathBuf>, ArtifactError> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(build_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(extension) {
            paths.push(entry.into_path());
        } else {
            debug!("skipping {}", entry.path().display());
        }
    }
    Ok(paths)
}

/// Rewrites every matching artifact in place with its transformed text, one
/// sequential pass through the session.
pub fn transform_artifacts(
    obfuscator: &mut Obfuscator,
    build_dir: &str,
    extension: &str,
) -> Result<Vec<TransformedArtifact>, ArtifactError> {
    let mut transformed = Vec::new();
    for path in collect_artifacts(build_dir, extension)? {
        let source = fs::read_to_string(&path)?;
        let output = obfuscator.obfuscate_text(&source);
        fs::write(&path, &output)?;
        info!(
            "rewrote {} ({} -> {} bytes)",
            path.display(),
            source.len(),
            output.len()
        );
        transformed.push(TransformedArtifact {
            path,
            bytes: output.len(),
        });
    }
    Ok(transformed)
}
