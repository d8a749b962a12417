//! Patch directory discovery and loading.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use s1patch_core::{DecodedPatch, PatchDecoder};

/// Environment variable overriding the default patch directory.
pub const PATCH_DIR_ENV: &str = "S1_PATCH_DIR";

pub fn default_patch_dir() -> PathBuf {
    if let Ok(override_path) = std::env::var(PATCH_DIR_ENV) {
        return PathBuf::from(override_path);
    }

    let audio_dir = dirs::audio_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    audio_dir.join("s1_patch_analysis")
}

/// Regular, non-hidden files in `dir`, sorted by name.
pub fn list_patch_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read patch directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if !hidden && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Name a patch is reported under: its file name.
pub fn patch_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn load_patch(decoder: &PatchDecoder<'_>, path: &Path) -> Result<DecodedPatch> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} as UTF-8 text", path.display()))?;
    let patch = decoder.decode(&patch_name(path), &text)?;
    Ok(patch)
}

/// A file that was skipped, with the reason.
#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

#[derive(Debug, Default)]
pub struct PatchLibrary {
    pub patches: Vec<DecodedPatch>,
    pub failures: Vec<LoadFailure>,
}

impl PatchLibrary {
    /// Decode every patch file in `dir`. A file that fails is recorded and
    /// skipped; only an unreadable directory is an error.
    pub fn load(decoder: &PatchDecoder<'_>, dir: &Path) -> Result<Self> {
        let mut library = PatchLibrary::default();

        for path in list_patch_files(dir)? {
            match load_patch(decoder, &path) {
                Ok(patch) => library.patches.push(patch),
                Err(error) => {
                    tracing::info!(path = %path.display(), "skipping patch: {:#}", error);
                    library.failures.push(LoadFailure { path, error });
                }
            }
        }

        tracing::info!(
            dir = %dir.display(),
            decoded = library.patches.len(),
            failed = library.failures.len(),
            "loaded patch directory"
        );
        Ok(library)
    }
}
