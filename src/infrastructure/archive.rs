//! Zip archive handling for ChatWise exports.
//!
//! Exports arrive either as a directory or as a zip file, sometimes with
//! a single wrapping folder inside the archive.

use std::fs::File;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::ZipArchive;

use crate::domain::{AppError, Result};

/// An export archive extracted into a temporary directory.
///
/// The temporary directory lives as long as this value; dropping it
/// removes the extracted files.
#[derive(Debug)]
pub struct ExtractedArchive {
    _dir: TempDir,
    root: PathBuf,
}

impl ExtractedArchive {
    /// Directory holding the export files.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Extract a ChatWise export zip into a fresh temporary directory.
///
/// If extraction yields exactly one top-level subdirectory (an archive
/// with a wrapping folder), that subdirectory becomes the export root.
///
/// # Errors
/// Returns error if the archive cannot be opened, read, or extracted.
pub fn extract_archive(zip_path: &Path) -> Result<ExtractedArchive> {
    let file = File::open(zip_path)
        .map_err(|e| AppError::io(format!("Failed to open {}", zip_path.display()), e))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| AppError::archive(format!("Failed to read {}", zip_path.display()), e))?;

    let dir =
        tempfile::tempdir().map_err(|e| AppError::io("Failed to create temp directory", e))?;
    archive
        .extract(dir.path())
        .map_err(|e| AppError::archive("Failed to extract archive", e))?;

    let root = resolve_root(dir.path())?;
    Ok(ExtractedArchive { _dir: dir, root })
}

/// Resolve the export root inside an extraction directory.
fn resolve_root(extraction_root: &Path) -> Result<PathBuf> {
    let entries = std::fs::read_dir(extraction_root)
        .map_err(|e| AppError::io("Failed to scan extracted archive", e))?;

    let mut subdirs: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();

    if subdirs.len() == 1 {
        Ok(subdirs.remove(0))
    } else {
        Ok(extraction_root.to_path_buf())
    }
}
