//! ChatWise export layout detection.
//!
//! Pure read-only inspection: at most one file body is opened.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, Result};

/// Marker file ChatWise writes at the export root.
/// The misspelling is ChatWise's own.
pub const SENTINEL_FILE: &str = "chatwise-export-verison.txt";

const CHAT_FILE_PREFIX: &str = "chat-";
const CHAT_FILE_SUFFIX: &str = ".json";
const REQUIRED_FIELDS: [&str; 3] = ["id", "title", "messages"];

/// Check whether a directory is a recognized ChatWise export.
///
/// Recognition policy, first match wins:
/// 1. the sentinel file exists at the directory root;
/// 2. at least one `chat-*.json` file exists and the first (sorted) one
///    is a JSON object carrying `id`, `title`, and `messages`.
///
/// # Errors
/// Returns error only if the directory itself cannot be scanned.
pub fn is_chatwise_export(dir: &Path) -> Result<bool> {
    if dir.join(SENTINEL_FILE).exists() {
        return Ok(true);
    }

    let chat_files = find_chat_files(dir)?;
    let Some(first) = chat_files.first() else {
        return Ok(false);
    };

    let Ok(content) = std::fs::read_to_string(first) else {
        return Ok(false);
    };

    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(value) => Ok(REQUIRED_FIELDS.iter().all(|field| value.get(field).is_some())),
        Err(_) => Ok(false),
    }
}

/// List the per-conversation files of an export, sorted by name.
///
/// # Errors
/// Returns error if the directory cannot be read.
pub fn find_chat_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| AppError::io(format!("Failed to read directory {}", dir.display()), e))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_chat_file_name(path))
        .collect();

    files.sort();
    Ok(files)
}

fn is_chat_file_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(CHAT_FILE_PREFIX) && name.ends_with(CHAT_FILE_SUFFIX))
}
