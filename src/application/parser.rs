//! Parsing of per-conversation ChatWise export files.
//!
//! Handles conversion from the raw export JSON to the upload shape.

use std::path::Path;

use chrono::Utc;
use serde::Deserialize;

use crate::domain::{Thread, ThreadMessage, ThreadMetadata, SOURCE_TAG, THREAD_ID_PREFIX};

/// Raw conversation as ChatWise exports it.
#[derive(Debug, Deserialize)]
struct RawChat {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    messages: Vec<RawMessage>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default, rename = "createdAt")]
    created_at: Option<String>,
    #[serde(default, rename = "updatedAt")]
    updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    #[serde(default)]
    content: String,
    #[serde(default)]
    role: Option<String>,
}

/// Parse one conversation file into an uploadable [`Thread`].
///
/// Fails softly: malformed JSON or a missing `id` field logs a warning
/// and yields `None`. A conversation whose messages are all empty after
/// trimming also yields `None`; there is nothing to import.
pub fn parse_chat_file(path: &Path) -> Option<Thread> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read {}: {e}", file_label(path));
            return None;
        }
    };

    let raw: RawChat = match serde_json::from_str(&content) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("Failed to parse {}: {e}", file_label(path));
            return None;
        }
    };

    let thread = build_thread(raw);
    if thread.is_none() {
        tracing::debug!("{} has no non-empty messages", file_label(path));
    }
    thread
}

/// Normalize a raw conversation, dropping messages that are empty after
/// whitespace trimming.
fn build_thread(raw: RawChat) -> Option<Thread> {
    let messages: Vec<ThreadMessage> = raw
        .messages
        .into_iter()
        .filter_map(|msg| {
            let content = msg.content.trim();
            if content.is_empty() {
                return None;
            }
            Some(ThreadMessage {
                content: content.to_string(),
                role: msg.role.unwrap_or_else(|| "user".to_string()),
            })
        })
        .collect();

    if messages.is_empty() {
        return None;
    }

    Some(Thread {
        thread_id: format!("{THREAD_ID_PREFIX}{}", raw.id),
        title: raw.title.unwrap_or_else(|| "Untitled".to_string()),
        messages,
        source: SOURCE_TAG.to_string(),
        import_date: Utc::now(),
        metadata: ThreadMetadata {
            original_id: raw.id,
            model: raw.model,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        },
    })
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
