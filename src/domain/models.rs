//! Domain models for ChatWise export data.
//!
//! These models represent one exported conversation in the shape the
//! Nowledge Mem `/threads` endpoint accepts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prefix namespacing ChatWise ids in the target service.
pub const THREAD_ID_PREFIX: &str = "chatwise-";

/// Source tag stamped on every imported thread.
pub const SOURCE_TAG: &str = "chatwise";

/// A single message within a thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThreadMessage {
    /// Message text, non-empty after whitespace trimming.
    pub content: String,
    /// Speaker role, `"user"` when the export leaves it unspecified.
    pub role: String,
}

/// Original-export metadata carried along with a thread.
///
/// Optional fields pass through exactly as the export provides them;
/// absent values stay `null` rather than being defaulted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThreadMetadata {
    /// Id as it appears in the ChatWise export.
    pub original_id: String,
    /// Model name, if the export recorded one.
    pub model: Option<String>,
    /// Creation timestamp string from the export.
    pub created_at: Option<String>,
    /// Last-update timestamp string from the export.
    pub updated_at: Option<String>,
}

/// One conversation normalized for upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    /// Stable identifier: [`THREAD_ID_PREFIX`] + the ChatWise id.
    /// Deterministic from the source file; this is the sole dedupe key.
    pub thread_id: String,
    /// Conversation title, `"Untitled"` when the export has none.
    pub title: String,
    /// Messages in conversation order.
    pub messages: Vec<ThreadMessage>,
    /// Always [`SOURCE_TAG`].
    pub source: String,
    /// Wall-clock time the file was parsed.
    pub import_date: DateTime<Utc>,
    /// Passthrough export metadata.
    pub metadata: ThreadMetadata,
}

impl Thread {
    /// Get the first message text as a preview.
    #[must_use]
    pub fn preview(&self) -> &str {
        self.messages.first().map_or("", |m| m.content.as_str())
    }

    /// Get total message count.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

/// A thread already stored on the remote service.
///
/// Only the identifier matters for dedupe; a listing entry without an
/// `id` field deserializes to the empty string, which can never collide
/// with a generated `chatwise-…` id.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteThread {
    #[serde(default)]
    pub id: String,
}

/// Outcome counts of a batch import run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Threads created on the service.
    pub succeeded: usize,
    /// Threads skipped because their id already existed remotely.
    pub duplicates: usize,
    /// Per-thread failures as (title, reason) pairs, in input order.
    pub failures: Vec<(String, String)>,
}

impl BatchReport {
    /// Number of failed uploads.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Total records accounted for.
    #[must_use]
    pub fn total(&self) -> usize {
        self.succeeded + self.duplicates + self.failures.len()
    }
}

/// Outcome counts of an interactive import run.
///
/// Upload failures are reported inline but not tracked here, matching
/// the three counters the interactive flow surfaces.
#[derive(Debug, Clone, Default)]
pub struct InteractiveReport {
    /// Threads created on the service.
    pub imported: usize,
    /// Threads the user chose to skip.
    pub skipped: usize,
    /// Threads skipped automatically as remote duplicates.
    pub duplicates: usize,
    /// Whether the user quit before reaching the end of the list.
    pub quit_early: bool,
}
