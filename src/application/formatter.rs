//! Console rendering for threads and run reports.

use colored::Colorize;
use comfy_table::{
    presets::{NOTHING, UTF8_FULL},
    Table,
};

use crate::domain::{BatchReport, InteractiveReport, Thread};

/// Maximum number of failures listed in a batch report.
const MAX_LISTED_FAILURES: usize = 5;

/// Characters of first-message preview shown in a thread summary.
const PREVIEW_CHARS: usize = 100;

/// Format the parsed thread listing as a table.
pub fn format_threads_table(threads: &[Thread]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Title", "Msgs", "Created"]);

    for (index, thread) in threads.iter().enumerate() {
        let created = thread
            .metadata
            .created_at
            .as_deref()
            .map_or_else(|| "-".to_string(), |c| clip(c, 10));

        table.add_row(vec![
            (index + 1).to_string(),
            truncate(&thread.title, 40),
            thread.message_count().to_string(),
            created,
        ]);
    }

    table.to_string()
}

/// Format the per-thread summary shown before an interactive decision.
pub fn format_thread_summary(thread: &Thread) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);

    let model = thread.metadata.model.as_deref().unwrap_or("N/A");
    let created = thread
        .metadata
        .created_at
        .as_deref()
        .map_or_else(|| "N/A".to_string(), |c| clip(c, 19));

    let preview = thread.preview();
    let preview = if preview.chars().count() > PREVIEW_CHARS {
        format!("{}...", clip(preview, PREVIEW_CHARS))
    } else {
        preview.to_string()
    };

    table.add_row(vec!["Title", &thread.title]);
    table.add_row(vec!["Messages", &thread.message_count().to_string()]);
    table.add_row(vec!["Model", model]);
    table.add_row(vec!["Created", &created]);
    table.add_row(vec!["First message", &preview]);

    table.to_string()
}

/// Format the terminal report of an interactive run.
pub fn format_interactive_report(report: &InteractiveReport) -> String {
    format!(
        "{} imported {}, skipped {}, duplicates {}",
        "Done:".bold(),
        report.imported.to_string().green(),
        report.skipped.to_string().cyan(),
        report.duplicates.to_string().yellow()
    )
}

/// Format the terminal report of a batch run.
///
/// The success count is always shown; duplicates and failures only when
/// nonzero, with at most [`MAX_LISTED_FAILURES`] failures spelled out.
pub fn format_batch_report(report: &BatchReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        "✓ Imported:".green().bold(),
        report.succeeded
    ));

    if report.duplicates > 0 {
        out.push_str(&format!(
            "{} {}\n",
            "⊘ Duplicates skipped:".yellow().bold(),
            report.duplicates
        ));
    }

    if !report.failures.is_empty() {
        out.push_str(&format!(
            "{} {}\n",
            "✗ Failed:".red().bold(),
            report.failure_count()
        ));

        for (title, reason) in report.failures.iter().take(MAX_LISTED_FAILURES) {
            out.push_str(&format!(
                "  {}\n",
                format!("- {}: {reason}", truncate(title, 40)).dimmed()
            ));
        }

        if report.failure_count() > MAX_LISTED_FAILURES {
            out.push_str(&format!(
                "  {}\n",
                format!(
                    "... and {} more",
                    report.failure_count() - MAX_LISTED_FAILURES
                )
                .dimmed()
            ));
        }
    }

    out
}

/// Truncate a string to its first line and at most `max_len` characters,
/// with an ellipsis when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    let s = s.lines().next().unwrap_or(s);
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

/// First `max` characters of a string, no ellipsis.
fn clip(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ThreadMessage, ThreadMetadata};
    use chrono::Utc;

    fn sample_thread(preview: &str) -> Thread {
        Thread {
            thread_id: "chatwise-abc".to_string(),
            title: "Sample".to_string(),
            messages: vec![ThreadMessage {
                content: preview.to_string(),
                role: "user".to_string(),
            }],
            source: "chatwise".to_string(),
            import_date: Utc::now(),
            metadata: ThreadMetadata {
                original_id: "abc".to_string(),
                model: Some("gpt-4o".to_string()),
                created_at: Some("2025-06-01T10:00:00.123Z".to_string()),
                updated_at: None,
            },
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world!", 8), "hello...");
        assert_eq!(truncate("first\nsecond", 20), "first");
    }

    #[test]
    fn test_truncate_multibyte() {
        let s = "汉".repeat(50);
        let truncated = truncate(&s, 10);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 10);
    }

    #[test]
    fn test_summary_clips_created_at() {
        let summary = format_thread_summary(&sample_thread("hi"));
        assert!(summary.contains("2025-06-01T10:00:00"));
        assert!(!summary.contains(".123Z"));
    }

    #[test]
    fn test_summary_preview_capped_at_100_chars() {
        let long = "x".repeat(250);
        let summary = format_thread_summary(&sample_thread(&long));
        assert!(summary.contains(&format!("{}...", "x".repeat(100))));
        assert!(!summary.contains(&"x".repeat(101)));
    }

    #[test]
    fn test_batch_report_lists_at_most_five_failures() {
        let report = BatchReport {
            succeeded: 1,
            duplicates: 0,
            failures: (0..7)
                .map(|i| (format!("thread {i}"), "API error 500: boom".to_string()))
                .collect(),
        };

        let rendered = format_batch_report(&report);
        assert!(rendered.contains("thread 4"));
        assert!(!rendered.contains("thread 5"));
        assert!(rendered.contains("and 2 more"));
    }

    #[test]
    fn test_batch_report_hides_zero_sections() {
        let report = BatchReport {
            succeeded: 3,
            duplicates: 0,
            failures: Vec::new(),
        };

        let rendered = format_batch_report(&report);
        assert!(rendered.contains("Imported"));
        assert!(!rendered.contains("Duplicates"));
        assert!(!rendered.contains("Failed"));
    }
}
