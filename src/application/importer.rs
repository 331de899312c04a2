//! Import drivers and deduplication.
//!
//! Both drivers consume the same ordered thread list and duplicate-id
//! set, call the create endpoint once per non-duplicate record, and
//! produce terminal reports. They differ only in control flow and user
//! interaction.

use std::collections::HashSet;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::{BatchReport, InteractiveReport, RemoteThread, Result, Thread};
use crate::infrastructure::ThreadsClient;

use super::formatter;

/// User decision for the thread currently presented in interactive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Upload this thread.
    Import,
    /// Leave this thread out and move on.
    Skip,
    /// Stop the run; later threads stay unprocessed and uncounted.
    Quit,
}

/// Build the dedupe set from a remote listing.
///
/// The set is computed once per run and not refreshed; threads created
/// on the service by other writers afterwards are not detected as
/// duplicates. A listing entry without an id contributes the empty
/// string, which never collides with a generated `chatwise-…` id.
#[must_use]
pub fn collect_existing_ids(remote: &[RemoteThread]) -> HashSet<String> {
    remote.iter().map(|thread| thread.id.clone()).collect()
}

/// Run the interactive driver: confirm each thread individually.
///
/// Per-record state machine: present, decide, then advance or quit.
/// The decision comes from `decide` so the loop is testable without a
/// terminal; the CLI passes a dialoguer-backed prompt. Upload failures
/// are reported inline but not counted, matching the three counters
/// this mode surfaces.
///
/// # Errors
/// Returns error only if obtaining a decision fails.
pub async fn run_interactive<F>(
    client: &ThreadsClient,
    threads: &[Thread],
    existing_ids: &HashSet<String>,
    mut decide: F,
) -> Result<InteractiveReport>
where
    F: FnMut(&Thread) -> Result<Decision>,
{
    let mut report = InteractiveReport::default();
    let total = threads.len();

    for (index, thread) in threads.iter().enumerate() {
        let position = format!("({}/{total})", index + 1);

        if existing_ids.contains(&thread.thread_id) {
            report.duplicates += 1;
            println!("\n{} {}", position.bold(), thread.title.dimmed());
            println!("{}", "⊘ Already on the service, skipping".yellow());
            continue;
        }

        println!("\n{}", position.bold());
        println!("{}", formatter::format_thread_summary(thread));

        match decide(thread)? {
            Decision::Quit => {
                println!("{}", "Stopped before the end of the list".yellow());
                report.quit_early = true;
                break;
            }
            Decision::Skip => {
                report.skipped += 1;
                println!("{}", "Skipped".dimmed());
            }
            Decision::Import => match client.create_thread(thread).await {
                Ok(id) => {
                    report.imported += 1;
                    println!("{} Created thread {id}", "✓".green().bold());
                }
                Err(e) => {
                    println!("{} {e}", "✗".red().bold());
                }
            },
        }
    }

    Ok(report)
}

/// Run the batch driver: import every non-duplicate thread without
/// prompting, tracking success, duplicate, and failure counts.
pub async fn run_batch(
    client: &ThreadsClient,
    threads: &[Thread],
    existing_ids: &HashSet<String>,
) -> BatchReport {
    let mut report = BatchReport::default();
    let bar = batch_progress_bar(threads.len() as u64);

    for thread in threads {
        if existing_ids.contains(&thread.thread_id) {
            report.duplicates += 1;
            bar.inc(1);
            continue;
        }

        bar.set_message(format!(
            "Importing: {}",
            formatter::truncate(&thread.title, 30)
        ));

        match client.create_thread(thread).await {
            Ok(_) => report.succeeded += 1,
            Err(e) => report.failures.push((thread.title.clone(), e.to_string())),
        }

        bar.inc(1);
    }

    bar.finish_and_clear();
    report
}

/// Progress bar for batch imports.
fn batch_progress_bar(len: u64) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());

    let bar = ProgressBar::new(len);
    bar.set_style(style.progress_chars("█▓▒░"));
    bar
}
