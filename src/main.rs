//! ChatWise Import - migrate ChatWise chat exports into Nowledge Mem.
//!
//! Reads a ChatWise export (zip archive or directory), validates the
//! layout, parses each conversation file, deduplicates against threads
//! already stored on the service, and uploads the rest either
//! interactively or in batch.

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use chatwise_import::application::{
    collect_existing_ids, find_chat_files, format_batch_report, format_interactive_report,
    format_threads_table, is_chatwise_export, parse_chat_file, run_batch, run_interactive,
};
use chatwise_import::cli::{prompts, Cli, ImportMode};
use chatwise_import::domain::{AppError, Result, Thread};
use chatwise_import::infrastructure::{
    extract_archive, load_config, ExtractedArchive, ThreadsClient,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<()> {
    println!("{}", "ChatWise → Nowledge Mem import".cyan().bold());
    println!();

    let input = resolve_input(&cli.path)?;
    let work_dir = input.dir();

    if !is_chatwise_export(work_dir)? {
        return Err(AppError::invalid_input(
            "Not a valid ChatWise export (no marker file or chat-*.json files)",
        ));
    }
    println!("{} Detected ChatWise export format", "✓".green());

    let chat_files = find_chat_files(work_dir)?;
    println!("Found {} chat file(s)", chat_files.len());

    let threads: Vec<Thread> = chat_files
        .iter()
        .filter_map(|path| parse_chat_file(path))
        .collect();

    if threads.is_empty() {
        println!("{}", "No importable threads found".yellow());
        return Ok(());
    }

    println!(
        "{} Parsed {} importable thread(s)",
        "✓".green(),
        threads.len()
    );
    println!();
    println!("{}", format_threads_table(&threads));
    println!();

    let config = load_config()?;
    let client = ThreadsClient::new(config.api)?;

    println!("Fetching existing threads from {}...", client.base_url());
    let remote = client.list_threads().await;
    let existing_ids = collect_existing_ids(&remote);
    println!("{} Found {} existing thread(s)", "✓".green(), remote.len());
    println!();

    let mode = match cli.mode_from_flags() {
        Some(mode) => mode,
        None => match prompts::prompt_mode()? {
            Some(mode) => mode,
            None => {
                println!("{}", "Cancelled".yellow());
                return Ok(());
            }
        },
    };

    match mode {
        ImportMode::Interactive => {
            println!("{}", "📋 Interactive mode: confirm each thread".bold());
            let report =
                run_interactive(&client, &threads, &existing_ids, |_| prompts::prompt_decision())
                    .await?;
            println!();
            println!("{}", format_interactive_report(&report));
        }
        ImportMode::Batch => {
            println!("{}", "🚀 Batch mode: importing all threads".bold());
            let report = run_batch(&client, &threads, &existing_ids).await;
            println!();
            print!("{}", format_batch_report(&report));
        }
    }

    Ok(())
}

/// Resolved input location: a directory as given, or a zip extraction
/// whose temp directory must outlive the run.
enum ImportInput {
    Directory(PathBuf),
    Archive(ExtractedArchive),
}

impl ImportInput {
    fn dir(&self) -> &Path {
        match self {
            Self::Directory(path) => path,
            Self::Archive(extracted) => extracted.root(),
        }
    }
}

/// Accept a zip archive or a directory; anything else is fatal.
fn resolve_input(path: &Path) -> Result<ImportInput> {
    if !path.exists() {
        return Err(AppError::invalid_input(format!(
            "Path does not exist: {}",
            path.display()
        )));
    }

    let is_zip = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));

    if is_zip {
        println!("Extracting {}...", path.display());
        Ok(ImportInput::Archive(extract_archive(path)?))
    } else if path.is_dir() {
        Ok(ImportInput::Directory(path.to_path_buf()))
    } else {
        Err(AppError::invalid_input(
            "Provide a ChatWise export zip file or directory",
        ))
    }
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
