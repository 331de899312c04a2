//! CLI interface using clap.
//!
//! Provides the command-line arguments and the interactive prompts.

use std::path::PathBuf;

use clap::Parser;

pub mod prompts;

/// Import ChatWise chat exports into the Nowledge Mem service.
#[derive(Parser, Debug)]
#[command(name = "chatwise-import")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// ChatWise export zip file or unpacked export directory.
    pub path: PathBuf,

    /// Batch mode: import every thread without prompting.
    #[arg(long, conflicts_with = "interactive")]
    pub batch: bool,

    /// Interactive mode: confirm each thread individually.
    #[arg(long)]
    pub interactive: bool,

    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Delivery mode for an import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Confirm each thread individually.
    Interactive,
    /// Import everything without prompting.
    Batch,
}

impl Cli {
    /// Mode selected by flags; `None` means neither flag was given and
    /// the user should be prompted.
    #[must_use]
    pub const fn mode_from_flags(&self) -> Option<ImportMode> {
        if self.batch {
            Some(ImportMode::Batch)
        } else if self.interactive {
            Some(ImportMode::Interactive)
        } else {
            None
        }
    }
}
