//! Interactive prompts using dialoguer

use dialoguer::Select;

use crate::application::Decision;
use crate::cli::ImportMode;
use crate::domain::Result;

/// Ask which delivery mode to run; `None` means the user chose to quit.
pub fn prompt_mode() -> Result<Option<ImportMode>> {
    let choice = Select::new()
        .with_prompt("Import mode")
        .items(&[
            "Interactive - confirm each thread",
            "Batch - import everything",
            "Quit",
        ])
        .default(0)
        .interact()?;

    Ok(match choice {
        0 => Some(ImportMode::Interactive),
        1 => Some(ImportMode::Batch),
        _ => None,
    })
}

/// Ask what to do with the thread currently on screen.
pub fn prompt_decision() -> Result<Decision> {
    let choice = Select::new()
        .with_prompt("Action")
        .items(&["Import", "Skip", "Quit"])
        .default(0)
        .interact()?;

    Ok(match choice {
        0 => Decision::Import,
        1 => Decision::Skip,
        _ => Decision::Quit,
    })
}
