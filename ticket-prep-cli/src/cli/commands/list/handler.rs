//! List command handler

use anyhow::{Context, Result};
use colored::*;

use super::ListCommands;
use crate::tickets::{locate_spreadsheets, select_spreadsheet};

/// Print candidate spreadsheets in selection order
pub fn handle_list_command(args: ListCommands) -> Result<()> {
    let dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine working directory")?,
    };

    let files = locate_spreadsheets(&dir)?;
    if files.is_empty() {
        println!("No Excel files found in {}", dir.display());
        return Ok(());
    }

    let selected = select_spreadsheet(&files);
    println!("Found Excel files:");
    for (i, file) in files.iter().enumerate() {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if Some(file) == selected {
            println!("   {}. {} {}", i + 1, name.bright_green(), "(used by run)".dimmed());
        } else {
            println!("   {}. {}", i + 1, name);
        }
    }

    Ok(())
}
