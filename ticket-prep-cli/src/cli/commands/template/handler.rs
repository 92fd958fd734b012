//! Template command handler

use anyhow::Result;
use colored::*;

use super::TemplateCommands;
use crate::tickets::write_template_excel;

/// Write a blank ticket workbook
pub fn handle_template_command(args: TemplateCommands) -> Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "File already exists: {} (use --force to overwrite)",
            args.output.display()
        );
    }

    write_template_excel(&args.output)?;
    println!(
        "Template written to: {}",
        args.output.display().to_string().bright_green()
    );
    Ok(())
}
