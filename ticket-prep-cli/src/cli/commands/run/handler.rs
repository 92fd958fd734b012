//! Run command handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::*;

use super::RunCommands;
use crate::config::Config;
use crate::tickets::{HostHandoff, RunError, RunOptions, run_tickets};

/// Handle the run command
pub fn handle_run_command(args: RunCommands, config: &Config) -> Result<()> {
    let dir = resolve_dir(args.dir.clone())?;

    let persist = args
        .persist_override()
        .unwrap_or(config.run.persist_results);
    let results_path = persist.then(|| match &args.output {
        Some(path) => path.clone(),
        None => config.run.results_path(&dir),
    });

    println!("{}", "TICKET PARAMETER PREPARATION".bold());
    println!("{}", "=".repeat(50));

    let options = RunOptions {
        dir,
        file: args.file,
        results_path,
    };
    let mut action = HostHandoff::new(args.show_params || config.run.show_params);

    match run_tickets(&options, &config.profile, &mut action) {
        Ok(summary) => {
            println!();
            println!(
                "{} Prepared {} tickets from {} for host execution",
                "✓".bright_green(),
                summary.results.len().to_string().bold(),
                summary.source.display()
            );
            if summary.dropped_rows > 0 {
                println!(
                    "Skipped {} rows with a blank Title or Description",
                    summary.dropped_rows.to_string().yellow()
                );
            }
            if let Some(path) = &summary.results_path {
                println!("Results saved to: {}", path.display().to_string().cyan());
            }
            Ok(())
        }
        Err(e) if e.is_clean_exit() => {
            report_stop(&e);
            Ok(())
        }
        Err(e) => Err(e).context("Run failed"),
    }
}

fn resolve_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().context("Failed to determine working directory"),
    }
}

fn report_stop(error: &RunError) {
    println!("{} {}", "✗".bright_red(), error);
    if matches!(error, RunError::DiscoveryEmpty { .. }) {
        println!(
            "Create one with '{}', fill it in and save it here under another name",
            "ticket-prep-cli template".cyan()
        );
    }
}
