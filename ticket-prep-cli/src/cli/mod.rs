//! Command-line interface

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::list::ListCommands;
use commands::run::RunCommands;
use commands::template::TemplateCommands;

#[derive(Parser, Debug)]
#[command(name = "ticket-prep-cli")]
#[command(about = "Prepare create-ticket parameter bundles from an Excel sheet", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to <config dir>/ticket-prep/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read the spreadsheet and prepare one bundle per row
    Run(RunCommands),
    /// List the spreadsheets a run would consider
    List(ListCommands),
    /// Write a blank input workbook
    Template(TemplateCommands),
    /// Show the effective configuration
    Config(ConfigCommands),
}
