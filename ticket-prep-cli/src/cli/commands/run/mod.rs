//! `run` command

mod handler;

use std::path::PathBuf;

use clap::Args;

pub use handler::handle_run_command;

#[derive(Args, Debug)]
pub struct RunCommands {
    /// Directory to scan for spreadsheets (defaults to the working directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Use this spreadsheet instead of scanning
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Results file (overrides the configured one)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the results file even if the config disables it
    #[arg(long, conflicts_with = "no_persist")]
    pub persist: bool,

    /// Do not write a results file
    #[arg(long)]
    pub no_persist: bool,

    /// Print the full parameter bundle for each ticket
    #[arg(long)]
    pub show_params: bool,
}

impl RunCommands {
    /// Persistence forced by flags, if any
    pub fn persist_override(&self) -> Option<bool> {
        match (self.persist, self.no_persist) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
