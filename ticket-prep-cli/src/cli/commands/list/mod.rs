//! `list` command

mod handler;

use std::path::PathBuf;

use clap::Args;

pub use handler::handle_list_command;

#[derive(Args, Debug)]
pub struct ListCommands {
    /// Directory to scan (defaults to the working directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}
