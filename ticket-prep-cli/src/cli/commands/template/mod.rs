//! `template` command

mod handler;

use std::path::PathBuf;

use clap::Args;

pub use handler::handle_template_command;

use crate::tickets::template::TEMPLATE_FILE_NAME;

#[derive(Args, Debug)]
pub struct TemplateCommands {
    /// Where to write the workbook
    #[arg(short, long, default_value = TEMPLATE_FILE_NAME)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
