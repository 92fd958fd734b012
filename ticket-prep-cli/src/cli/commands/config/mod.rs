//! `config` command

mod handler;

use clap::Args;

pub use handler::handle_config_command;

#[derive(Args, Debug)]
pub struct ConfigCommands {
    /// Only print the default config file location
    #[arg(long)]
    pub path: bool,
}
