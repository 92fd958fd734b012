//! Config command handler

use anyhow::Result;

use super::ConfigCommands;
use crate::config::{Config, default_config_path};

/// Print the effective configuration, or where it is looked up
pub fn handle_config_command(args: ConfigCommands, config: &Config) -> Result<()> {
    if args.path {
        match default_config_path() {
            Some(path) => println!("{}", path.display()),
            None => anyhow::bail!("No configuration directory on this platform"),
        }
        return Ok(());
    }

    print!("{}", config.to_toml()?);
    Ok(())
}
