use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod tickets;

use cli::commands::{config as config_cmd, list, run, template};
use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Run(args) => run::handle_run_command(args, &config),
        Commands::List(args) => list::handle_list_command(args),
        Commands::Template(args) => template::handle_template_command(args),
        Commands::Config(args) => config_cmd::handle_config_command(args, &config),
    }
}
