use anyhow::Result;
use clap::Parser;
use log::info;

mod cli;

use cli::commands::{list_command, lookup_command};
use cli::{Cli, Commands};
use optionkit::config::Config;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    info!("Starting optionkit");

    let directory = Config::load_or_default(cli.users.as_deref())?.into_directory();

    let mut out = std::io::stdout().lock();
    match &cli.command {
        Commands::Lookup(command) => lookup_command(&directory, command, &mut out),
        Commands::List(_) => list_command(&directory, &mut out),
    }
}
