use super::commands::{ListCommand, LookupCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "optionkit")]
#[command(about = "Look up users through an explicit optional value")]
pub struct Cli {
    /// TOML file with [[users]] entries (defaults to the built-in users)
    #[arg(long, global = true)]
    pub users: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up users by id and print the response for each
    Lookup(LookupCommand),
    /// Print every known user as JSON
    List(ListCommand),
}
