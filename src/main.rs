//! qstories - terminal story viewer for the Qomrade platform

mod commands;

use anyhow::Result;
use clap::Parser;

use qstories::cli::{Cli, Commands};

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Play(args) => commands::play::handle_play(args),
        Commands::List(args) => commands::list::handle_list(args),
        Commands::Post(args) => commands::post::handle_post(args),
        Commands::Config(command) => commands::config::handle(command),
    }
}
