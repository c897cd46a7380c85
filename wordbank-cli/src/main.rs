use anyhow::Result;
use clap::Parser;

use wordbank_cli::cli::commands::merge::handle_merge_command;
use wordbank_cli::cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Merge(args) => handle_merge_command(args),
    }
}
