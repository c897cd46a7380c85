//! Command-line interface definitions

pub mod commands;

use clap::{Parser, Subcommand};

use commands::merge::MergeArgs;

#[derive(Parser)]
#[command(name = "wordbank", version, about = "Maintain an Excel-backed word list")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge staged words into the canonical word list
    Merge(MergeArgs),
}
