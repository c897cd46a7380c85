//! Merge command: fold staged rows into the canonical word list

mod handler;

pub use handler::handle_merge_command;

use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Path to the canonical word list workbook
    #[arg(long, default_value = "Database/bangla_words.xlsx")]
    pub list: PathBuf,

    /// Path to the staging workbook holding candidate rows
    #[arg(long, default_value = "Database/addWords.xlsx")]
    pub staging: PathBuf,

    /// Leave the staging workbook untouched instead of pruning absorbed rows
    #[arg(long)]
    pub no_prune: bool,

    /// Report what the merge would do without writing either workbook
    #[arg(long)]
    pub dry: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
