//! Merge command handler

use anyhow::{Context, Result};
use colored::*;

use super::MergeArgs;
use crate::wordlist::{merge_sheets, read_sheet, write_sheet};

/// Handle the merge command: load both workbooks, merge, persist
pub fn handle_merge_command(args: MergeArgs) -> Result<()> {
    // Handle --no-color flag
    if args.no_color {
        colored::control::set_override(false);
    }

    log::info!("Loading word list from {}", args.list.display());
    let canonical = read_sheet(&args.list)
        .with_context(|| format!("Failed to load word list: {}", args.list.display()))?;

    log::info!("Loading staged words from {}", args.staging.display());
    let staging = read_sheet(&args.staging)
        .with_context(|| format!("Failed to load staged words: {}", args.staging.display()))?;

    let outcome = merge_sheets(&canonical, &staging)?;

    log::debug!(
        "{} staged rows, {} new, {} collisions",
        staging.rows.len(),
        outcome.added_keys.len(),
        outcome.collisions
    );

    if args.dry {
        println!(
            "{} would add {} word(s) to {}, {} collision(s) would stay staged",
            "dry run:".yellow().bold(),
            outcome.added_keys.len(),
            args.list.display(),
            outcome.collisions
        );
        return Ok(());
    }

    // The word list is written first; a failure after this point leaves the
    // staging workbook as it was on disk.
    write_sheet(&outcome.merged, &args.list)
        .with_context(|| format!("Failed to write word list: {}", args.list.display()))?;

    if !args.no_prune {
        write_sheet(&outcome.pruned_staging, &args.staging).with_context(|| {
            format!("Failed to write staging workbook: {}", args.staging.display())
        })?;
    }

    println!(
        "{} {} new word(s), {} collision(s), staging {}",
        "Merged".bright_green().bold(),
        outcome.added_keys.len(),
        outcome.collisions,
        if args.no_prune { "untouched" } else { "pruned" }
    );

    Ok(())
}
