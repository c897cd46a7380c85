//! Merge-and-deduplicate engine
//!
//! Pure sheet-to-sheet logic; workbook I/O lives in [`super::excel`].

use std::collections::HashSet;

use anyhow::{Result, bail};

use super::sheet::Sheet;

/// Result of merging a staging sheet into the canonical sheet
#[derive(Debug)]
pub struct MergeOutcome {
    /// Canonical sheet with new staged rows appended, deduplicated on column 0
    pub merged: Sheet,
    /// Staging sheet minus the rows absorbed into the merged sheet
    pub pruned_staging: Sheet,
    /// Keys that entered the word list this run, in append order
    pub added_keys: Vec<String>,
    /// Staged rows dropped because their key was already present
    pub collisions: usize,
}

/// Merge `staging` into `canonical`.
///
/// Rows keep the order they were first seen in: canonical rows first, then
/// staged rows whose key is new. On a key conflict the earlier row wins, so a
/// canonical row always beats a staged row, and within the staging sheet an
/// earlier row beats later duplicates.
///
/// The pruned staging sheet keeps exactly the rows whose key collided with an
/// entry already in the word list; rows carrying a newly added key are
/// removed, duplicates of such a key included.
pub fn merge_sheets(canonical: &Sheet, staging: &Sheet) -> Result<MergeOutcome> {
    if canonical.header.is_empty() {
        bail!(
            "word list sheet '{}' has no columns; column 0 is the dedup key",
            canonical.name
        );
    }

    let mut merged = Sheet::new(canonical.name.clone(), canonical.header.clone());
    let mut seen: HashSet<String> = HashSet::new();
    let mut added_keys = Vec::new();
    let mut collisions = 0usize;

    for row in &canonical.rows {
        if seen.insert(Sheet::row_key(row)) {
            merged.rows.push(row.clone());
        }
    }

    for row in &staging.rows {
        let key = Sheet::row_key(row);
        if seen.insert(key.clone()) {
            added_keys.push(key);
            merged.rows.push(row.clone());
        } else {
            collisions += 1;
        }
    }

    let added: HashSet<&str> = added_keys.iter().map(String::as_str).collect();
    let mut pruned_staging = Sheet::new(staging.name.clone(), staging.header.clone());
    pruned_staging.rows = staging
        .rows
        .iter()
        .filter(|row| !added.contains(Sheet::row_key(row).as_str()))
        .cloned()
        .collect();

    Ok(MergeOutcome {
        merged,
        pruned_staging,
        added_keys,
        collisions,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::wordlist::sheet::Cell;

    fn sheet(name: &str, rows: &[(&str, f64)]) -> Sheet {
        let mut s = Sheet::new(name, vec!["word".to_string(), "count".to_string()]);
        for (key, n) in rows {
            s.rows
                .push(vec![Cell::String(key.to_string()), Cell::Number(*n)]);
        }
        s
    }

    #[test]
    fn test_canonical_row_wins_on_conflict() {
        let canonical = sheet("words", &[("a", 1.0), ("b", 2.0)]);
        let staging = sheet("staged", &[("b", 99.0), ("c", 3.0)]);

        let outcome = merge_sheets(&canonical, &staging).unwrap();

        assert_eq!(
            outcome.merged.rows,
            sheet("words", &[("a", 1.0), ("b", 2.0), ("c", 3.0)]).rows
        );
        assert_eq!(outcome.added_keys, vec!["c".to_string()]);
        assert_eq!(outcome.collisions, 1);
    }

    #[test]
    fn test_pruning_keeps_collided_rows() {
        let canonical = sheet("words", &[("a", 1.0), ("b", 2.0)]);
        let staging = sheet("staged", &[("b", 99.0), ("c", 3.0)]);

        let outcome = merge_sheets(&canonical, &staging).unwrap();

        // "c" was absorbed, so it leaves staging; "b" collided and stays.
        assert_eq!(outcome.pruned_staging.rows, sheet("staged", &[("b", 99.0)]).rows);
    }

    #[test]
    fn test_first_staged_duplicate_wins() {
        let canonical = sheet("words", &[("a", 1.0)]);
        let staging = sheet("staged", &[("x", 10.0), ("x", 20.0)]);

        let outcome = merge_sheets(&canonical, &staging).unwrap();

        assert_eq!(
            outcome.merged.rows,
            sheet("words", &[("a", 1.0), ("x", 10.0)]).rows
        );
        assert_eq!(outcome.collisions, 1);
        // Both "x" rows leave staging: the key was newly added.
        assert!(outcome.pruned_staging.rows.is_empty());
    }

    #[test]
    fn test_key_uniqueness_and_row_conservation() {
        let canonical = sheet("words", &[("a", 1.0), ("b", 2.0), ("c", 3.0)]);
        let staging = sheet("staged", &[("c", 9.0), ("d", 4.0), ("a", 9.0), ("e", 5.0)]);

        let outcome = merge_sheets(&canonical, &staging).unwrap();

        let keys: Vec<String> = outcome.merged.rows.iter().map(|r| Sheet::row_key(r)).collect();
        let unique: HashSet<&String> = keys.iter().collect();
        assert_eq!(keys.len(), unique.len());

        for row in &canonical.rows {
            assert!(outcome.merged.rows.contains(row));
        }
    }

    #[test]
    fn test_idempotent_on_rerun() {
        let canonical = sheet("words", &[("a", 1.0), ("b", 2.0)]);
        let staging = sheet("staged", &[("b", 99.0), ("c", 3.0)]);

        let first = merge_sheets(&canonical, &staging).unwrap();
        let second = merge_sheets(&first.merged, &first.pruned_staging).unwrap();

        assert_eq!(second.merged.rows, first.merged.rows);
        assert!(second.added_keys.is_empty());
    }

    #[test]
    fn test_empty_staging() {
        let canonical = sheet("words", &[("a", 1.0)]);
        let staging = sheet("staged", &[]);

        let outcome = merge_sheets(&canonical, &staging).unwrap();

        assert_eq!(outcome.merged.rows, canonical.rows);
        assert!(outcome.added_keys.is_empty());
        assert_eq!(outcome.collisions, 0);
    }

    #[test]
    fn test_blank_keys_dedupe_to_first() {
        let canonical = sheet("words", &[("a", 1.0)]);
        let mut staging = Sheet::new("staged", vec!["word".to_string(), "count".to_string()]);
        staging.rows.push(vec![Cell::Empty, Cell::Number(1.0)]);
        staging.rows.push(vec![Cell::String(String::new()), Cell::Number(2.0)]);

        let outcome = merge_sheets(&canonical, &staging).unwrap();

        assert_eq!(outcome.merged.rows.len(), 2);
        assert_eq!(outcome.collisions, 1);
    }

    #[test]
    fn test_zero_columns_rejected() {
        let canonical = Sheet::new("words", vec![]);
        let staging = sheet("staged", &[("a", 1.0)]);

        assert!(merge_sheets(&canonical, &staging).is_err());
    }
}
