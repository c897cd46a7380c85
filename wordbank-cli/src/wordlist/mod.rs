//! Canonical word list maintenance
//!
//! The word list lives in an Excel workbook. Candidate entries are staged in
//! a second workbook and folded in by the merge engine, deduplicated on the
//! first column.

pub mod excel;
pub mod merge;
pub mod sheet;

pub use excel::{read_sheet, write_sheet};
pub use merge::{MergeOutcome, merge_sheets};
pub use sheet::{Cell, Sheet};
