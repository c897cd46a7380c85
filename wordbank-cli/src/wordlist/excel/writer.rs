//! Write a [`Sheet`] to an Excel file

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use super::super::sheet::{Cell, Sheet};

/// Write a sheet to an Excel file, overwriting it
///
/// Writes the header row followed by the data rows; no row-number column is
/// emitted.
pub fn write_sheet(sheet: &Sheet, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    if !sheet.name.is_empty() {
        worksheet.set_name(&sheet.name)?;
    }

    // Write header
    for (col, name) in sheet.header.iter().enumerate() {
        worksheet.write_string(0, col as u16, name)?;
    }

    // Write data rows
    for (row_idx, row) in sheet.rows.iter().enumerate() {
        let r = (row_idx + 1) as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            write_cell(worksheet, r, col_idx as u16, cell)?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

    Ok(())
}

fn write_cell(ws: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> Result<()> {
    match cell {
        Cell::Empty => { /* Leave cell empty */ }
        Cell::String(s) => {
            ws.write_string(row, col, s)?;
        }
        Cell::Number(f) => {
            ws.write_number(row, col, *f)?;
        }
        Cell::Bool(b) => {
            ws.write_boolean(row, col, *b)?;
        }
    }
    Ok(())
}
