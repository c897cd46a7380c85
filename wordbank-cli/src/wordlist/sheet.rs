//! In-memory sheet representation

/// A single cell value read from or written to a workbook
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Empty cell
    Empty,
    /// String value
    String(String),
    /// Numeric value (Excel stores integers as floats)
    Number(f64),
    /// Boolean value
    Bool(bool),
}

impl Cell {
    /// String form used for dedup identity
    ///
    /// Whole numbers render without a fractional part so that a cell typed as
    /// `12` and one read back as `12.0` produce the same key.
    pub fn key_string(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::String(s) => s.clone(),
            Cell::Number(f) => {
                if f.fract() == 0.0 {
                    (*f as i64).to_string()
                } else {
                    f.to_string()
                }
            }
            Cell::Bool(b) => b.to_string(),
        }
    }
}

/// One worksheet: a header plus row-ordered data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    /// Worksheet name
    pub name: String,
    /// Column names from the first row
    pub header: Vec<String>,
    /// Data rows in worksheet order
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, header: Vec<String>) -> Self {
        Self {
            name: name.into(),
            header,
            rows: Vec::new(),
        }
    }

    /// Dedup key of a row: the first cell's string form
    pub fn row_key(row: &[Cell]) -> String {
        row.first().map(Cell::key_string).unwrap_or_default()
    }
}
