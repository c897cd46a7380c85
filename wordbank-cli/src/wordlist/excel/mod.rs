//! Excel I/O for word list sheets

mod reader;
mod writer;

pub use reader::read_sheet;
pub use writer::write_sheet;
