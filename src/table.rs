//! Header-agnostic CSV parsing into a raw table.
//!
//! The source is parsed exactly once, with every row (including row 0) kept
//! as positional cells. Mode detection then runs on row 0 of the raw form,
//! so switching between header and headerless extraction never re-invokes
//! the parser.

use crate::error::Result;
use std::io::Cursor;

/// A parsed CSV table: ordered rows of ordered cell values.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// The rows of the table (each row is a vector of cell values).
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create a new empty table.
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Returns true if the table has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if every cell of the row is empty or whitespace.
    pub fn row_is_blank(row: &[String]) -> bool {
        row.iter().all(|cell| cell.trim().is_empty())
    }
}

/// Parse UTF-8 CSV text into a [`RawTable`].
///
/// Rows are kept in positional form with no header semantics. Field counts
/// may vary between rows (flexible parsing); fully blank lines are skipped
/// by the underlying reader. Malformed input surfaces as a parse error.
pub fn parse_raw(data: &[u8]) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(data));

    let mut table = RawTable::new();
    let mut record = csv::StringRecord::new();

    while reader.read_record(&mut record)? {
        let row: Vec<String> = record
            .iter()
            .map(std::string::ToString::to_string)
            .collect();
        table.rows.push(row);
    }

    Ok(table)
}
