//! Table mode detection: does row 0 carry field names or data?

use super::patterns::EMAIL_ANCHORED_PATTERN;
use std::fmt;

/// Which extraction strategy applies to a parsed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableMode {
    /// Row 0 supplies field names; remaining rows are data.
    Header,
    /// Every row, including row 0, is positional data cells.
    Headerless,
}

impl fmt::Display for TableMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableMode::Header => write!(f, "header"),
            TableMode::Headerless => write!(f, "headerless"),
        }
    }
}

/// Decide whether the first row of a table is a header row or a data row.
///
/// The first row is treated as a header unless one of its cells itself parses
/// as a full email address. Spreadsheets without headers place real records in
/// row 0, and naively treating row 0 as field names would discard a valid
/// record and corrupt every field name.
///
/// Pure decision function, no side effects.
pub fn detect_mode(first_row: &[String]) -> TableMode {
    if first_row.is_empty() {
        return TableMode::Headerless;
    }

    let has_email_cell = first_row
        .iter()
        .any(|cell| EMAIL_ANCHORED_PATTERN.is_match(cell.trim()));

    if has_email_cell {
        TableMode::Headerless
    } else {
        TableMode::Header
    }
}
