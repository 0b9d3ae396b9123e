//! Header extraction strategy: row 0 supplies field names, remaining rows
//! are matched against them by position.

use super::email::extract_email;
use super::patterns::{
    name_matches, EMAIL_KEYWORDS, FIRST_NAME_KEYWORDS, LAST_NAME_KEYWORDS,
};
use super::Candidate;
use crate::error::{AliasError, Result};
use crate::table::RawTable;

/// Extract candidates from a table whose first row carries field names.
///
/// Column resolution is fuzzy: the first field whose lower-cased, trimmed
/// name contains a keyword wins, in natural field order. Once an email-named
/// column is matched it is authoritative for every row: a row whose cell in
/// that column yields no email produces no record, without retrying other
/// columns. Only when no field name matches the email keywords at all does
/// extraction fall back to scanning every cell of each row in field order.
pub fn extract_with_headers(
    field_names: &[String],
    data_rows: &[Vec<String>],
) -> Result<Vec<Candidate>> {
    let rows: Vec<&Vec<String>> = data_rows
        .iter()
        .filter(|row| !RawTable::row_is_blank(row))
        .collect();

    if rows.is_empty() {
        return Err(AliasError::NoData);
    }

    let first_idx = find_column(field_names, &FIRST_NAME_KEYWORDS);
    let last_idx = find_column(field_names, &LAST_NAME_KEYWORDS);
    let email_idx = find_column(field_names, &EMAIL_KEYWORDS);

    let mut candidates = Vec::new();

    for row in rows {
        let email = match email_idx {
            Some(idx) => row.get(idx).and_then(|cell| extract_email(cell)),
            None => row.iter().find_map(|cell| extract_email(cell)),
        };

        let Some(email) = email else { continue };

        candidates.push(Candidate {
            first_name: cell_value(row, first_idx),
            last_name: cell_value(row, last_idx),
            email,
        });
    }

    if candidates.is_empty() {
        return Err(AliasError::NoEmailsFound);
    }

    Ok(candidates)
}

/// Index of the first field whose name matches any of the keywords.
fn find_column(field_names: &[String], keywords: &[&str]) -> Option<usize> {
    field_names
        .iter()
        .position(|name| name_matches(name, keywords))
}

/// Cell value at the resolved column, or empty when the column was not
/// matched or the row is too short (flexible field counts).
fn cell_value(row: &[String], idx: Option<usize>) -> String {
    idx.and_then(|i| row.get(i)).cloned().unwrap_or_default()
}
