//! Headerless extraction strategy: every row, including row 0, is treated
//! as positional data cells.

use super::email::{contains_email, extract_email};
use super::Candidate;
use crate::error::{AliasError, Result};
use crate::table::RawTable;

/// Name cells longer than this are assumed not to be names.
const MAX_NAME_LEN: usize = 50;

/// Extract candidates from a table with no header semantics.
///
/// Cells are scanned left to right; every cell that yields an email emits a
/// candidate, so a row containing several addresses (a "cc" column, say)
/// yields several records. Names are guessed by looking back at up to two
/// cells preceding the email cell.
pub fn extract_headerless(data_rows: &[Vec<String>]) -> Result<Vec<Candidate>> {
    let rows: Vec<&Vec<String>> = data_rows
        .iter()
        .filter(|row| !RawTable::row_is_blank(row))
        .collect();

    if rows.is_empty() {
        return Err(AliasError::NoData);
    }

    let mut candidates = Vec::new();

    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            let Some(email) = extract_email(cell) else {
                continue;
            };

            let (first_name, last_name) = lookback_names(row, idx);
            candidates.push(Candidate {
                first_name,
                last_name,
                email,
            });
        }
    }

    if candidates.is_empty() {
        return Err(AliasError::NoEmailsFound);
    }

    Ok(candidates)
}

/// Guess first/last name from the cells preceding the email cell.
///
/// Two usable preceding cells mean separate first/last name columns; one
/// means a combined "First Last" cell that gets split on whitespace. A
/// preceding cell that itself extracts as an email is treated as absent.
fn lookback_names(row: &[String], email_idx: usize) -> (String, String) {
    let Some(p1) = lookback_cell(row, email_idx, 1) else {
        return (String::new(), String::new());
    };

    if p1.is_empty() || p1.chars().count() >= MAX_NAME_LEN {
        return (String::new(), String::new());
    }

    if let Some(p2) = lookback_cell(row, email_idx, 2)
        && !p2.is_empty()
        && p2.chars().count() < MAX_NAME_LEN
    {
        return (p2, p1);
    }

    split_single_name(&p1)
}

/// Trimmed cell at `email_idx - offset`, or None when out of range or when
/// the cell itself contains an email.
fn lookback_cell(row: &[String], email_idx: usize, offset: usize) -> Option<String> {
    let idx = email_idx.checked_sub(offset)?;
    let cell = row.get(idx)?;
    if contains_email(cell) {
        return None;
    }
    Some(cell.trim().to_string())
}

/// Split a single name cell on whitespace: first token becomes the first
/// name, the rest joins into the last name.
fn split_single_name(cell: &str) -> (String, String) {
    let mut tokens = cell.split_whitespace();
    let Some(first) = tokens.next() else {
        return (String::new(), String::new());
    };

    let rest: Vec<&str> = tokens.collect();
    if rest.is_empty() {
        (cell.to_string(), String::new())
    } else {
        (first.to_string(), rest.join(" "))
    }
}
