//! CSV export of extracted records.

use crate::error::Result;
use crate::record::Record;
use std::io::Write;
use std::path::Path;

/// Default file name offered for the exported CSV.
pub const EXPORT_FILE_NAME: &str = "email_aliases.csv";

/// Fixed column headers for the exported CSV.
pub const EXPORT_HEADERS: [&str; 4] =
    ["first name", "last name", "original email", "alias email"];

/// Write records as CSV to the given writer, one row per record under the
/// fixed headers.
pub fn write_records<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(EXPORT_HEADERS)?;
    for record in records {
        csv_writer.write_record([
            record.first_name.as_str(),
            record.last_name.as_str(),
            record.original_email.as_str(),
            record.alias_email.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write records as CSV to a file at the given path.
pub fn write_records_to_path<P: AsRef<Path>>(path: P, records: &[Record]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_records(file, records)
}

/// Render records as an in-memory CSV string.
pub fn records_to_csv_string(records: &[Record]) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, records)?;
    String::from_utf8(buffer)
        .map_err(|e| crate::error::AliasError::Processing(e.to_string()))
}
