use std::io;
use thiserror::Error;

/// Error type for alias extraction operations.
#[derive(Error, Debug)]
pub enum AliasError {
    /// The selected file does not have a `.csv` name suffix.
    #[error("Invalid file type: expected a .csv file, got {0:?}")]
    InvalidFileType(String),

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing error, message passed through from the parser.
    #[error("CSV parsing error: {0}")]
    Parse(#[from] csv::Error),

    /// Every row was empty after dropping blank rows.
    #[error("No data rows found in file")]
    NoData,

    /// Rows exist but no cell or column yields an extractable email.
    #[error("No email addresses found in file")]
    NoEmailsFound,

    /// Catch-all for unexpected failures during extraction.
    #[error("Processing failed: {0}")]
    Processing(String),
}

/// Result type alias for alias extraction operations.
pub type Result<T> = std::result::Result<T, AliasError>;
