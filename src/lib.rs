//! csv-alias: find names and email addresses in messy CSV files and
//! generate alias addresses for them.
//!
//! Given a tabular file whose header row may be missing, mislabeled, or
//! itself contain data, the processor decides whether the first row is a
//! header, locates first name, last name, and email columns (or infers
//! names from cells neighboring an email), and produces one record per
//! discovered email with a generated alias address.
//!
//! # Quick Start
//!
//! ```no_run
//! use csv_alias::{AliasProcessor, export};
//!
//! let processor = AliasProcessor::new();
//! let extraction = processor.process_path("contacts.csv").unwrap();
//!
//! println!("Mode: {}", extraction.mode);
//! for record in &extraction.records {
//!     println!(
//!         "{} {} <{}> -> {}",
//!         record.first_name, record.last_name,
//!         record.original_email, record.alias_email
//!     );
//! }
//!
//! export::write_records_to_path(export::EXPORT_FILE_NAME, &extraction.records).unwrap();
//! ```
//!
//! # How detection works
//!
//! The source is parsed exactly once, header-agnostically. Row 0 is treated
//! as a header unless one of its cells itself parses as a full email
//! address; spreadsheets without headers place real records in row 0, and
//! consuming that row as field names would discard a valid record. In
//! header mode, columns are resolved by fuzzy substring matching against
//! keyword lists ("first", "surname", "e-mail", ...). In headerless mode,
//! cells are scanned left to right and names are guessed from up to two
//! cells preceding each email.

pub mod export;

mod alias;
mod encoding;
mod error;
mod heuristics;
mod processor;
mod record;
mod table;

// Re-export public API
pub use alias::{generate_alias, generate_alias_with_domain, ALIAS_DOMAIN};
pub use error::{AliasError, Result};
pub use heuristics::detect::{detect_mode, TableMode};
pub use heuristics::email::extract_email;
pub use processor::AliasProcessor;
pub use record::{Extraction, Record};

// Re-export for advanced usage
pub use table::{parse_raw, RawTable};
