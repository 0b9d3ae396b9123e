//! Main processor builder and processing pipeline.
//!
//! `process_*` is a pure computation: raw bytes in, a complete immutable
//! [`Extraction`] out. Callers own the single current result and replace it
//! wholesale, so overlapping uploads cannot interleave partial state.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use foldhash::{HashSet, HashSetExt};

use crate::alias::{generate_alias_with_domain, ALIAS_DOMAIN};
use crate::encoding::decode_to_utf8;
use crate::error::{AliasError, Result};
use crate::heuristics::detect::{detect_mode, TableMode};
use crate::heuristics::header::extract_with_headers;
use crate::heuristics::headerless::extract_headerless;
use crate::heuristics::Candidate;
use crate::record::{Extraction, Record};
use crate::table::parse_raw;

/// Caps the retry loop when drawing a fresh alias after a collision.
const MAX_ALIAS_RETRIES: usize = 64;

/// Extracts name/email records from CSV data and generates alias addresses.
///
/// # Example
///
/// ```no_run
/// use csv_alias::AliasProcessor;
///
/// let processor = AliasProcessor::new();
/// let extraction = processor.process_path("contacts.csv").unwrap();
///
/// for record in &extraction.records {
///     println!("{} -> {}", record.original_email, record.alias_email);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AliasProcessor {
    /// Domain for generated alias addresses.
    alias_domain: String,
    /// Whether to retry alias generation on duplicates within one run.
    unique_aliases: bool,
}

impl Default for AliasProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl AliasProcessor {
    /// Create a new processor with default settings.
    pub fn new() -> Self {
        Self {
            alias_domain: ALIAS_DOMAIN.to_string(),
            unique_aliases: true,
        }
    }

    /// Set the domain used for generated alias addresses.
    pub fn alias_domain<S: Into<String>>(&mut self, domain: S) -> &mut Self {
        self.alias_domain = domain.into();
        self
    }

    /// Enable or disable the within-run alias uniqueness guard.
    pub fn unique_aliases(&mut self, unique: bool) -> &mut Self {
        self.unique_aliases = unique;
        self
    }

    /// Process a CSV file at the given path.
    ///
    /// Only a `.csv` name suffix is accepted; the check runs before any
    /// bytes are read.
    pub fn process_path<P: AsRef<Path>>(&self, path: P) -> Result<Extraction> {
        let path = path.as_ref();

        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv {
            return Err(AliasError::InvalidFileType(
                path.display().to_string(),
            ));
        }

        let mut file = File::open(path)?;
        self.process_reader(&mut file)
    }

    /// Process CSV data from a reader. The whole input is materialized in
    /// memory before parsing.
    pub fn process_reader<R: Read>(&self, mut reader: R) -> Result<Extraction> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.process_bytes(&data)
    }

    /// Process CSV data from bytes.
    ///
    /// Pipeline: decode to UTF-8, parse once header-agnostically, detect the
    /// table mode from row 0, run the matching extraction strategy, then
    /// assign sequential ids and alias addresses.
    pub fn process_bytes(&self, data: &[u8]) -> Result<Extraction> {
        let decoded = decode_to_utf8(data);
        let table = parse_raw(&decoded)?;

        let first_row = table.rows.first().map_or(&[][..], |row| row.as_slice());
        let mode = detect_mode(first_row);

        let candidates = match mode {
            TableMode::Header => extract_with_headers(&table.rows[0], &table.rows[1..])?,
            TableMode::Headerless => extract_headerless(&table.rows)?,
        };

        let records = self.build_records(candidates);
        let emails_found = records.len();

        Ok(Extraction::new(mode, records, emails_found))
    }

    /// Turn candidates into records with sequential ids and aliases.
    fn build_records(&self, candidates: Vec<Candidate>) -> Vec<Record> {
        let mut seen: HashSet<String> = HashSet::with_capacity(candidates.len());

        candidates
            .into_iter()
            .enumerate()
            .map(|(i, candidate)| {
                let alias = self.next_alias(&candidate.email, &mut seen);
                Record::new(
                    i + 1,
                    candidate.first_name,
                    candidate.last_name,
                    candidate.email,
                    alias,
                )
            })
            .collect()
    }

    /// Draw an alias, retrying on within-run duplicates when the uniqueness
    /// guard is enabled.
    fn next_alias(&self, email: &str, seen: &mut HashSet<String>) -> String {
        let mut alias = generate_alias_with_domain(email, &self.alias_domain);

        if self.unique_aliases {
            let mut attempts = 0;
            while !seen.insert(alias.clone()) && attempts < MAX_ALIAS_RETRIES {
                alias = generate_alias_with_domain(email, &self.alias_domain);
                attempts += 1;
            }
        }

        alias
    }
}
