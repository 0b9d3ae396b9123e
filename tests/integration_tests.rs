//! Integration tests for csv-alias

use csv_alias::{export, AliasError, AliasProcessor, TableMode, ALIAS_DOMAIN};
use std::io::Cursor;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_headered_extraction() {
    let data = b"First,Last,Email\nAda,Lovelace,ada@x.com\n";
    let processor = AliasProcessor::new();

    let extraction = processor.process_bytes(data).unwrap();

    assert_eq!(extraction.mode, TableMode::Header);
    assert_eq!(extraction.records.len(), 1);

    let record = &extraction.records[0];
    assert_eq!(record.id, 1);
    assert_eq!(record.first_name, "Ada");
    assert_eq!(record.last_name, "Lovelace");
    assert_eq!(record.original_email, "ada@x.com");
}

#[test]
fn test_alias_shape_and_first_char() {
    let data = b"Email\nAda.Lovelace@x.com\n";
    let processor = AliasProcessor::new();

    let extraction = processor.process_bytes(data).unwrap();
    let alias = &extraction.records[0].alias_email;

    let pattern = regex::Regex::new(&format!(
        r"^[a-z][0-9]{{1,4}}[0-9a-z]{{3}}@{}$",
        regex::escape(ALIAS_DOMAIN)
    ))
    .unwrap();
    assert!(pattern.is_match(alias), "unexpected alias: {alias}");
    assert!(alias.starts_with('a'));
}

#[test]
fn test_email_row_as_row_zero_is_headerless() {
    // A header-consuming parse would have used these cells as field names.
    let data = b"John,Doe,john@x.com\n";
    let processor = AliasProcessor::new();

    let extraction = processor.process_bytes(data).unwrap();

    assert_eq!(extraction.mode, TableMode::Headerless);
    assert_eq!(extraction.records.len(), 1);
    assert_eq!(extraction.records[0].first_name, "John");
    assert_eq!(extraction.records[0].last_name, "Doe");
    assert_eq!(extraction.records[0].original_email, "john@x.com");
}

#[test]
fn test_headerless_two_cell_lookback() {
    let data = b"Ada,Lovelace,ada@x.com,extra\nGrace,Hopper,grace@navy.mil,\n";
    let processor = AliasProcessor::new();

    let extraction = processor.process_bytes(data).unwrap();

    assert_eq!(extraction.mode, TableMode::Headerless);
    assert_eq!(extraction.records[0].first_name, "Ada");
    assert_eq!(extraction.records[0].last_name, "Lovelace");
    assert_eq!(extraction.records[1].first_name, "Grace");
}

#[test]
fn test_headerless_single_cell_name_split() {
    let data = b"Ada Lovelace,ada@x.com\n";
    let processor = AliasProcessor::new();

    let extraction = processor.process_bytes(data).unwrap();

    assert_eq!(extraction.records[0].first_name, "Ada");
    assert_eq!(extraction.records[0].last_name, "Lovelace");
}

#[test]
fn test_headerless_multiple_emails_per_row() {
    let data = b"Ada,Lovelace,ada@x.com,cc@x.com\n";
    let processor = AliasProcessor::new();

    let extraction = processor.process_bytes(data).unwrap();

    assert_eq!(extraction.records.len(), 2);
    assert_eq!(extraction.emails_found, 2);
    assert_eq!(extraction.records[1].original_email, "cc@x.com");
}

#[test]
fn test_fuzzy_header_matching() {
    let data = b"Given Name,Family Name,E-Mail Address\nAda,Lovelace,ada@x.com\n";
    let processor = AliasProcessor::new();

    let extraction = processor.process_bytes(data).unwrap();

    assert_eq!(extraction.mode, TableMode::Header);
    assert_eq!(extraction.records[0].first_name, "Ada");
    assert_eq!(extraction.records[0].last_name, "Lovelace");
}

#[test]
fn test_header_without_email_column_scans_values() {
    let data = b"col_a,col_b,col_c\nfoo,Contact: ada@x.com,bar\n";
    let processor = AliasProcessor::new();

    let extraction = processor.process_bytes(data).unwrap();

    assert_eq!(extraction.records[0].original_email, "ada@x.com");
}

#[test]
fn test_no_emails_found() {
    let data = b"First,Last\nAda,Lovelace\nGrace,Hopper\n";
    let processor = AliasProcessor::new();

    let result = processor.process_bytes(data);
    assert!(matches!(result, Err(AliasError::NoEmailsFound)));
}

#[test]
fn test_no_data() {
    let data = b"First,Last,Email\n,,\n,,\n";
    let processor = AliasProcessor::new();

    let result = processor.process_bytes(data);
    assert!(matches!(result, Err(AliasError::NoData)));
}

#[test]
fn test_empty_file() {
    let processor = AliasProcessor::new();
    let result = processor.process_bytes(b"");
    assert!(matches!(result, Err(AliasError::NoData)));
}

#[test]
fn test_invalid_file_type_rejected_before_read() {
    let processor = AliasProcessor::new();
    let result = processor.process_path("does_not_exist.txt");
    // Extension check fires before any IO, so this is not an IO error.
    assert!(matches!(result, Err(AliasError::InvalidFileType(_))));
}

#[test]
fn test_process_from_file() {
    let mut temp_file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .unwrap();
    writeln!(temp_file, "First,Last,Email").unwrap();
    writeln!(temp_file, "Ada,Lovelace,ada@x.com").unwrap();
    writeln!(temp_file, "Grace,Hopper,grace@navy.mil").unwrap();
    temp_file.flush().unwrap();

    let processor = AliasProcessor::new();
    let extraction = processor.process_path(temp_file.path()).unwrap();

    assert_eq!(extraction.records.len(), 2);
    assert_eq!(extraction.records[1].first_name, "Grace");
}

#[test]
fn test_process_from_reader() {
    let data = b"Email\nada@x.com\n".to_vec();
    let processor = AliasProcessor::new();

    let extraction = processor.process_reader(Cursor::new(data)).unwrap();
    assert_eq!(extraction.records.len(), 1);
}

#[test]
fn test_idempotent_extraction() {
    let data = b"Ada,Lovelace,ada@x.com\nGrace Hopper,grace@navy.mil\n";
    let processor = AliasProcessor::new();

    let a = processor.process_bytes(data).unwrap();
    let b = processor.process_bytes(data).unwrap();

    assert_eq!(a.records.len(), b.records.len());
    for (ra, rb) in a.records.iter().zip(b.records.iter()) {
        assert_eq!(ra.first_name, rb.first_name);
        assert_eq!(ra.last_name, rb.last_name);
        assert_eq!(ra.original_email, rb.original_email);
        // Aliases are randomized per run and expected to differ.
    }
}

#[test]
fn test_export_round_trip() {
    let data = b"First,Last,Email\nAda,Lovelace,ada@x.com\nGrace,Hopper,grace@navy.mil\n";
    let processor = AliasProcessor::new();
    let extraction = processor.process_bytes(data).unwrap();

    let csv = export::records_to_csv_string(&extraction.records).unwrap();

    let mut reader = csv::Reader::from_reader(Cursor::new(csv.into_bytes()));
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers,
        csv::StringRecord::from(vec![
            "first name",
            "last name",
            "original email",
            "alias email"
        ])
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), extraction.records.len());
    for (row, record) in rows.iter().zip(extraction.records.iter()) {
        assert_eq!(&row[2], record.original_email.as_str());
        assert_eq!(&row[3], record.alias_email.as_str());
    }
}

#[test]
fn test_export_to_file() {
    let data = b"Email\nada@x.com\n";
    let processor = AliasProcessor::new();
    let extraction = processor.process_bytes(data).unwrap();

    let temp_file = NamedTempFile::new().unwrap();
    export::write_records_to_path(temp_file.path(), &extraction.records).unwrap();

    let contents = std::fs::read_to_string(temp_file.path()).unwrap();
    assert!(contents.starts_with("first name,last name,original email,alias email"));
    assert!(contents.contains("ada@x.com"));
}

#[test]
fn test_windows_line_endings() {
    let data = b"First,Last,Email\r\nAda,Lovelace,ada@x.com\r\n";
    let processor = AliasProcessor::new();

    let extraction = processor.process_bytes(data).unwrap();
    assert_eq!(extraction.records.len(), 1);
    assert_eq!(extraction.records[0].original_email, "ada@x.com");
}

#[test]
fn test_utf8_bom_input() {
    let mut data = vec![0xEF, 0xBB, 0xBF];
    data.extend_from_slice(b"First,Last,Email\nAda,Lovelace,ada@x.com\n");

    let processor = AliasProcessor::new();
    let extraction = processor.process_bytes(&data).unwrap();

    assert_eq!(extraction.mode, TableMode::Header);
    assert_eq!(extraction.records.len(), 1);
}

#[test]
fn test_quoted_cells() {
    let data = b"Name,Email\n\"Lovelace, Ada\",ada@x.com\n";
    let processor = AliasProcessor::new();

    let extraction = processor.process_bytes(data).unwrap();
    assert_eq!(extraction.records[0].original_email, "ada@x.com");
}

#[test]
fn test_mailing_address_column_matches_email_keywords() {
    // Known ambiguity kept for compatibility: "Mailing Address" is matched
    // as the email column and is authoritative, so the row yields nothing
    // even though another column holds an address.
    let data = b"Mailing Address,Contact\n10 Downing St,ada@x.com\n";
    let processor = AliasProcessor::new();

    let result = processor.process_bytes(data);
    assert!(matches!(result, Err(AliasError::NoEmailsFound)));
}
