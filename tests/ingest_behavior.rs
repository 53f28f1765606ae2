//! Behavior-driven tests for loading equity listings
//!
//! These tests verify what a caller observes when feeding listings into the
//! service: which records land in the store, which lines are skipped, and
//! which inputs stop ingestion altogether.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tickmap_core::{EquityService, FieldError, FieldKind, LoadError, RecordError};

const FIXTURE_RECORD_COUNT: usize = 17;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../tests/fixtures/input000.txt")
}

fn load_fixture() -> (EquityService, tickmap_core::IngestReport) {
    let file = File::open(fixture_path()).expect("fixture should exist");
    let mut service = EquityService::new();
    let report = service
        .ingest_reader(BufReader::new(file))
        .expect("fixture has a header");
    (service, report)
}

fn write_input(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write input");
    file.flush().expect("flush input");
    file
}

// =============================================================================
// Loading: well-formed listings
// =============================================================================

#[test]
fn when_fixture_is_loaded_every_valid_record_is_available() {
    // Given/When: The reference listing is loaded
    let (service, report) = load_fixture();

    // Then: Every valid record is stored
    assert_eq!(report.inserted, FIXTURE_RECORD_COUNT);
    assert_eq!(service.len(), FIXTURE_RECORD_COUNT);

    // And: The code listing has one line per record
    let codes = service.all_security_codes();
    assert_eq!(codes.lines().count(), FIXTURE_RECORD_COUNT);

    // And: A known security can be retrieved with its converted fields
    let msft = service.lookup("MSFTUS").expect("MSFTUS should be loaded");
    assert_eq!(msft.identifier().as_str(), "MSFTUS");
    assert_eq!(msft.description(), "Microsoft Corp");
    assert_eq!(msft.market_cap(), 2_500_000_000_000);
    assert_eq!(msft.price(), 310.0);
    assert_eq!(msft.pe_ratio(), 9.5);
}

#[test]
fn when_fixture_is_loaded_codes_are_listed_alphabetically() {
    let (service, _) = load_fixture();

    let codes: Vec<String> = service.all_keys().into_iter().map(String::from).collect();
    let mut sorted = codes.clone();
    sorted.sort();

    assert_eq!(codes, sorted);
    assert_eq!(codes.first().map(String::as_str), Some("AAPLUS"));
    assert_eq!(codes.last().map(String::as_str), Some("XOMUS"));
}

// =============================================================================
// Loading: malformed lines
// =============================================================================

#[test]
fn when_fixture_contains_bad_lines_they_are_skipped_and_reported() {
    let (service, report) = load_fixture();

    // Then: Each malformed line is reported with its position
    let rejected: Vec<(usize, &RecordError)> = report
        .rejected
        .iter()
        .map(|r| (r.line_number().expect("numbered"), r.error()))
        .collect();
    assert_eq!(rejected.len(), 5);
    assert_eq!(rejected[0].0, 19);

    assert!(matches!(
        rejected[0].1,
        RecordError::Field {
            field: FieldKind::Identifier,
            source: FieldError::IdentifierInvalidChar { ch: 'i', .. },
        }
    ));
    assert!(matches!(
        rejected[1].1,
        RecordError::Field {
            field: FieldKind::Identifier,
            source: FieldError::IdentifierTooLong { len: 11, max: 6 },
        }
    ));
    assert!(matches!(
        rejected[2].1,
        RecordError::Field {
            field: FieldKind::MarketCap,
            source: FieldError::InvalidDigit { ch: '-', .. },
        }
    ));
    assert!(matches!(
        rejected[3].1,
        RecordError::Field {
            field: FieldKind::Price,
            source: FieldError::MalformedDecimal { .. },
        }
    ));
    assert!(matches!(
        rejected[4].1,
        RecordError::FieldCount { found: 3, expected: 5 }
    ));

    // And: None of them reached the store
    for code in ["ibmus", "TOOLONGNAME", "BADCAP", "BADPX", "SHORT"] {
        assert!(service.lookup(code).is_none(), "{code} must not be stored");
    }
}

#[test]
fn when_a_bad_line_precedes_valid_ones_ingestion_continues() {
    // Given: A listing whose first record is invalid
    let input = write_input(
        "HEADER\n\
         TOOLONGNAME|desc|1|1.0|1.0\n\
         IBMUS|International Business Machines|198657057012|182.95|11.18\n",
    );

    // When: It is loaded
    let mut service = EquityService::new();
    let report = service
        .ingest_reader(BufReader::new(File::open(input.path()).expect("open input")))
        .expect("header present");

    // Then: The valid record after it is still stored
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].line(), "TOOLONGNAME|desc|1|1.0|1.0");
    assert!(service.lookup("IBMUS").is_some());
}

// =============================================================================
// Loading: setup failures
// =============================================================================

#[test]
fn when_input_is_empty_loading_fails_with_missing_header() {
    let input = write_input("");

    let mut service = EquityService::new();
    let error = service
        .ingest_reader(BufReader::new(File::open(input.path()).expect("open input")))
        .expect_err("empty input has no header");

    assert!(matches!(error, LoadError::MissingHeader));
    assert_eq!(error.to_string(), "no header line in input");
}

#[test]
fn when_a_line_is_not_utf8_it_is_rejected_and_ingestion_continues() {
    // Given: a Latin-1 byte in the middle record
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(b"HEADER\nIBMUS|IBM|1|1|1\nNESTUS|Nestl\xe9 SA|1|1|1\nMSFTUS|MS|1|1|1\n")
        .expect("write input");
    file.flush().expect("flush input");

    // When
    let mut service = EquityService::new();
    let report = service
        .ingest_reader(BufReader::new(File::open(file.path()).expect("open input")))
        .expect("an undecodable line is not a read failure");

    // Then: only that line is rejected
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].line_number(), Some(3));
    assert!(matches!(
        report.rejected[0].error(),
        RecordError::Encoding { .. }
    ));
    assert_eq!(service.len(), 2);
    assert!(service.lookup("IBMUS").is_some());
    assert!(service.lookup("MSFTUS").is_some());
}

#[test]
fn when_the_same_identifier_appears_twice_the_last_record_wins() {
    let mut service = EquityService::new();
    let report = service
        .ingest_lines([
            "HEADER",
            "ACME|first listing|100|10.0|5.0",
            "ACME|second listing|200|20.0|6.0",
        ])
        .expect("header present");

    assert_eq!(report.replaced, 1);
    let acme = service.lookup("ACME").expect("stored");
    assert_eq!(acme.description(), "second listing");
    assert_eq!(service.all_security_codes(), "ACME\n");
}
