//! Unit tests for dataset loading

use std::path::PathBuf;

use vendtrix::services::dataset::{load_records, DatasetError};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_load_fixture_dataset() {
    let records = load_records(&fixture("sales.json")).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].machine, "M1");
    assert_eq!(records[0].month, 2);
    assert_eq!(records[0].rqty, 3);
    assert_eq!(records[0].linetotal, "$9.00");
    // The wire field is "type"; the model calls it payment.
    assert_eq!(records[1].payment, "cash");
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_records(&fixture("does-not-exist.json")).unwrap_err();
    assert!(matches!(err, DatasetError::Io(_)));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = load_records(&fixture("malformed.json")).unwrap_err();
    assert!(matches!(err, DatasetError::Parse(_)));
}
