//! File acceptance tests against the size and extension policy.

use std::fs;

use intake_ingest::{AcceptPolicy, accept_file, accept_text};
use intake_model::IntakeError;
use tempfile::tempdir;

#[test]
fn accepts_and_parses_a_csv_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vendors.csv");
    fs::write(&path, "code,name\nV-001,Acme\n").unwrap();

    let file = accept_file(&path, &AcceptPolicy::default()).unwrap();
    assert_eq!(file.source_name, "vendors.csv");
    assert_eq!(file.headers, vec!["code", "name"]);
    assert_eq!(file.row_count(), 1);
}

#[test]
fn rejects_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vendors.xlsx");
    fs::write(&path, "not really a spreadsheet").unwrap();

    let err = accept_file(&path, &AcceptPolicy::default()).unwrap_err();
    assert!(matches!(err, IntakeError::UnsupportedExtension { .. }));
}

#[test]
fn rejects_oversize_file_without_parsing() {
    let policy = AcceptPolicy::default().with_max_size_mb(0);
    let err = accept_text("vendors.csv", "code,name\nV-001,Acme\n", &policy).unwrap_err();
    assert!(matches!(err, IntakeError::FileTooLarge { limit_mb: 0 }));
}

#[test]
fn default_policy_accepts_only_csv() {
    let policy = AcceptPolicy::default();
    assert_eq!(policy.accepted_extensions, vec![".csv"]);

    let err = accept_text("notes.txt", "code\nV-001\n", &policy).unwrap_err();
    assert!(matches!(err, IntakeError::UnsupportedExtension { .. }));
}

#[test]
fn extension_match_is_case_insensitive() {
    let policy = AcceptPolicy::default();
    let file = accept_text("Vendors.CSV", "code\nV-001\n", &policy).unwrap();
    assert_eq!(file.headers, vec!["code"]);
}

#[test]
fn custom_extension_list_replaces_default() {
    let policy = AcceptPolicy::default().with_extensions(vec![".tsv".to_string()]);
    let err = accept_text("vendors.csv", "code\n", &policy).unwrap_err();
    assert!(matches!(err, IntakeError::UnsupportedExtension { .. }));
}
