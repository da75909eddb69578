//! End-to-end session behavior: step gating, error recording, import.

use anyhow::anyhow;
use intake_ingest::AcceptPolicy;
use intake_model::{ColumnDef, ColumnType, ImportReport, IntakeError};
use intake_transform::{FnImporter, Importer, Record};
use intake_wizard::{WizardSession, WizardStep};

fn vendor_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("code", "Vendor Code").required(),
        ColumnDef::new("name", "Vendor Name").required(),
        ColumnDef::new("email", "Email").with_type(ColumnType::Email),
    ]
}

const VENDOR_CSV: &str = "\
Vendor Code,Vendor Name,Email
V-001,Acme,sales@acme.example
V-002,\"Smith, John\",john@smith.example
V-003,Globex,not-an-email
";

fn accepting_sink() -> impl Importer {
    FnImporter(|records: Vec<Record>| async move {
        Ok(ImportReport {
            success: true,
            imported: records.len(),
            skipped: 0,
            errors: Vec::new(),
        })
    })
}

#[tokio::test]
async fn happy_path_runs_through_all_steps() {
    let mut session = WizardSession::new(vendor_columns());
    assert_eq!(session.step(), WizardStep::Upload);

    session.accept_text("vendors.csv", VENDOR_CSV).unwrap();
    assert_eq!(session.step(), WizardStep::Mapping);
    assert!(session.required_mappings_satisfied());

    let issues = session.proceed_to_validation().unwrap();
    // Row 4 has the bad email; row count is unaffected
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].row, 4);
    assert_eq!(session.file().unwrap().row_count(), 3);

    let report = session.import(&accepting_sink()).await.unwrap();
    assert!(report.success);
    assert_eq!(report.imported, 3);
    assert_eq!(session.step(), WizardStep::Complete);
}

#[tokio::test]
async fn sink_rejection_yields_synthetic_report() {
    let mut session = WizardSession::new(vendor_columns());
    session.accept_text("vendors.csv", VENDOR_CSV).unwrap();
    session.proceed_to_validation().unwrap();

    let failing = FnImporter(|_records: Vec<Record>| async move {
        Err::<ImportReport, _>(anyhow!("erp api down"))
    });
    let report = session.import(&failing).await.unwrap();
    assert!(!report.success);
    assert_eq!(report.imported, 0);
    assert_eq!(report.skipped, 3);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(session.step(), WizardStep::Complete);
}

#[test]
fn oversize_upload_stays_in_upload_with_error() {
    let policy = AcceptPolicy::default().with_max_size_mb(0);
    let mut session = WizardSession::with_policy(vendor_columns(), policy);

    let err = session.accept_text("vendors.csv", VENDOR_CSV).unwrap_err();
    assert!(matches!(err, IntakeError::FileTooLarge { .. }));
    assert_eq!(session.step(), WizardStep::Upload);
    assert!(session.upload_error().is_some());
    assert!(session.file().is_none());
}

#[test]
fn validation_is_gated_on_required_mappings() {
    let mut session = WizardSession::new(vendor_columns());
    session
        .accept_text("vendors.csv", "Code,Contact\nV-001,a@b.co\n")
        .unwrap();
    // Nothing auto-mapped to the required targets
    assert!(!session.required_mappings_satisfied());
    let err = session.proceed_to_validation().unwrap_err();
    assert!(matches!(err, IntakeError::Message(_)));
    assert_eq!(session.step(), WizardStep::Mapping);

    session.set_mapping("code", "Code").unwrap();
    session.set_mapping("name", "Contact").unwrap();
    assert!(session.required_mappings_satisfied());
    session.proceed_to_validation().unwrap();
    assert_eq!(session.step(), WizardStep::Validation);
}

#[tokio::test]
async fn no_way_back_after_import_starts() {
    let mut session = WizardSession::new(vendor_columns());
    session.accept_text("vendors.csv", VENDOR_CSV).unwrap();
    session.proceed_to_validation().unwrap();
    session.back_to_mapping().unwrap();
    session.proceed_to_validation().unwrap();

    session.import(&accepting_sink()).await.unwrap();
    let err = session.back_to_mapping().unwrap_err();
    assert!(matches!(
        err,
        IntakeError::InvalidState { state: "complete" }
    ));
    let err = session.set_mapping("code", "Other").unwrap_err();
    assert!(matches!(err, IntakeError::InvalidState { .. }));
}

#[tokio::test]
async fn reset_returns_to_a_fresh_upload() {
    let mut session = WizardSession::new(vendor_columns());
    session.accept_text("vendors.csv", VENDOR_CSV).unwrap();
    session.proceed_to_validation().unwrap();
    session.import(&accepting_sink()).await.unwrap();

    session.reset();
    assert_eq!(session.step(), WizardStep::Upload);
    assert!(session.file().is_none());
    assert!(session.mapping().is_empty());
    assert!(session.issues().is_empty());
    assert!(session.report().is_none());
}

#[test]
fn operations_out_of_step_are_rejected() {
    let mut session = WizardSession::new(vendor_columns());
    // Mapping operations before any file is accepted
    assert!(matches!(
        session.set_mapping("code", "Code"),
        Err(IntakeError::InvalidState { state: "upload" })
    ));
    assert!(matches!(
        session.proceed_to_validation(),
        Err(IntakeError::InvalidState { state: "upload" })
    ));
}
