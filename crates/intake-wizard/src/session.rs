//! Import session orchestration.
//!
//! One session covers one file: accept, map, validate, import. The step
//! sequence is linear and the import step is a point of no return; the
//! only way back from `Importing` or `Complete` is a full reset.

use std::path::Path;

use intake_ingest::{AcceptPolicy, accept_file, accept_text};
use intake_map::{MappingSummary, auto_map, required_targets_mapped, unmapped_required};
use intake_model::{
    ColumnDef, ImportReport, IntakeError, MappingSet, ParsedFile, Result, ValidationIssue,
};
use intake_transform::{Importer, build_records, run_import};
use intake_validate::validate_rows;

/// Current step of the import wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Upload,
    Mapping,
    Validation,
    Importing,
    Complete,
}

impl WizardStep {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Mapping => "mapping",
            Self::Validation => "validation",
            Self::Importing => "importing",
            Self::Complete => "complete",
        }
    }
}

/// One import session: the host's column definitions plus all transient
/// state. Everything except the definitions and the accept policy is
/// dropped on [`WizardSession::reset`].
pub struct WizardSession {
    columns: Vec<ColumnDef>,
    policy: AcceptPolicy,
    step: WizardStep,
    file: Option<ParsedFile>,
    mapping: MappingSet,
    issues: Vec<ValidationIssue>,
    upload_error: Option<String>,
    report: Option<ImportReport>,
}

impl WizardSession {
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self::with_policy(columns, AcceptPolicy::default())
    }

    pub fn with_policy(columns: Vec<ColumnDef>, policy: AcceptPolicy) -> Self {
        Self {
            columns,
            policy,
            step: WizardStep::Upload,
            file: None,
            mapping: MappingSet::new(),
            issues: Vec::new(),
            upload_error: None,
            report: None,
        }
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub fn file(&self) -> Option<&ParsedFile> {
        self.file.as_ref()
    }

    #[must_use]
    pub fn mapping(&self) -> &MappingSet {
        &self.mapping
    }

    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Error message from the last rejected upload, if any.
    #[must_use]
    pub fn upload_error(&self) -> Option<&str> {
        self.upload_error.as_deref()
    }

    #[must_use]
    pub fn report(&self) -> Option<&ImportReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Accepts a file from disk. See [`Self::accept_text`].
    pub fn accept_file(&mut self, path: &Path) -> Result<()> {
        self.require_step(WizardStep::Upload)?;
        let outcome = accept_file(path, &self.policy);
        self.finish_accept(outcome)
    }

    /// Accepts in-memory content. On success the session moves to the
    /// mapping step with an initial auto-mapping; on rejection it stays
    /// in the upload step with a recorded, user-visible error and no
    /// parsed data.
    pub fn accept_text(&mut self, name: &str, text: &str) -> Result<()> {
        self.require_step(WizardStep::Upload)?;
        let outcome = accept_text(name, text, &self.policy);
        self.finish_accept(outcome)
    }

    fn finish_accept(&mut self, outcome: Result<ParsedFile>) -> Result<()> {
        match outcome {
            Ok(file) => {
                self.mapping = auto_map(&self.columns, &file.headers);
                tracing::info!(
                    file = %file.source_name,
                    rows = file.row_count(),
                    mapped = self.mapping.len(),
                    "file accepted, entering mapping step"
                );
                self.file = Some(file);
                self.upload_error = None;
                self.step = WizardStep::Mapping;
                Ok(())
            }
            Err(error) => {
                self.upload_error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Assigns or replaces the source column for a target key.
    pub fn set_mapping(&mut self, target_key: &str, source_column: &str) -> Result<()> {
        self.require_step(WizardStep::Mapping)?;
        self.mapping.set(target_key, source_column);
        Ok(())
    }

    /// Removes the mapping for a target key (the "no column" option).
    pub fn clear_mapping(&mut self, target_key: &str) -> Result<()> {
        self.require_step(WizardStep::Mapping)?;
        self.mapping.clear(target_key);
        Ok(())
    }

    /// True when every required target column has a source mapping.
    #[must_use]
    pub fn required_mappings_satisfied(&self) -> bool {
        required_targets_mapped(&self.columns, &self.mapping)
    }

    #[must_use]
    pub fn mapping_summary(&self) -> MappingSummary {
        let headers = self
            .file
            .as_ref()
            .map_or(&[][..], |file| file.headers.as_slice());
        MappingSummary::build(&self.columns, headers, &self.mapping)
    }

    /// Moves from mapping to validation and runs the validation pass.
    ///
    /// # Errors
    ///
    /// Fails while any required target column is unmapped.
    pub fn proceed_to_validation(&mut self) -> Result<&[ValidationIssue]> {
        self.require_step(WizardStep::Mapping)?;
        if !self.required_mappings_satisfied() {
            let missing: Vec<&str> = unmapped_required(&self.columns, &self.mapping)
                .iter()
                .map(|column| column.label.as_str())
                .collect();
            return Err(IntakeError::Message(format!(
                "required columns not mapped: {}",
                missing.join(", ")
            )));
        }
        let file = self.file.as_ref().ok_or(IntakeError::InvalidState {
            state: self.step.name(),
        })?;
        self.issues = validate_rows(&self.columns, &self.mapping, file);
        self.step = WizardStep::Validation;
        Ok(&self.issues)
    }

    /// Steps back from validation to adjust mappings. Not available once
    /// the import has started.
    pub fn back_to_mapping(&mut self) -> Result<()> {
        self.require_step(WizardStep::Validation)?;
        self.issues.clear();
        self.step = WizardStep::Mapping;
        Ok(())
    }

    /// Transforms rows into records and hands them to the sink as one
    /// awaited call. Validation issues do not block this step and no row
    /// is filtered out; skipping is the sink's decision. The session
    /// lands in `Complete` whether the sink succeeded or not.
    pub async fn import<I: Importer>(&mut self, importer: &I) -> Result<&ImportReport> {
        self.require_step(WizardStep::Validation)?;
        let file = self.file.as_ref().ok_or(IntakeError::InvalidState {
            state: self.step.name(),
        })?;
        let records = build_records(&self.columns, &self.mapping, file);
        self.step = WizardStep::Importing;

        let report = run_import(importer, records).await;
        self.step = WizardStep::Complete;
        Ok(self.report.insert(report))
    }

    /// Discards all session state and returns to a fresh upload step.
    pub fn reset(&mut self) {
        self.step = WizardStep::Upload;
        self.file = None;
        self.mapping = MappingSet::new();
        self.issues.clear();
        self.upload_error = None;
        self.report = None;
        tracing::debug!("session reset");
    }

    fn require_step(&self, expected: WizardStep) -> Result<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(IntakeError::InvalidState {
                state: self.step.name(),
            })
        }
    }
}
