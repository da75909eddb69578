//! Command implementations for the intake CLI.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info_span;

use intake_ingest::AcceptPolicy;
use intake_map::MappingSummary;
use intake_model::{ColumnDef, ImportReport, ValidationIssue};
use intake_wizard::WizardSession;

use crate::cli::{PipelineArgs, RunArgs};
use crate::sink::JsonSink;

/// What a command produced, for summary rendering and exit codes.
pub struct PipelineOutcome {
    pub rows: usize,
    pub mapping: MappingSummary,
    pub issues: Vec<ValidationIssue>,
    /// Present only for `run`; `check` stops before the sink.
    pub report: Option<ImportReport>,
}

/// Parse, map, and validate without importing.
pub fn run_check(args: &PipelineArgs) -> Result<PipelineOutcome> {
    let span = info_span!("check", file = %args.file.display());
    let _guard = span.enter();

    let session = prepare_session(args)?;
    Ok(outcome(&session, None))
}

/// Run the full pipeline and hand records to the JSON sink.
pub async fn run_import(args: &RunArgs) -> Result<PipelineOutcome> {
    let span = info_span!("run", file = %args.pipeline.file.display());
    let _guard = span.enter();

    let mut session = prepare_session(&args.pipeline)?;
    let sink = JsonSink {
        out: args.out.clone(),
    };

    // The sink call is one coarse awaited unit; show an indeterminate
    // spinner for its duration.
    let spinner = importing_spinner(args.out.is_some());
    let report = session.import(&sink).await?.clone();
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    Ok(outcome(&session, Some(report)))
}

/// Loads target column definitions from a JSON file.
pub fn load_columns(path: &Path) -> Result<Vec<ColumnDef>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read column definitions: {}", path.display()))?;
    let columns: Vec<ColumnDef> = serde_json::from_str(&text)
        .with_context(|| format!("parse column definitions: {}", path.display()))?;
    if columns.is_empty() {
        bail!("column definition file is empty: {}", path.display());
    }
    Ok(columns)
}

/// Accepts the file, applies mapping overrides, and runs validation.
fn prepare_session(args: &PipelineArgs) -> Result<WizardSession> {
    let columns = load_columns(&args.columns)?;
    let mut session = WizardSession::with_policy(columns, build_policy(args));

    session
        .accept_file(&args.file)
        .with_context(|| format!("accept file: {}", args.file.display()))?;

    for override_spec in &args.map_overrides {
        let Some((target, source)) = override_spec.split_once('=') else {
            bail!("invalid --map value {override_spec:?}, expected TARGET=SOURCE");
        };
        session
            .set_mapping(target.trim(), source.trim())
            .context("apply mapping override")?;
    }
    for target in &args.unmap {
        session.clear_mapping(target.trim()).context("unmap")?;
    }

    session
        .proceed_to_validation()
        .context("proceed to validation")?;
    Ok(session)
}

fn build_policy(args: &PipelineArgs) -> AcceptPolicy {
    let mut policy = AcceptPolicy::default();
    if let Some(max_size_mb) = args.max_size_mb {
        policy = policy.with_max_size_mb(max_size_mb);
    }
    if !args.extensions.is_empty() {
        let extensions = args
            .extensions
            .iter()
            .map(|ext| {
                let ext = ext.trim().to_lowercase();
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{ext}")
                }
            })
            .collect();
        policy = policy.with_extensions(extensions);
    }
    policy
}

fn outcome(session: &WizardSession, report: Option<ImportReport>) -> PipelineOutcome {
    PipelineOutcome {
        rows: session.file().map_or(0, |file| file.row_count()),
        mapping: session.mapping_summary(),
        issues: session.issues().to_vec(),
        report,
    }
}

fn importing_spinner(enabled: bool) -> Option<ProgressBar> {
    // Writing records to stdout would interleave with the spinner
    if !enabled {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("importing...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}
