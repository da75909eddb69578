//! The import sink boundary.
//!
//! Persistence belongs entirely to the host: the pipeline hands over the
//! full record list in one call and reports whatever comes back. There
//! is no chunking, retry, or cancellation; once the call starts the only
//! outcomes are the sink's own report or a synthetic all-skipped one.

use intake_model::ImportReport;

use crate::records::Record;

/// Host-supplied asynchronous import function.
///
/// The sink receives every transformed record, including rows that
/// failed validation; skipping those is the sink's decision.
pub trait Importer {
    fn import(
        &self,
        records: Vec<Record>,
    ) -> impl Future<Output = anyhow::Result<ImportReport>>;
}

/// Adapts a plain async closure into an [`Importer`].
pub struct FnImporter<F>(pub F);

impl<F, Fut> Importer for FnImporter<F>
where
    F: Fn(Vec<Record>) -> Fut,
    Fut: Future<Output = anyhow::Result<ImportReport>>,
{
    fn import(
        &self,
        records: Vec<Record>,
    ) -> impl Future<Output = anyhow::Result<ImportReport>> {
        (self.0)(records)
    }
}

/// Runs the sink and normalizes a rejection into a final report.
pub async fn run_import<I: Importer>(importer: &I, records: Vec<Record>) -> ImportReport {
    let total = records.len();
    tracing::info!(rows = total, "handing records to import sink");
    match importer.import(records).await {
        Ok(report) => {
            tracing::info!(
                imported = report.imported,
                skipped = report.skipped,
                success = report.success,
                "import sink settled"
            );
            report
        }
        Err(error) => {
            tracing::warn!(%error, "import sink rejected");
            ImportReport::failed(total, error.to_string())
        }
    }
}
