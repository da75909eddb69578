//! The CLI's import sink: records are written out as JSON.
//!
//! This stands in for the ERP backend a real host would call; the
//! pipeline itself never persists anything.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use intake_model::ImportReport;
use intake_transform::{Importer, Record};

/// Writes the full record list as a pretty-printed JSON array.
pub struct JsonSink {
    /// Target file; stdout when `None`.
    pub out: Option<PathBuf>,
}

impl Importer for JsonSink {
    fn import(
        &self,
        records: Vec<Record>,
    ) -> impl Future<Output = anyhow::Result<ImportReport>> {
        async move {
            let json = serde_json::to_string_pretty(&records).context("serialize records")?;
            match &self.out {
                Some(path) => {
                    fs::write(path, json)
                        .with_context(|| format!("write records: {}", path.display()))?;
                }
                None => println!("{json}"),
            }
            Ok(ImportReport {
                success: true,
                imported: records.len(),
                skipped: 0,
                errors: Vec::new(),
            })
        }
    }
}
