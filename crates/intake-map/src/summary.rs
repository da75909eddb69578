//! Mapping overview for display and reporting.

use serde::Serialize;

use intake_model::{ColumnDef, MappingSet};

/// Snapshot of the mapping state: what is assigned, what still needs a
/// source, and which file headers are unused.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MappingSummary {
    /// (target key, source header) pairs currently assigned.
    pub mapped: Vec<(String, String)>,
    /// Target keys with no source assigned.
    pub unmapped_targets: Vec<String>,
    /// File headers not feeding any target.
    pub unused_headers: Vec<String>,
}

impl MappingSummary {
    pub fn build(columns: &[ColumnDef], headers: &[String], set: &MappingSet) -> Self {
        let mut mapped = Vec::new();
        let mut unmapped_targets = Vec::new();
        for column in columns {
            match set.source_for(&column.key) {
                Some(source) => mapped.push((column.key.clone(), source.to_string())),
                None => unmapped_targets.push(column.key.clone()),
            }
        }
        let unused_headers = headers
            .iter()
            .filter(|header| set.iter().all(|m| &m.source_column != *header))
            .cloned()
            .collect();
        Self {
            mapped,
            unmapped_targets,
            unused_headers,
        }
    }
}
