//! Auto-mapping engine.
//!
//! Matching is deliberately conservative: a source header maps to a
//! target column only when its lowercased, trimmed text equals the
//! target's key or label. No fuzzy or partial matching; anything less
//! than an exact name match is left for the user to assign.

use intake_model::{ColumnDef, MappingSet};

/// Computes the initial best-guess mapping for a parsed file's headers.
///
/// For each target column the first matching header wins. Running the
/// engine again over the same inputs yields the same result.
pub fn auto_map(columns: &[ColumnDef], headers: &[String]) -> MappingSet {
    let mut set = MappingSet::new();
    for column in columns {
        let key = column.key.to_lowercase();
        let label = column.label.to_lowercase();
        let matched = headers.iter().find(|header| {
            let normalized = header.trim().to_lowercase();
            normalized == key || normalized == label
        });
        if let Some(header) = matched {
            set.set(&column.key, header.as_str());
        }
    }
    tracing::debug!(
        targets = columns.len(),
        mapped = set.len(),
        "auto-mapping complete"
    );
    set
}

/// Target columns marked required that have no source mapping yet.
#[must_use]
pub fn unmapped_required<'a>(columns: &'a [ColumnDef], set: &MappingSet) -> Vec<&'a ColumnDef> {
    columns
        .iter()
        .filter(|column| column.required && !set.contains_target(&column.key))
        .collect()
}

/// True when every required target column has a source mapping. Gates
/// the step from mapping to validation.
#[must_use]
pub fn required_targets_mapped(columns: &[ColumnDef], set: &MappingSet) -> bool {
    unmapped_required(columns, set).is_empty()
}
