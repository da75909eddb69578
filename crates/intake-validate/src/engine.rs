//! Row validation engine.
//!
//! Every data row is checked against every target column; issues
//! accumulate into one list with no per-row short-circuiting. Issues
//! never block the import step, they only inform the user.

use intake_model::{ColumnDef, MappingSet, ParsedFile, ValidationIssue, Validity};

use crate::checks::check_type;

/// Offset from a 0-based data row index to the on-file line number
/// (1-based, plus the header line).
const ROW_NUMBER_OFFSET: usize = 2;

/// Validates all rows against the column definitions and current mapping.
pub fn validate_rows(
    columns: &[ColumnDef],
    mapping: &MappingSet,
    file: &ParsedFile,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for column in columns {
        match mapping.source_for(&column.key) {
            None => {
                if column.required {
                    // One issue per data row, each citing the label
                    for row_idx in 0..file.rows.len() {
                        issues.push(ValidationIssue::new(
                            row_idx + ROW_NUMBER_OFFSET,
                            &column.label,
                            "",
                            "Column not mapped",
                        ));
                    }
                }
            }
            Some(source) => {
                for (row_idx, row) in file.rows.iter().enumerate() {
                    let value = file.cell(row, source);
                    check_cell(column, row_idx, value, &mut issues);
                }
            }
        }
    }

    tracing::debug!(
        rows = file.rows.len(),
        columns = columns.len(),
        issues = issues.len(),
        "validation pass complete"
    );
    issues
}

fn check_cell(column: &ColumnDef, row_idx: usize, value: &str, issues: &mut Vec<ValidationIssue>) {
    let row = row_idx + ROW_NUMBER_OFFSET;
    if value.is_empty() {
        if column.required {
            issues.push(ValidationIssue::new(
                row,
                &column.label,
                value,
                "Required field is empty",
            ));
        }
        return;
    }

    if let Some(message) = check_type(column.column_type, value) {
        issues.push(ValidationIssue::new(row, &column.label, value, message));
    }

    // Custom validators run in addition to the type check
    if let Some(validator) = &column.validator
        && let Validity::Invalid(message) = validator(value)
    {
        issues.push(ValidationIssue::new(row, &column.label, value, message));
    }
}
