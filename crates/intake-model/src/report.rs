//! Validation issues and the final import report.

use serde::{Deserialize, Serialize};

/// One validation problem, cited by on-file row number and column label.
///
/// Row numbers are 1-based and offset by the header line, so the first
/// data row is row 2 — matching what the user sees in a spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub row: usize,
    /// Display label of the offending target column.
    pub column: String,
    /// Raw cell value as read from the file.
    pub value: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        row: usize,
        column: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            row,
            column: column.into(),
            value: value.into(),
            message: message.into(),
        }
    }
}

/// Summary returned to the host after the import call settles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportReport {
    pub success: bool,
    /// Rows the sink accepted.
    pub imported: usize,
    /// Rows the sink skipped (or all rows, when the call failed).
    pub skipped: usize,
    pub errors: Vec<ValidationIssue>,
}

impl ImportReport {
    /// Report for a sink call that never completed: nothing imported,
    /// every row skipped, one synthetic error.
    #[must_use]
    pub fn failed(total_rows: usize, message: impl Into<String>) -> Self {
        Self {
            success: false,
            imported: 0,
            skipped: total_rows,
            errors: vec![ValidationIssue::new(0, "import", "", message)],
        }
    }
}
