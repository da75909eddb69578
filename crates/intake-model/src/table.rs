//! Parsed representation of an uploaded delimited file.

use serde::{Deserialize, Serialize};

/// An uploaded file after parsing: ordered headers and rows of raw string
/// cells, aligned positionally to the headers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedFile {
    /// Original file name, kept for reporting.
    pub source_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ParsedFile {
    /// Index of `header` in the header row, if present.
    #[must_use]
    pub fn header_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Cell value at (`row`, `header`), empty string when the row is
    /// ragged or the header is unknown.
    #[must_use]
    pub fn cell<'a>(&'a self, row: &'a [String], header: &str) -> &'a str {
        self.header_index(header)
            .and_then(|idx| row.get(idx))
            .map_or("", String::as_str)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
