//! Delimited-text parsing with quoted-field handling.
//!
//! The cell splitter is a two-state automaton (outside-quotes /
//! inside-quotes): commas split fields only outside quotes, and a doubled
//! quote inside a quoted field decodes to one literal quote. Embedded
//! newlines inside quoted fields are not supported; lines are split
//! before field parsing.

use intake_model::{IntakeError, ParsedFile, Result};

/// Parses one line into trimmed cell values.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes => {
                in_quotes = true;
            }
            '"' if in_quotes => {
                // Doubled quote is an escaped literal quote
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => {
                current.push(c);
            }
        }
    }

    cells.push(current.trim().to_string());
    cells
}

/// Parses full file content: first non-blank line is the header row, the
/// rest are data rows. Blank lines are skipped.
///
/// # Errors
///
/// Returns [`IntakeError::EmptyFile`] when no header row can be found.
pub fn parse_text(source_name: &str, text: &str) -> Result<ParsedFile> {
    let mut lines = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Err(IntakeError::EmptyFile);
    };
    let headers = parse_line(header_line);
    if headers.iter().all(|header| header.is_empty()) {
        return Err(IntakeError::EmptyFile);
    }

    let rows: Vec<Vec<String>> = lines.map(parse_line).collect();
    tracing::debug!(
        source = source_name,
        headers = headers.len(),
        rows = rows.len(),
        "parsed delimited file"
    );

    Ok(ParsedFile {
        source_name: source_name.to_string(),
        headers,
        rows,
    })
}
