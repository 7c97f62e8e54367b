//! Comma-separated claim matrices
//!
//! One row per source, one column per variable. An empty cell means the
//! source makes no claim about that variable.

use crate::errors::{Result, TruthError};
use crate::types::Value;

/// Parse rows of optional values. Blank lines are skipped; line numbers in
/// errors are 1-based and refer to the input text.
pub(crate) fn parse_rows(text: &str) -> Result<Vec<(usize, Vec<Option<Value>>)>> {
    let mut rows = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split(',')
            .enumerate()
            .map(|(col, cell)| {
                let cell = cell.trim();
                if cell.is_empty() {
                    return Ok(None);
                }
                cell.parse::<Value>()
                    .map(Some)
                    .map_err(|message| TruthError::Dataset {
                        line: line_no,
                        message: format!("column {}: {}", col, message),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        rows.push((line_no, row));
    }

    Ok(rows)
}

/// Render rows of optional values, one line per row
pub(crate) fn format_rows<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = &'a [Option<Value>]>,
{
    let mut out = String::new();
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| cell.map(|v| v.to_string()).unwrap_or_default())
            .collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}
