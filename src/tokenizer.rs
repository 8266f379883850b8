//! Quote-aware cell tokenization for TableBuilder grid lines.
//!
//! TableBuilder only ever quotes whole fields and never embeds literal quotes,
//! so a quoted span is taken verbatim (commas included, e.g. "Managers, nfd")
//! and a bare comma closes an empty cell. Header rows are tokenized here;
//! data rows go through the `csv` reader in [`parse_data_rows`].

use crate::error::{Result, TableBuilderError};
use tracing::debug;

/// One cell of a grid line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Contents of a double-quote wrapped field, quotes stripped
    Quoted(String),
    /// Unquoted field; empty for a bare comma placeholder
    Bare(String),
}

impl Cell {
    pub fn as_str(&self) -> &str {
        match self {
            Cell::Quoted(value) | Cell::Bare(value) => value,
        }
    }

    pub fn is_quoted(&self) -> bool {
        matches!(self, Cell::Quoted(_))
    }

    pub fn into_string(self) -> String {
        match self {
            Cell::Quoted(value) | Cell::Bare(value) => value,
        }
    }
}

/// Split one line into cells.
///
/// Each cell consumes at most one trailing comma, so `"a","b",` yields two
/// cells and `,,"x",` yields two empty placeholders followed by `x`.
pub fn tokenize(line: &str) -> Result<Vec<Cell>> {
    let line = line.trim_end_matches(['\n', '\r']);
    let mut cells = Vec::new();
    let mut rest = line;

    while !rest.is_empty() {
        if let Some(after_quote) = rest.strip_prefix('"') {
            let close = after_quote.find('"').ok_or_else(|| {
                TableBuilderError::malformed(format!("unbalanced quotes in line: {line}"))
            })?;
            cells.push(Cell::Quoted(after_quote[..close].to_string()));

            let after_field = &after_quote[close + 1..];
            rest = match after_field.strip_prefix(',') {
                Some(next) => next,
                None if after_field.is_empty() => after_field,
                None => {
                    return Err(TableBuilderError::malformed(format!(
                        "unexpected text after closing quote in line: {line}"
                    )));
                }
            };
        } else {
            let end = rest.find(',').unwrap_or(rest.len());
            let value = &rest[..end];
            if value.contains('"') {
                return Err(TableBuilderError::malformed(format!(
                    "stray quote inside unquoted field in line: {line}"
                )));
            }
            cells.push(Cell::Bare(value.to_string()));
            rest = rest.get(end + 1..).unwrap_or("");
        }
    }

    Ok(cells)
}

/// All cells of a header row as strings, bare placeholders included
pub fn header_cells(line: &str) -> Result<Vec<String>> {
    Ok(tokenize(line)?.into_iter().map(Cell::into_string).collect())
}

/// Only the quoted cells of a line, bare placeholders excluded
pub fn quoted_cells(line: &str) -> Result<Vec<String>> {
    Ok(tokenize(line)?
        .into_iter()
        .filter(Cell::is_quoted)
        .map(Cell::into_string)
        .collect())
}

/// Number of bare commas before the first non-comma character
pub fn leading_blank_count(line: &str) -> usize {
    line.len() - line.trim_start_matches(',').len()
}

/// Parse data lines into a rectangular grid of `num_columns` cells per row.
///
/// Lines carry a trailing comma, so one extra empty field per record is
/// expected and discarded. Blank lines are skipped.
pub fn parse_data_rows(lines: &[String], num_columns: usize) -> Result<Vec<Vec<String>>> {
    let text = lines.join("\n");
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (row_num, record) in reader.records().enumerate() {
        let record = record?;

        if record.len() < num_columns {
            return Err(TableBuilderError::malformed(format!(
                "data row {} has {} fields, expected {}",
                row_num,
                record.len(),
                num_columns
            )));
        }
        if let Some(extra) = record.iter().skip(num_columns).find(|v| !v.is_empty()) {
            return Err(TableBuilderError::malformed(format!(
                "data row {row_num} has unexpected value '{extra}' beyond {num_columns} columns"
            )));
        }

        rows.push(
            record
                .iter()
                .take(num_columns)
                .map(str::to_string)
                .collect(),
        );
    }

    debug!("Parsed {} data rows of {} columns", rows.len(), num_columns);
    Ok(rows)
}
