//! Header structure resolution for one TableBuilder table.
//!
//! The column header region sits above the data. Each column-header row is
//! indented by the same number of bare commas, names one column dimension,
//! then lists that dimension's labels for every data column, leaving a cell
//! blank where the label repeats. The row-index header row follows: it names
//! the row dimensions and truncates early, which is how the end of the
//! column-header region is detected.

use crate::error::{Result, TableBuilderError};
use crate::fill::{FillDirection, fill_grid};
use crate::models::ParsedHeaderData;
use crate::tokenizer::{header_cells, leading_blank_count, quoted_cells};
use std::collections::HashSet;
use tracing::debug;

/// Whether `line` is the row-index header row that ends the column headers.
///
/// The first line is always a column-header row. After that, column-header
/// rows start with a bare comma and keep the same number of cells; the
/// row-index header row either starts with a quoted name or stops short.
fn at_index_headers(
    line: &str,
    line_no: usize,
    num_entries: usize,
    num_entries_prev: usize,
) -> bool {
    line_no != 0 && (!line.starts_with(',') || num_entries < num_entries_prev)
}

/// Resolve the row/column header structure of a table body.
pub fn resolve_headers(lines: &[String]) -> Result<ParsedHeaderData> {
    let first_line = lines
        .first()
        .filter(|line| !line.trim().is_empty())
        .ok_or_else(|| TableBuilderError::structural("table body is empty"))?;

    // The last row-index header sits beneath the column dimension label,
    // not to its left, hence the +1.
    let num_blank_cols_preceding_col_headers = leading_blank_count(first_line);
    let num_row_index_cols = num_blank_cols_preceding_col_headers + 1;

    let mut col_dimension = Vec::new();
    let mut label_rows: Vec<Vec<String>> = Vec::new();
    let mut num_entries_prev = 0;
    let mut index_header_line = None;

    for (line_no, line) in lines.iter().enumerate() {
        let cells = header_cells(line)?;
        let num_entries = cells.len();

        if at_index_headers(line, line_no, num_entries, num_entries_prev) {
            index_header_line = Some(line_no);
            break;
        }

        let mut level = cells.into_iter().skip(num_blank_cols_preceding_col_headers);
        let dimension = level.next().ok_or_else(|| {
            TableBuilderError::structural(format!(
                "column header row {line_no} has no dimension label"
            ))
        })?;

        col_dimension.push(dimension);
        label_rows.push(level.collect());
        num_entries_prev = num_entries;
    }

    let index_header_line = index_header_line.ok_or_else(|| {
        TableBuilderError::structural("Malformed file, never detected the end of index headers")
    })?;

    let num_label_rows = label_rows.len();
    fill_grid(&mut label_rows, FillDirection::Across, 0..num_label_rows);

    let num_col_index_cols = label_rows.last().map_or(0, Vec::len);
    if let Some((dimension, labels)) = col_dimension
        .iter()
        .zip(&label_rows)
        .find(|(_, labels)| labels.len() != num_col_index_cols)
    {
        return Err(TableBuilderError::structural(format!(
            "column dimension '{}' has {} labels but the innermost dimension has {}",
            dimension,
            labels.len(),
            num_col_index_cols
        )));
    }

    if let Some(duplicate) = find_duplicate(&col_dimension) {
        return Err(TableBuilderError::structural(format!(
            "column dimension '{duplicate}' appears twice"
        )));
    }

    let row_headers = quoted_cells(&lines[index_header_line])?;
    if row_headers.len() != num_row_index_cols {
        return Err(TableBuilderError::structural(format!(
            "row index header names {} dimensions but the column headers are indented for {}",
            row_headers.len(),
            num_row_index_cols
        )));
    }
    if let Some(duplicate) = find_duplicate(&row_headers) {
        return Err(TableBuilderError::structural(format!(
            "row dimension '{duplicate}' appears twice"
        )));
    }

    debug!(
        "Resolved headers: {} row index columns {:?}, {} data columns over {:?}",
        num_row_index_cols, row_headers, num_col_index_cols, col_dimension
    );

    Ok(ParsedHeaderData {
        num_row_index_cols,
        row_headers,
        num_col_index_cols,
        col_headers_map: col_dimension.iter().cloned().zip(label_rows).collect(),
        col_dimension,
        data_without_headers: lines[index_header_line + 1..].to_vec(),
    })
}

/// First name that occurs more than once
pub(crate) fn find_duplicate<S: AsRef<str>>(names: &[S]) -> Option<&str> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(AsRef::as_ref)
        .find(|name| !seen.insert(*name))
}
