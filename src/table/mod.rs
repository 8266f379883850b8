//! Table assembly.
//!
//! Turns one table body (a whole document body or a single wafer) into a
//! [`TableBuilderResult`]: resolved headers plus a forward-filled grid of
//! row labels and data cells. The result is then rendered as a
//! [`LabeledTable`], or stacked with its sibling wafers into long format.

pub mod axis;
pub mod labeled;

pub use axis::AxisLabels;
pub use labeled::{LabeledTable, Tables, Wafers};

use crate::config::ReaderConfig;
use crate::error::{Result, TableBuilderError};
use crate::fill::{FillDirection, fill_grid};
use crate::models::{DropTotals, ParsedHeaderData};
use crate::structure::{find_duplicate, resolve_headers};
use crate::tokenizer::parse_data_rows;
use polars::prelude::*;
use tracing::debug;

/// One assembled table before it is given a polars representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBuilderResult {
    headers: ParsedHeaderData,
    row_labels: Vec<Vec<String>>,
    cells: Vec<Vec<String>>,
}

/// Parse a table body into its headers and data grid.
pub fn parse_main_table(body: &str) -> Result<TableBuilderResult> {
    let lines: Vec<String> = body
        .trim_matches('\n')
        .lines()
        .map(str::to_string)
        .collect();
    let headers = resolve_headers(&lines)?;

    let mut grid = parse_data_rows(&headers.data_without_headers, headers.total_num_columns())?;
    fill_grid(&mut grid, FillDirection::Down, 0..headers.num_row_index_cols);

    let (row_labels, cells): (Vec<_>, Vec<_>) = grid
        .into_iter()
        .map(|mut row| {
            let cells = row.split_off(headers.num_row_index_cols);
            (row, cells)
        })
        .unzip();

    Ok(TableBuilderResult {
        headers,
        row_labels,
        cells,
    })
}

impl TableBuilderResult {
    pub fn headers(&self) -> &ParsedHeaderData {
        &self.headers
    }

    /// Row dimension names, outermost first
    pub fn index_names(&self) -> &[String] {
        &self.headers.row_headers
    }

    pub fn num_rows(&self) -> usize {
        self.cells.len()
    }

    /// Column labels as a (possibly multi-level) axis
    pub fn column_labels(&self) -> Result<AxisLabels> {
        AxisLabels::from_levels(&self.headers.col_dimension, self.headers.column_levels())
    }

    /// Row labels as a (possibly multi-level) text axis
    pub fn row_labels(&self) -> Result<AxisLabels> {
        let levels = (0..self.headers.num_row_index_cols)
            .map(|level| self.row_labels.iter().map(|row| row[level].clone()).collect())
            .collect();
        AxisLabels::from_levels(&self.headers.row_headers, levels)
    }

    /// Render as a labelled table.
    ///
    /// Totals are dropped before row labels are cast to integers, so a level
    /// such as region codes plus "Total" becomes integer once "Total" is gone.
    pub fn to_table(
        &self,
        as_index: bool,
        drop_totals: DropTotals,
        config: &ReaderConfig,
    ) -> Result<LabeledTable> {
        let columns = self.column_labels()?;
        let names = columns.flattened(&config.flatten_separator)?;
        if let Some(duplicate) = find_duplicate(&names) {
            return Err(TableBuilderError::structural(format!(
                "column label '{duplicate}' appears more than once"
            )));
        }

        let data_columns = names
            .iter()
            .enumerate()
            .map(|(c, name)| {
                let values = self.cells.iter().map(|row| row[c].as_str());
                typed_column(name, values)
            })
            .collect();

        let mut table = LabeledTable::new(self.row_labels()?, columns, DataFrame::new(data_columns)?)?;

        if drop_totals.drops_rows() {
            table = table.drop_totals(DropTotals::Rows, &config.total_label)?;
        }
        if as_index && config.cast_integer_index {
            table = table.with_integer_index()?;
        }
        if drop_totals.drops_columns() {
            table = table.drop_totals(DropTotals::Columns, &config.total_label)?;
        }
        if !as_index {
            table = table.into_flat(&config.flatten_separator)?;
        }

        debug!("Assembled table of shape {:?}", table.shape());
        Ok(table)
    }
}

/// Type a column of data cells.
///
/// Int64 when every non-blank cell parses as an integer, else Float64 when
/// every non-blank cell parses as a float, else String. Blank cells are null.
pub(crate) fn typed_column<'a, I>(name: &str, values: I) -> Column
where
    I: IntoIterator<Item = &'a str>,
{
    let values: Vec<&str> = values.into_iter().collect();
    let present = || values.iter().filter(|v| !v.is_empty());

    let column = if present().all(|v| v.parse::<i64>().is_ok()) {
        let parsed: Vec<Option<i64>> = values.iter().map(|v| v.parse().ok()).collect();
        Series::new(name.into(), parsed)
    } else if present().all(|v| v.parse::<f64>().is_ok()) {
        let parsed: Vec<Option<f64>> = values.iter().map(|v| v.parse().ok()).collect();
        Series::new(name.into(), parsed)
    } else {
        let text: Vec<Option<&str>> = values
            .iter()
            .map(|v| (!v.is_empty()).then_some(*v))
            .collect();
        Series::new(name.into(), text)
    };
    Column::from(column)
}

/// Stack same-shaped wafer tables into one long table.
///
/// Each output row is one (row label, column label) pair of the wafer grid,
/// walked row by row; its index carries the row dimensions followed by the
/// column dimensions. There is one data column per wafer, named by title.
pub fn stack_wafers(
    wafers: &[(String, TableBuilderResult)],
    as_index: bool,
    config: &ReaderConfig,
) -> Result<LabeledTable> {
    let Some((first_title, first)) = wafers.first() else {
        return Err(TableBuilderError::structural(
            "long format needs a document with wafers",
        ));
    };

    for (title, wafer) in &wafers[1..] {
        if wafer.headers.row_headers != first.headers.row_headers
            || wafer.headers.col_dimension != first.headers.col_dimension
            || wafer.headers.col_headers_map != first.headers.col_headers_map
            || wafer.row_labels != first.row_labels
        {
            return Err(TableBuilderError::structural(format!(
                "wafer '{title}' is not labelled like wafer '{first_title}'"
            )));
        }
    }

    let titles: Vec<String> = wafers.iter().map(|(title, _)| title.clone()).collect();
    if let Some(duplicate) = find_duplicate(&titles) {
        return Err(TableBuilderError::structural(format!(
            "wafer title '{duplicate}' appears more than once"
        )));
    }

    let column_levels = first.headers.column_levels();
    let num_data_cols = first.headers.num_col_index_cols;
    let positions: Vec<(usize, usize)> = (0..first.num_rows())
        .flat_map(|r| (0..num_data_cols).map(move |c| (r, c)))
        .collect();

    let mut names = first.headers.row_headers.clone();
    names.extend(first.headers.col_dimension.iter().cloned());

    let mut levels: Vec<Vec<String>> = (0..first.headers.num_row_index_cols)
        .map(|level| {
            positions
                .iter()
                .map(|&(r, _)| first.row_labels[r][level].clone())
                .collect()
        })
        .collect();
    levels.extend(column_levels.iter().map(|labels| {
        positions
            .iter()
            .map(|&(_, c)| labels[c].clone())
            .collect::<Vec<_>>()
    }));

    let data = wafers
        .iter()
        .map(|(title, wafer)| {
            typed_column(
                title,
                positions.iter().map(|&(r, c)| wafer.cells[r][c].as_str()),
            )
        })
        .collect();

    let mut table = LabeledTable::new(
        AxisLabels::from_levels(&names, levels)?,
        AxisLabels::flat(titles),
        DataFrame::new(data)?,
    )?;

    if as_index && config.cast_integer_index {
        table = table.with_integer_index()?;
    }
    if !as_index {
        table = table.into_flat(&config.flatten_separator)?;
    }

    debug!(
        "Stacked {} wafers into a long table of shape {:?}",
        wafers.len(),
        table.shape()
    );
    Ok(table)
}
