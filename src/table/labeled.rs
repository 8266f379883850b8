//! Labelled tables and wafer collections.

use super::axis::{AxisLabels, series_strings};
use crate::error::{Result, TableBuilderError};
use crate::models::DropTotals;
use polars::prelude::*;
use tracing::warn;

/// A data frame with labelled row and column axes.
///
/// In indexed form the row labels live in `index` and every frame column
/// is a data column, named by its flattened column label. In flat form
/// `index` is `None`, the row labels are the leading frame columns, and
/// `columns` is a single level naming every frame column.
#[derive(Debug, Clone)]
pub struct LabeledTable {
    index: Option<AxisLabels>,
    columns: AxisLabels,
    data: DataFrame,
    row_label_columns: usize,
}

impl LabeledTable {
    /// Build an indexed table, checking that both axes match the frame
    pub fn new(index: AxisLabels, columns: AxisLabels, data: DataFrame) -> Result<Self> {
        if index.len() != data.height() {
            return Err(TableBuilderError::structural(format!(
                "{} row labels for {} data rows",
                index.len(),
                data.height()
            )));
        }
        if columns.len() != data.width() {
            return Err(TableBuilderError::structural(format!(
                "{} column labels for {} data columns",
                columns.len(),
                data.width()
            )));
        }
        Ok(Self {
            index: Some(index),
            columns,
            data,
            row_label_columns: 0,
        })
    }

    pub fn index(&self) -> Option<&AxisLabels> {
        self.index.as_ref()
    }

    pub fn columns(&self) -> &AxisLabels {
        &self.columns
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn into_data(self) -> DataFrame {
        self.data
    }

    /// (rows, columns) of the frame
    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    /// Number of leading frame columns holding row labels (flat form only)
    pub fn row_label_columns(&self) -> usize {
        self.row_label_columns
    }

    /// Cell at the given row and column label tuples.
    ///
    /// In flat form, `row` is matched against the leading row-label columns
    /// and `col` against the single column level.
    pub fn get<R, C>(&self, row: &[R], col: &[C]) -> Result<Option<AnyValue<'_>>>
    where
        R: AsRef<str>,
        C: AsRef<str>,
    {
        let row_pos = match &self.index {
            Some(index) => index.position(row)?,
            None => self.flat_row_position(row)?,
        };
        let col_pos = self.columns.position(col)?;

        match (row_pos, col_pos) {
            (Some(r), Some(c)) => Ok(Some(
                self.data.get_columns()[c].as_materialized_series().get(r)?,
            )),
            _ => Ok(None),
        }
    }

    fn flat_row_position<R: AsRef<str>>(&self, row: &[R]) -> Result<Option<usize>> {
        if row.len() != self.row_label_columns {
            return Ok(None);
        }
        let label_columns = self.data.get_columns()[..self.row_label_columns]
            .iter()
            .map(|column| series_strings(column.as_materialized_series()))
            .collect::<Result<Vec<_>>>()?;

        Ok((0..self.data.height()).find(|&r| {
            label_columns
                .iter()
                .zip(row)
                .all(|(labels, want)| labels[r] == want.as_ref())
        }))
    }

    /// Remove aggregate rows and/or columns whose outermost label is `total_label`.
    ///
    /// Labels that are absent are ignored. In flat form rows are matched on the
    /// outermost row-label column and columns on their full flattened label.
    pub fn drop_totals(self, which: DropTotals, total_label: &str) -> Result<Self> {
        let mut table = self;
        if which.drops_rows() {
            table = table.drop_total_rows(total_label)?;
        }
        if which.drops_columns() {
            table = table.drop_total_columns(total_label)?;
        }
        Ok(table)
    }

    fn drop_total_rows(self, total_label: &str) -> Result<Self> {
        let outer = match &self.index {
            Some(index) => index.level_values(0)?,
            None if self.row_label_columns > 0 => {
                series_strings(self.data.get_columns()[0].as_materialized_series())?
            }
            None => return Ok(self),
        };
        let keep: Vec<bool> = outer.iter().map(|label| label != total_label).collect();
        if keep.iter().all(|&k| k) {
            return Ok(self);
        }

        let mask = BooleanChunked::from_slice(PlSmallStr::from_static("keep"), &keep);
        Ok(Self {
            index: self.index.map(|index| index.retain(&keep)).transpose()?,
            data: self.data.filter(&mask)?,
            ..self
        })
    }

    fn drop_total_columns(self, total_label: &str) -> Result<Self> {
        let outer = self.columns.level_values(0)?;
        let keep: Vec<bool> = outer
            .iter()
            .enumerate()
            .map(|(pos, label)| pos < self.row_label_columns || label != total_label)
            .collect();
        if keep.iter().all(|&k| k) {
            return Ok(self);
        }

        let kept_columns = self
            .data
            .get_columns()
            .iter()
            .zip(&keep)
            .filter(|(_, keep)| **keep)
            .map(|(column, _)| column.clone())
            .collect();

        Ok(Self {
            columns: self.columns.retain(&keep)?,
            data: DataFrame::new(kept_columns)?,
            ..self
        })
    }

    /// Cast integer-looking row label levels to Int64
    pub(crate) fn with_integer_index(self) -> Result<Self> {
        Ok(Self {
            index: self
                .index
                .map(AxisLabels::with_integer_levels)
                .transpose()?,
            ..self
        })
    }

    /// Move the row labels into leading frame columns and flatten the column labels.
    pub(crate) fn into_flat(self, separator: &str) -> Result<Self> {
        let index = match self.index {
            Some(index) => index,
            None => return Ok(self),
        };

        if self.columns.is_multi_level() {
            warn!(
                "Column labels are not very useful with as_index=false when the source data has \
                 multilevel columns ({:?}). Use as_index=true and re-format the result instead.",
                self.columns.names()
            );
        }

        let index_names = index.names();
        let flat_labels = self.columns.flattened(separator)?;
        if let Some(clash) = index_names.iter().find(|name| flat_labels.contains(*name)) {
            return Err(TableBuilderError::structural(format!(
                "column label '{clash}' clashes with the row dimension of the same name; \
                 read with as_index=true instead"
            )));
        }

        let mut frame_columns: Vec<Column> = index
            .levels()
            .iter()
            .cloned()
            .map(Column::from)
            .collect();
        frame_columns.extend(
            self.data
                .get_columns()
                .iter()
                .zip(&flat_labels)
                .map(|(column, label)| {
                    let mut series = column.as_materialized_series().clone();
                    series.rename(label.as_str().into());
                    Column::from(series)
                }),
        );

        Ok(Self {
            row_label_columns: index.nlevels(),
            index: None,
            columns: AxisLabels::flat(index_names.into_iter().chain(flat_labels).collect()),
            data: DataFrame::new(frame_columns)?,
        })
    }
}

/// Tables of a multi-wafer document, keyed by wafer title in document order
#[derive(Debug, Clone, Default)]
pub struct Wafers {
    entries: Vec<(String, LabeledTable)>,
}

impl Wafers {
    pub(crate) fn push(&mut self, title: &str, table: LabeledTable) -> Result<()> {
        if self.get(title).is_some() {
            return Err(TableBuilderError::structural(format!(
                "wafer title '{title}' appears more than once"
            )));
        }
        self.entries.push((title.to_string(), table));
        Ok(())
    }

    pub fn get(&self, title: &str) -> Option<&LabeledTable> {
        self.entries
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, table)| table)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(title, _)| title.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LabeledTable)> {
        self.entries
            .iter()
            .map(|(title, table)| (title.as_str(), table))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Wafers {
    type Item = (String, LabeledTable);
    type IntoIter = std::vec::IntoIter<(String, LabeledTable)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Result of reading a document: one table, or one table per wafer
#[derive(Debug, Clone)]
pub enum Tables {
    Single(LabeledTable),
    Multiple(Wafers),
}

impl Tables {
    pub fn as_single(&self) -> Option<&LabeledTable> {
        match self {
            Tables::Single(table) => Some(table),
            Tables::Multiple(_) => None,
        }
    }

    pub fn as_wafers(&self) -> Option<&Wafers> {
        match self {
            Tables::Multiple(wafers) => Some(wafers),
            Tables::Single(_) => None,
        }
    }

    pub fn into_single(self) -> Option<LabeledTable> {
        match self {
            Tables::Single(table) => Some(table),
            Tables::Multiple(_) => None,
        }
    }

    pub fn into_wafers(self) -> Option<Wafers> {
        match self {
            Tables::Multiple(wafers) => Some(wafers),
            Tables::Single(_) => None,
        }
    }
}
