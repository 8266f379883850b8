//! Core data structures shared across the parsing pipeline.
//!
//! Defines the segmented document, the resolved header structure of one
//! table and the options controlling how aggregate totals are dropped.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A document split into its metadata header, table body and metadata footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedDocument {
    pub header: String,
    pub body: String,
    pub footer: String,
}

/// Header structure of one table (a single wafer or a whole body)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeaderData {
    /// Number of leading columns forming the row index
    pub num_row_index_cols: usize,

    /// Row dimension names, outermost first
    pub row_headers: Vec<String>,

    /// Number of data columns
    pub num_col_index_cols: usize,

    /// Column dimension name to its forward-filled label per data column
    pub col_headers_map: HashMap<String, Vec<String>>,

    /// Column dimension names, outermost first
    pub col_dimension: Vec<String>,

    /// Lines following the row-index header row
    pub data_without_headers: Vec<String>,
}

impl ParsedHeaderData {
    /// Total number of columns in the data grid
    pub fn total_num_columns(&self) -> usize {
        self.num_row_index_cols + self.num_col_index_cols
    }

    /// Column labels of each dimension, in dimension order
    pub fn column_levels(&self) -> Vec<Vec<String>> {
        self.col_dimension
            .iter()
            .map(|dimension| {
                self.col_headers_map
                    .get(dimension)
                    .cloned()
                    .unwrap_or_default()
            })
            .collect()
    }
}

/// Which aggregate "Total" entries to remove from a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropTotals {
    /// Keep every row and column
    #[default]
    None,
    Rows,
    Columns,
    Both,
}

impl DropTotals {
    pub fn drops_rows(&self) -> bool {
        matches!(self, DropTotals::Rows | DropTotals::Both)
    }

    pub fn drops_columns(&self) -> bool {
        matches!(self, DropTotals::Columns | DropTotals::Both)
    }
}

impl std::str::FromStr for DropTotals {
    type Err = crate::error::TableBuilderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "none" => Ok(DropTotals::None),
            "rows" => Ok(DropTotals::Rows),
            "columns" => Ok(DropTotals::Columns),
            "both" => Ok(DropTotals::Both),
            other => Err(crate::error::TableBuilderError::Configuration {
                message: format!(
                    "unknown drop_totals option '{other}', expected none, rows, columns or both"
                ),
            }),
        }
    }
}
