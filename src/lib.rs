//! TableBuilder IO Library
//!
//! A Rust library for reading CSV exports produced by the Australian Bureau of
//! Statistics TableBuilder tool into labelled polars tables.
//!
//! This library provides tools for:
//! - Splitting an export into its metadata header, table body and metadata footer
//! - Decoding the header into dataset, variables, counting and active filters
//! - Resolving multi-level row and column labels from ragged header rows
//! - Splitting multi-wafer exports into one table per wafer
//! - Dropping aggregate "Total" rows and columns
//! - Stacking wafers into a single long table
//!
//! ```rust,no_run
//! use tablebuilder_io::{DropTotals, TableBuilderReader};
//!
//! # fn example() -> tablebuilder_io::Result<()> {
//! let reader = TableBuilderReader::from_file("export.csv")?;
//! let tables = reader.read_table(true, DropTotals::Both)?;
//! if let Some(table) = tables.as_single() {
//!     println!("{:?}", table.data());
//! }
//! # Ok(())
//! # }
//! ```

pub mod boundary;
pub mod config;
pub mod constants;
pub mod error;
pub mod fill;
pub mod header;
pub mod models;
pub mod reader;
pub mod structure;
pub mod table;
pub mod tokenizer;
pub mod wafer;

// Re-export commonly used types
pub use config::ReaderConfig;
pub use error::{Result, TableBuilderError};
pub use header::HeaderInfo;
pub use models::{DropTotals, ParsedHeaderData, SegmentedDocument};
pub use reader::TableBuilderReader;
pub use table::{AxisLabels, LabeledTable, TableBuilderResult, Tables, Wafers};
