//! TableBuilder document reader.
//!
//! [`TableBuilderReader`] owns the normalised lines of one export and splits
//! them into metadata header, table body and metadata footer on first use.
//! Tables, wafers and header metadata are all derived from that split.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tablebuilder_io::{DropTotals, TableBuilderReader, Tables};
//!
//! # fn example() -> tablebuilder_io::Result<()> {
//! let reader = TableBuilderReader::from_file("occupation_by_dzn.csv")?;
//! let metadata = reader.read_header_metadata()?;
//! println!("{} with filters {:?}", metadata.dataset, metadata.filters);
//!
//! match reader.read_table(true, DropTotals::Rows)? {
//!     Tables::Single(table) => println!("shape {:?}", table.shape()),
//!     Tables::Multiple(wafers) => {
//!         for (title, table) in wafers.iter() {
//!             println!("{title}: shape {:?}", table.shape());
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use crate::boundary::{body_between, detect_footer, detect_header};
use crate::config::ReaderConfig;
use crate::constants::patterns::{FOOTER_METADATA, HEADER_METADATA};
use crate::error::{Result, TableBuilderError};
use crate::header::HeaderInfo;
use crate::models::{DropTotals, SegmentedDocument};
use crate::table::{LabeledTable, TableBuilderResult, Tables, Wafers, parse_main_table, stack_wafers};
use crate::wafer::split_wafers;
use regex::Regex;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::{LazyLock, OnceLock};
use tracing::debug;

#[cfg(test)]
mod tests;

static HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_METADATA).expect("valid header regex"));

static FOOTER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FOOTER_METADATA).expect("valid footer regex"));

/// Reader over one TableBuilder CSV export
#[derive(Debug)]
pub struct TableBuilderReader {
    lines: Vec<String>,
    config: ReaderConfig,
    split: OnceLock<SegmentedDocument>,
}

impl TableBuilderReader {
    /// Create a reader from document lines, with or without line terminators
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = lines
            .into_iter()
            .map(|line| line.as_ref().trim_end_matches(['\n', '\r']).to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self::from_string(&text)
    }

    /// Create a reader over a whole document held in memory
    pub fn from_string(text: &str) -> Self {
        Self {
            lines: normalise_lines(text),
            config: ReaderConfig::default(),
            split: OnceLock::new(),
        }
    }

    /// Read a whole document from an open stream
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::from_string(&text))
    }

    /// Read a document from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading TableBuilder export {}", path.display());
        Self::from_reader(File::open(path)?)
    }

    /// Replace the configuration, discarding any cached split
    pub fn with_config(self, config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            lines: self.lines,
            config,
            split: OnceLock::new(),
        })
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Normalised document lines, each newline-terminated
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Split the document into header, body and footer text.
    ///
    /// Always recomputes; the accessors below go through a per-instance cache.
    pub fn split_metadata(&self) -> Result<SegmentedDocument> {
        let header = detect_header(&self.lines, self.config.header_max_lines, &HEADER_REGEX)?;
        let footer = detect_footer(&self.lines, self.config.footer_max_lines, &FOOTER_REGEX)?;

        let full_text = self.lines.concat();
        let body = body_between(&full_text, &header, &footer)?.to_string();

        debug!(
            "Split document: header ends at byte {}, footer starts {} bytes before the end, body is {} bytes",
            header.offset,
            -footer.offset,
            body.len()
        );

        Ok(SegmentedDocument {
            header: header.text,
            body,
            footer: footer.text,
        })
    }

    fn segments(&self) -> Result<&SegmentedDocument> {
        if let Some(segments) = self.split.get() {
            return Ok(segments);
        }
        let segments = self.split_metadata()?;
        Ok(self.split.get_or_init(|| segments))
    }

    pub fn raw_header(&self) -> Result<&str> {
        Ok(&self.segments()?.header)
    }

    pub fn raw_body(&self) -> Result<&str> {
        Ok(&self.segments()?.body)
    }

    pub fn raw_footer(&self) -> Result<&str> {
        Ok(&self.segments()?.footer)
    }

    /// Decode the metadata header
    pub fn read_header_metadata(&self) -> Result<HeaderInfo> {
        HeaderInfo::from_raw_text(self.raw_header()?)
    }

    /// Read the body as one table, or one table per wafer.
    ///
    /// With `as_index` the row labels form the table index; otherwise they are
    /// leading data columns and multi-level column labels are flattened.
    pub fn read_table(&self, as_index: bool, drop_totals: DropTotals) -> Result<Tables> {
        let body = self.raw_body()?;
        let sections = split_wafers(body)?;

        if sections.is_empty() {
            let table = parse_main_table(body)?.to_table(as_index, drop_totals, &self.config)?;
            return Ok(Tables::Single(table));
        }

        let mut wafers = Wafers::default();
        for section in sections {
            let table = parse_main_table(section.body)
                .and_then(|result| result.to_table(as_index, drop_totals, &self.config))
                .map_err(|e| in_wafer(section.title, e))?;
            wafers.push(section.title, table)?;
        }
        Ok(Tables::Multiple(wafers))
    }

    /// Read the body keeping every total
    pub fn read(&self, as_index: bool) -> Result<Tables> {
        self.read_table(as_index, DropTotals::None)
    }

    /// Stack every wafer into one long table with a column per wafer title.
    pub fn to_long_format(&self, as_index: bool) -> Result<LabeledTable> {
        let sections = split_wafers(self.raw_body()?)?;
        if sections.is_empty() {
            return Err(TableBuilderError::structural(
                "long format is only available for documents with wafers",
            ));
        }

        let wafers = sections
            .into_iter()
            .map(|section| {
                parse_main_table(section.body)
                    .map(|result| (section.title.to_string(), result))
                    .map_err(|e| in_wafer(section.title, e))
            })
            .collect::<Result<Vec<(String, TableBuilderResult)>>>()?;

        stack_wafers(&wafers, as_index, &self.config)
    }

    /// Remove total rows and/or columns from a table read earlier
    pub fn drop_totals(&self, table: LabeledTable, which: DropTotals) -> Result<LabeledTable> {
        table.drop_totals(which, &self.config.total_label)
    }
}

/// Leading/trailing blank lines removed, CRLF folded, every line newline-terminated
fn normalise_lines(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n");
    let text = text.trim_matches('\n');
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').map(|line| format!("{line}\n")).collect()
}

/// Name the wafer a structural failure happened in
fn in_wafer(title: &str, error: TableBuilderError) -> TableBuilderError {
    match error {
        TableBuilderError::StructuralMismatch { reason } => {
            TableBuilderError::structural(format!("wafer '{title}': {reason}"))
        }
        TableBuilderError::MalformedInput { reason } => {
            TableBuilderError::malformed(format!("wafer '{title}': {reason}"))
        }
        other => other,
    }
}
