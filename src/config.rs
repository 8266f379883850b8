//! Reader configuration and validation.
//!
//! Controls the metadata search windows and how assembled tables are
//! labelled. Defaults match the layout of current TableBuilder exports.

use crate::constants::{FLATTEN_SEPARATOR, HEADER_FOOTER_MAX_EXTENT, TOTAL_LABEL};
use crate::error::{Result, TableBuilderError};
use serde::{Deserialize, Serialize};

/// Configuration for reading TableBuilder exports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Maximum number of lines searched for the metadata header
    pub header_max_lines: usize,

    /// Maximum number of lines searched for the metadata footer
    pub footer_max_lines: usize,

    /// Cast row labels to integers when every label in a level parses
    pub cast_integer_index: bool,

    /// Separator joining multi-level column labels in flat tables
    pub flatten_separator: String,

    /// Label of aggregate rows and columns removed by `DropTotals`
    pub total_label: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            header_max_lines: HEADER_FOOTER_MAX_EXTENT,
            footer_max_lines: HEADER_FOOTER_MAX_EXTENT,
            cast_integer_index: true,
            flatten_separator: FLATTEN_SEPARATOR.to_string(),
            total_label: TOTAL_LABEL.to_string(),
        }
    }
}

impl ReaderConfig {
    /// Set both metadata search windows
    pub fn with_max_extent(mut self, lines: usize) -> Self {
        self.header_max_lines = lines;
        self.footer_max_lines = lines;
        self
    }

    pub fn with_header_max_lines(mut self, lines: usize) -> Self {
        self.header_max_lines = lines;
        self
    }

    pub fn with_footer_max_lines(mut self, lines: usize) -> Self {
        self.footer_max_lines = lines;
        self
    }

    /// Keep row labels as text even when they are all integers
    pub fn without_integer_index(mut self) -> Self {
        self.cast_integer_index = false;
        self
    }

    pub fn with_flatten_separator(mut self, separator: impl Into<String>) -> Self {
        self.flatten_separator = separator.into();
        self
    }

    pub fn with_total_label(mut self, label: impl Into<String>) -> Self {
        self.total_label = label.into();
        self
    }

    /// Reject settings that cannot describe a TableBuilder export
    pub fn validate(&self) -> Result<()> {
        if self.header_max_lines == 0 || self.footer_max_lines == 0 {
            return Err(TableBuilderError::Configuration {
                message: "metadata search windows must cover at least one line".to_string(),
            });
        }
        if self.flatten_separator.is_empty() {
            return Err(TableBuilderError::Configuration {
                message: "flatten separator must not be empty".to_string(),
            });
        }
        if self.total_label.is_empty() {
            return Err(TableBuilderError::Configuration {
                message: "total label must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
