//! Error handling for TableBuilder parsing operations.
//!
//! Every failure is a local, synchronous fault over static text: there is no
//! retry or partial-result path, so each variant carries enough context
//! (scanned text, offending line, wafer title) to diagnose the input.

use std::fmt;
use thiserror::Error;

/// Which metadata region a boundary search was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Header,
    Footer,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Header => write!(f, "header"),
            Region::Footer => write!(f, "footer"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TableBuilderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No match could be found in {region} text:\n{scanned}\n pattern is:\n{pattern}")]
    BoundaryNotFound {
        region: Region,
        pattern: String,
        scanned: String,
    },

    #[error("Structural mismatch: {reason}")]
    StructuralMismatch { reason: String },

    #[error("Malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error("Unrecognized header metadata: {reason}")]
    UnrecognizedHeader { reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl TableBuilderError {
    pub(crate) fn structural(reason: impl Into<String>) -> Self {
        Self::StructuralMismatch {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn unrecognized_header(reason: impl Into<String>) -> Self {
        Self::UnrecognizedHeader {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TableBuilderError>;
