//! TableBuilder header metadata extraction.
//!
//! Decodes the metadata header (dataset, variables, counting description,
//! default summation and active filters) with a fixed-shape capture pattern.

use crate::constants::FILTER_DELIMITER;
use crate::constants::patterns::HEADER_METADATA_CAPTURE;
use crate::error::{Result, TableBuilderError};
use crate::tokenizer::{Cell, tokenize};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

static HEADER_CAPTURE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(HEADER_METADATA_CAPTURE).expect("valid header metadata regex")
});

/// Metadata extracted from a TableBuilder header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderInfo {
    /// Always "Australian Bureau of Statistics"
    pub authority: String,

    /// TableBuilder dataset name, e.g. "2016 Census - Counting Persons, Place of Usual Residence (MB)"
    pub dataset: String,

    /// Variables in the table and how they are crossed
    pub variables: String,

    /// Items being counted, without the "Counting: " prefix
    pub counting: String,

    /// Active filters as "name==value" clauses, in header order
    pub filters: Vec<String>,

    /// Default summation
    pub summation: String,
}

impl HeaderInfo {
    /// Decode header text as returned by the boundary detector.
    pub fn from_raw_text(text: &str) -> Result<Self> {
        let mut text = text.trim_matches('\n').to_string();
        text.push('\n');

        let captures = HEADER_CAPTURE_REGEX.captures(&text).ok_or_else(|| {
            TableBuilderError::unrecognized_header(format!(
                "header does not match the expected layout:\n{text}"
            ))
        })?;
        let group = |name: &str| {
            captures
                .name(name)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        // First line carries the default summation; any further lines are
        // active filters.
        let filters_block = group("filters");
        let mut filter_lines = filters_block.lines().filter(|line| !line.trim().is_empty());

        let summation_line = filter_lines.next().ok_or_else(|| {
            TableBuilderError::unrecognized_header("filters block has no default summation line")
        })?;
        let (_, summation) = quoted_pair(summation_line)?;

        let filters = filter_lines
            .map(filter_clause)
            .collect::<Result<Vec<_>>>()?;

        debug!("Decoded header metadata with {} active filters", filters.len());

        Ok(Self {
            authority: group("authority"),
            dataset: group("dataset"),
            variables: group("variables"),
            counting: group("counting"),
            filters,
            summation,
        })
    }

    /// Filters split back into (name, value) pairs
    pub fn filter_pairs(&self) -> Vec<(&str, &str)> {
        self.filters
            .iter()
            .filter_map(|clause| clause.split_once(FILTER_DELIMITER))
            .collect()
    }
}

/// Exactly two quoted spans on one line
fn quoted_pair(line: &str) -> Result<(String, String)> {
    let cells = tokenize(line)
        .map_err(|e| TableBuilderError::unrecognized_header(format!("{e} in filters block")))?;

    match <[Cell; 2]>::try_from(cells) {
        Ok([Cell::Quoted(first), Cell::Quoted(second)]) => Ok((first, second)),
        _ => Err(TableBuilderError::unrecognized_header(format!(
            "expected two quoted values in filters line: {line}"
        ))),
    }
}

/// Combine one filter line into a "name==value" clause
fn filter_clause(line: &str) -> Result<String> {
    let (name, value) = quoted_pair(line)?;
    if name.contains(FILTER_DELIMITER) {
        return Err(TableBuilderError::unrecognized_header(format!(
            "filter name '{name}' contains the '{FILTER_DELIMITER}' delimiter"
        )));
    }
    Ok(format!("{name}{FILTER_DELIMITER}{value}"))
}
