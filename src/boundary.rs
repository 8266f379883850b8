//! Metadata boundary detection.
//!
//! Locates the metadata header at the start of a document and the metadata
//! footer at its end. Each search is confined to a window of at most
//! `window` lines, so the body is never scanned as metadata.

use crate::error::{Region, Result, TableBuilderError};
use regex::Regex;
use tracing::debug;

/// A metadata region found by the detector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    /// Matched metadata text, surrounding newlines trimmed
    pub text: String,

    /// For a header: byte offset where the body starts, counted from the
    /// start of the document. For a footer: non-positive offset where the
    /// body ends, counted back from the end of the document.
    pub offset: isize,
}

/// Match `pattern` anchored at the start of the first `window` lines.
///
/// `lines` must be newline-terminated, as produced by the reader.
pub fn detect_header(lines: &[String], window: usize, pattern: &Regex) -> Result<Boundary> {
    let region: String = lines.iter().take(window).map(String::as_str).collect();

    let found = pattern
        .find(&region)
        .filter(|m| m.start() == 0)
        .ok_or_else(|| TableBuilderError::BoundaryNotFound {
            region: Region::Header,
            pattern: pattern.as_str().to_string(),
            scanned: region.clone(),
        })?;

    debug!("Header matched {} bytes of a {} byte window", found.end(), region.len());

    Ok(Boundary {
        text: found.as_str().trim_matches('\n').to_string(),
        offset: found.end() as isize,
    })
}

/// Search for `pattern` anywhere in the last `window` lines.
///
/// The footer's position inside the window is not fixed, because trailing
/// blank line counts vary between format versions. The returned offset
/// covers everything from the start of the match to the end of the document.
pub fn detect_footer(lines: &[String], window: usize, pattern: &Regex) -> Result<Boundary> {
    let skip = lines.len().saturating_sub(window);
    let region: String = lines[skip..].iter().map(String::as_str).collect();

    let found = pattern
        .find(&region)
        .ok_or_else(|| TableBuilderError::BoundaryNotFound {
            region: Region::Footer,
            pattern: pattern.as_str().to_string(),
            scanned: region.clone(),
        })?;

    let offset = found.start() as isize - region.len() as isize;
    debug!("Footer matched at {} bytes from the end of the document", -offset);

    Ok(Boundary {
        text: found.as_str().trim_matches('\n').to_string(),
        offset,
    })
}

/// Slice the body out of the full document text using both boundaries
pub fn body_between<'a>(full_text: &'a str, header: &Boundary, footer: &Boundary) -> Result<&'a str> {
    let start = header.offset as usize;
    let end = (full_text.len() as isize + footer.offset) as usize;

    if start > end {
        return Err(TableBuilderError::structural(format!(
            "header ends at byte {start} but footer starts at byte {end}"
        )));
    }

    Ok(full_text[start..end].trim_matches('\n'))
}
