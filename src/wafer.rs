//! Wafer splitting.
//!
//! A TableBuilder export with a wafer dimension stacks one table per wafer
//! value in the body, each preceded by a title line such as
//! `" Labourers"`: a single quoted cell starting with a space and holding no
//! commas.

use crate::constants::patterns::WAFER_TITLE;
use crate::error::{Result, TableBuilderError};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static WAFER_TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WAFER_TITLE).expect("valid wafer title regex"));

/// One titled table inside a multi-wafer body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaferSection<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

/// Partition a body into titled wafer sections.
///
/// Returns an empty list when the body has no wafer titles; the caller then
/// treats the whole body as a single table. Text before the first title is
/// discarded (it is empty for well-formed documents, since anything before
/// the first wafer belongs to the metadata header).
pub fn split_wafers(body: &str) -> Result<Vec<WaferSection<'_>>> {
    let titles: Vec<_> = WAFER_TITLE_REGEX.captures_iter(body).collect();

    let mut sections = Vec::with_capacity(titles.len());
    for (i, captures) in titles.iter().enumerate() {
        let (Some(whole), Some(title)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        let end = titles
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(body.len(), |next| next.start());

        let section_body = body[whole.end()..end].trim_matches('\n');
        if section_body.trim().is_empty() {
            return Err(TableBuilderError::structural(format!(
                "Malformed or failure, more wafer titles than bodies (wafer '{}' has no body)",
                title.as_str()
            )));
        }

        sections.push(WaferSection {
            title: title.as_str(),
            body: section_body,
        });
    }

    debug!("Found {} wafers in body", sections.len());
    Ok(sections)
}
