//! Format constants for ABS TableBuilder CSV exports
//!
//! Literal lines, regex fragments and default limits shared by the boundary
//! detector, wafer splitter and metadata decoder.

// =============================================================================
// Search Limits
// =============================================================================

/// Maximum candidate size (in lines) of the metadata header or footer.
///
/// Bounds the boundary search so the table body is never scanned as metadata.
pub const HEADER_FOOTER_MAX_EXTENT: usize = 20;

// =============================================================================
// Labels
// =============================================================================

/// Organisation line that opens every export
pub const AUTHORITY: &str = "Australian Bureau of Statistics";

/// Label TableBuilder uses for aggregate rows, columns and wafers
pub const TOTAL_LABEL: &str = "Total";

/// Separator used when flattening multi-level column labels
pub const FLATTEN_SEPARATOR: &str = "_";

/// Delimiter between a filter name and its value in `HeaderInfo::filters`
pub const FILTER_DELIMITER: &str = "==";

// =============================================================================
// Regex Patterns
// =============================================================================

/// Regex patterns describing the export layout
pub mod patterns {
    /// Anchored prefix grammar of the metadata header.
    ///
    /// Fixed literal lines interleaved with free-text lines, then a filter
    /// block of one or more non-empty lines closed by a blank line.
    pub const HEADER_METADATA: &str = concat!(
        "^",
        "Australian Bureau of Statistics\n",
        "\n",
        ".*\n",
        ".*\n",
        "\"Counting:.*\n",
        "\n",
        "Filters:\n",
        "(?:.+\n)+",
        "\n",
    );

    /// Header grammar with named capture groups for the metadata decoder.
    ///
    /// The trailing blank line is absent: header text is trimmed of
    /// surrounding newlines when it is detected.
    pub const HEADER_METADATA_CAPTURE: &str = concat!(
        "^",
        "(?P<authority>Australian Bureau of Statistics)\n",
        "\n",
        "\"(?P<dataset>.*)\"\n",
        "\"(?P<variables>.*)\"\n",
        "\"Counting: (?P<counting>.*)\"\n",
        "\n",
        "Filters:\n",
        "(?P<filters>(?:.*\n)+)",
    );

    /// Footer grammar, unanchored.
    ///
    /// Alternates over the 2016 and 2021 source-label variants.
    pub const FOOTER_METADATA: &str = concat!(
        "\"(?:Dataset|Data Source|Data source): Census of Population and Housing, (?:2016|2021), TableBuilder\"\n",
        "\n",
        "\"INFO\".*\n",
        "\n",
        "\n",
        "\"Copyright Commonwealth of Australia, .*\n",
        "\"ABS data licensed under Creative Commons.*\n",
    );

    /// Wafer title line: one quoted cell starting with a space, no commas
    pub const WAFER_TITLE: &str = r#"(?m)^" ([^,\n]*)"$"#;
}
