//! Labelled table axes.
//!
//! An axis holds one named `Series` per level, outermost level first, so a
//! two-level column axis such as region × sex is two aligned series. Levels
//! start out as text and may be cast to integers level by level.

use crate::error::{Result, TableBuilderError};
use polars::prelude::*;

/// Labels along one axis of a table, one named series per level
#[derive(Debug, Clone)]
pub struct AxisLabels {
    levels: Vec<Series>,
}

impl AxisLabels {
    /// Build text levels from dimension names and per-level label lists
    pub fn from_levels<S: AsRef<str>>(names: &[S], levels: Vec<Vec<String>>) -> Result<Self> {
        if names.len() != levels.len() {
            return Err(TableBuilderError::structural(format!(
                "{} level names given for {} label levels",
                names.len(),
                levels.len()
            )));
        }

        let series = names
            .iter()
            .zip(levels)
            .map(|(name, values)| Series::new(name.as_ref().into(), values))
            .collect();
        Self::from_series(series)
    }

    /// Build an axis from existing series, which must all have equal length
    pub fn from_series(levels: Vec<Series>) -> Result<Self> {
        let Some(first) = levels.first() else {
            return Err(TableBuilderError::structural("an axis needs at least one level"));
        };
        if let Some(ragged) = levels.iter().find(|level| level.len() != first.len()) {
            return Err(TableBuilderError::structural(format!(
                "axis level '{}' has {} labels, expected {}",
                ragged.name(),
                ragged.len(),
                first.len()
            )));
        }
        Ok(Self { levels })
    }

    /// A single unnamed level
    pub fn flat(values: Vec<String>) -> Self {
        Self {
            levels: vec![Series::new(PlSmallStr::EMPTY, values)],
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.levels
            .iter()
            .map(|level| level.name().to_string())
            .collect()
    }

    pub fn nlevels(&self) -> usize {
        self.levels.len()
    }

    pub fn len(&self) -> usize {
        self.levels.first().map_or(0, |level| level.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_multi_level(&self) -> bool {
        self.levels.len() > 1
    }

    pub fn levels(&self) -> &[Series] {
        &self.levels
    }

    pub fn level(&self, i: usize) -> Option<&Series> {
        self.levels.get(i)
    }

    /// Whether a level holds integer labels
    pub fn is_integer_level(&self, i: usize) -> bool {
        self.level(i).is_some_and(|level| level.dtype().is_integer())
    }

    /// Labels of one level rendered as text
    pub fn level_values(&self, i: usize) -> Result<Vec<String>> {
        match self.level(i) {
            Some(level) => series_strings(level),
            None => Err(TableBuilderError::structural(format!(
                "axis has no level {i}"
            ))),
        }
    }

    /// Full label tuple at every position
    pub fn tuples(&self) -> Result<Vec<Vec<String>>> {
        let levels = self
            .levels
            .iter()
            .map(series_strings)
            .collect::<Result<Vec<_>>>()?;

        Ok((0..self.len())
            .map(|pos| levels.iter().map(|level| level[pos].clone()).collect())
            .collect())
    }

    /// Position of a full label tuple
    pub fn position<S: AsRef<str>>(&self, label: &[S]) -> Result<Option<usize>> {
        if label.len() != self.nlevels() {
            return Ok(None);
        }
        Ok(self.tuples()?.iter().position(|tuple| {
            tuple
                .iter()
                .zip(label)
                .all(|(have, want)| have == want.as_ref())
        }))
    }

    /// Positions whose outermost label equals `label`
    pub fn outer_positions(&self, label: &str) -> Result<Vec<usize>> {
        Ok(self
            .level_values(0)?
            .iter()
            .enumerate()
            .filter(|(_, value)| value.as_str() == label)
            .map(|(pos, _)| pos)
            .collect())
    }

    /// Whether any position's outermost label equals `label`
    pub fn contains(&self, label: &str) -> Result<bool> {
        Ok(!self.outer_positions(label)?.is_empty())
    }

    /// Labels joined level by level into single strings
    pub fn flattened(&self, separator: &str) -> Result<Vec<String>> {
        Ok(self
            .tuples()?
            .into_iter()
            .map(|tuple| tuple.join(separator).trim().to_string())
            .collect())
    }

    /// Keep the positions where `keep` is true
    pub(crate) fn retain(&self, keep: &[bool]) -> Result<Self> {
        let mask = BooleanChunked::from_slice(PlSmallStr::from_static("keep"), keep);
        let levels = self
            .levels
            .iter()
            .map(|level| level.filter(&mask))
            .collect::<PolarsResult<Vec<_>>>()?;
        Ok(Self { levels })
    }

    /// Cast each text level whose labels all parse as integers to Int64.
    ///
    /// Levels that do not parse are left as text; this is not an error.
    pub(crate) fn with_integer_levels(self) -> Result<Self> {
        let levels = self
            .levels
            .into_iter()
            .map(|level| {
                if level.dtype().is_integer() {
                    return Ok(level);
                }
                let parsed = series_strings(&level)?
                    .iter()
                    .map(|value| value.parse::<i64>())
                    .collect::<std::result::Result<Vec<_>, _>>();
                Ok(match parsed {
                    Ok(values) => Series::new(level.name().clone(), values),
                    Err(_) => level,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { levels })
    }
}

impl PartialEq for AxisLabels {
    fn eq(&self, other: &Self) -> bool {
        self.nlevels() == other.nlevels()
            && self.levels.iter().zip(&other.levels).all(|(a, b)| {
                a.name() == b.name()
                    && a.dtype() == b.dtype()
                    && matches!(
                        (series_strings(a), series_strings(b)),
                        (Ok(x), Ok(y)) if x == y
                    )
            })
    }
}

/// Render every value of a series as text, nulls as empty strings
pub(crate) fn series_strings(series: &Series) -> Result<Vec<String>> {
    let text = series.cast(&DataType::String)?;
    Ok(text
        .str()?
        .into_iter()
        .map(|value| value.unwrap_or_default().to_string())
        .collect())
}
