//! Forward-fill for sparse TableBuilder labels.
//!
//! TableBuilder writes a label once and leaves the following cells blank until
//! the value changes. The same rule applies across a column-header row and
//! down a row-index column, so both call sites share [`forward_fill`].

use std::ops::Range;

/// Direction in which a grid is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillDirection {
    /// Left to right along each row
    Across,
    /// Top to bottom down each column
    Down,
}

/// Replace every blank cell with the last non-blank value before it.
///
/// Leading blanks stay blank.
pub fn forward_fill<'a, I>(cells: I)
where
    I: IntoIterator<Item = &'a mut String>,
{
    let mut last: Option<String> = None;
    for cell in cells {
        if cell.is_empty() {
            if let Some(previous) = &last {
                cell.clone_from(previous);
            }
        } else {
            last = Some(cell.clone());
        }
    }
}

/// Forward-fill the given lanes of a grid.
///
/// With [`FillDirection::Across`] each lane is a row index; with
/// [`FillDirection::Down`] each lane is a column index.
pub fn fill_grid(grid: &mut [Vec<String>], direction: FillDirection, lanes: Range<usize>) {
    match direction {
        FillDirection::Across => {
            for row in grid.iter_mut().take(lanes.end).skip(lanes.start) {
                forward_fill(row.iter_mut());
            }
        }
        FillDirection::Down => {
            for column in lanes {
                forward_fill(grid.iter_mut().filter_map(|row| row.get_mut(column)));
            }
        }
    }
}
