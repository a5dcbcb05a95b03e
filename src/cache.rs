//! Incremental materialisation of the cells a figure visits.
//!
//! Re-walking every line from the origin each time a length changes would
//! make the solver quadratic in practice. Instead the cache keeps the
//! visited cells of a trusted prefix of lines and only re-materialises
//! from the first changed line forward.

use crate::{error::AllocationError, figure::Line, Cell, ORIGIN};

// -----------------------------------------------------------------------------

/// Ordered cells visited by a prefix of a figure's lines.
///
/// The cache holds the origin followed by every cell each materialised
/// line steps onto; the joint cell between adjacent lines is stored
/// exactly once. `validity` is the number of leading lines whose cells
/// are trusted: anything beyond must be recomputed before use.
#[derive(Clone, Debug, Default)]
pub(crate) struct CoordCache {
    cells: Vec<Cell>,
    validity: usize,
}

impl CoordCache {
    /// Initializes a new, empty cache.
    pub(crate) const fn new() -> Self {
        Self {
            cells: Vec::new(),
            validity: 0,
        }
    }

    /// Returns the materialised cells.
    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the number of leading lines whose cells are trusted.
    pub(crate) const fn validity(&self) -> usize {
        self.validity
    }

    /// Marks the cells of `line` and everything after it as stale.
    pub(crate) fn invalidate(&mut self, line: usize) {
        self.validity = self.validity.min(line);
    }

    /// Ensures the cells of lines `[0, up_to)` are materialised.
    ///
    /// Returns immediately when the trusted prefix already covers
    /// `up_to`; otherwise drops stale cells and re-walks the remaining
    /// lines from the end of the trusted prefix.
    ///
    /// # Errors
    ///
    /// [`AllocationError`] when the cell buffer cannot grow.
    pub(crate) fn materialize(
        &mut self,
        lines: &[Line],
        up_to: usize,
    ) -> Result<(), AllocationError> {
        debug_assert!(up_to <= lines.len(), "line index out of range");

        if self.validity >= up_to {
            return Ok(());
        }

        self.cells.truncate(prefix_cell_count(lines, self.validity));

        let additional: usize = lines[self.validity..up_to]
            .iter()
            .map(|line| line.length() as usize)
            .sum::<usize>()
            + usize::from(self.cells.is_empty());
        self.cells.try_reserve(additional)?;

        if self.cells.is_empty() {
            self.cells.push(ORIGIN);
        }

        for line in &lines[self.validity..up_to] {
            let vector = line.direction().vector();
            let start = *self.cells.last().expect("cache seeded with origin");
            for step in 1..=line.length() {
                self.cells.push(start.offset(vector, step));
            }
        }

        self.validity = up_to;
        Ok(())
    }
}

/// Number of cells the first `line_count` lines occupy in the cache.
fn prefix_cell_count(lines: &[Line], line_count: usize) -> usize {
    if line_count == 0 {
        return 0;
    }
    1 + lines[..line_count]
        .iter()
        .map(|line| line.length() as usize)
        .sum::<usize>()
}

/// Cache index of the cell the line at `index` starts from.
///
/// The end of each line and the start of the next are the same cell, so
/// this is also the cache index of the previous line's endpoint.
pub(crate) fn line_start_index(lines: &[Line], index: usize) -> usize {
    lines[..index]
        .iter()
        .map(|line| line.length() as usize)
        .sum()
}

#[cfg(test)]
#[path = "./cache_tests.rs"]
mod tests;
