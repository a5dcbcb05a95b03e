//! The figure model: lines and the figure that owns them.

use crate::{
    cache::CoordCache,
    error::{AllocationError, InitError, InvalidLength, LoadError, RenderError, SolveError},
    render, serialise, solve, Bitmap, Cell, Direction, Rotation, SolveOptions,
    BITS_PER_BYTE, ORIGIN,
};
use either::Either;
use std::iter;

// -----------------------------------------------------------------------------

/// One segment of a figure: a direction and a length.
///
/// A length of 0 means the line has not been solved yet; solved lines are
/// always at least 1 cell long.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    direction: Direction,
    length: u32,
}

impl Line {
    /// Largest representable line length (30 bits).
    pub const MAX_LENGTH: u32 = (1 << 30) - 1;

    /// Initializes a new line.
    ///
    /// # Errors
    ///
    /// [`InvalidLength`] when `length` exceeds [`Self::MAX_LENGTH`].
    pub const fn new(
        direction: Direction,
        length: u32,
    ) -> Result<Self, InvalidLength> {
        if length > Self::MAX_LENGTH {
            return Err(InvalidLength::new(length, "exceeds 30 bits"));
        }
        Ok(Self { direction, length })
    }

    /// Initializes a new line using a length that may be out of range.
    pub(crate) const fn new_unchecked(direction: Direction, length: u32) -> Self {
        debug_assert!(length <= Self::MAX_LENGTH, "length out of range");
        Self { direction, length }
    }

    /// Returns the direction the line points in.
    #[must_use]
    pub const fn direction(self) -> Direction {
        self.direction
    }

    /// Returns the length of the line, in cells.
    #[must_use]
    pub const fn length(self) -> u32 {
        self.length
    }

    /// Returns `true` once a length has been committed.
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.length != 0
    }

    pub(crate) fn set_length(&mut self, length: u32) {
        debug_assert!(length <= Self::MAX_LENGTH, "length out of range");
        self.length = length;
    }
}

// -----------------------------------------------------------------------------

/// A self-avoiding orthogonal polyline built from input binary data.
///
/// The first line, the *anchor*, is always `(Up, 3)` and gives every
/// figure a canonical orientation. The directions of all later lines are
/// fixed at construction by the input bits; their lengths start at 0 and
/// are assigned by [`solve`](Self::solve).
#[derive(Clone, Debug, Default)]
pub struct Figure {
    pub(crate) lines: Vec<Line>,
    pub(crate) cache: CoordCache,
    pub(crate) solved_count: u32,
    /// Earliest line hit by the most recent collision check, if it was
    /// positive.
    pub(crate) collider: Option<u32>,
}

impl Figure {
    /// Length of the anchor line.
    pub(crate) const ANCHOR_LENGTH: u32 = 3;

    /// Initializes a new figure with no lines at all.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Initializes a new figure from input binary data.
    ///
    /// Every bit of `data`, most-significant first, contributes one line:
    /// a 0 bit turns anti-clockwise from the previous direction, a 1 bit
    /// clockwise. The anchor line is prepended, so the figure has
    /// `8 * data.len() + 1` lines, all unsolved except the anchor.
    ///
    /// # Errors
    ///
    /// [`InitError::TooManyTurns`] when the line count would not fit a
    /// 32-bit step index, [`InitError::Allocation`] when the line buffer
    /// cannot be acquired.
    pub fn from_data(data: &[u8]) -> Result<Self, InitError> {
        let line_count = data.len() * BITS_PER_BYTE + 1;
        if u32::try_from(line_count).is_err() {
            return Err(InitError::TooManyTurns(data.len()));
        }

        let mut lines = Vec::new();
        lines.try_reserve_exact(line_count).map_err(AllocationError::from)?;
        lines.push(Line::new_unchecked(Direction::Up, Self::ANCHOR_LENGTH));

        let mut current = Direction::Up;
        for byte in data {
            for bit in (0..BITS_PER_BYTE).rev() {
                let rotation = if byte >> bit & 1 == 0 {
                    Rotation::AntiClockwise
                } else {
                    Rotation::Clockwise
                };
                current = current.rotate(rotation);
                lines.push(Line::new_unchecked(current, 0));
            }
        }

        Ok(Self {
            lines,
            cache: CoordCache::new(),
            // The anchor is pre-solved.
            solved_count: 1,
            collider: None,
        })
    }

    /// Returns the number of lines in the figure.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the lines of the figure, in drawing order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns the index of the first line whose length has not been
    /// committed yet.
    #[must_use]
    pub const fn solved_count(&self) -> u32 {
        self.solved_count
    }

    /// Returns `true` once every line has a committed length.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved_count as usize == self.lines.len()
    }

    /// Returns `true` when the most recent collision check was positive.
    #[must_use]
    pub const fn collides(&self) -> bool {
        self.collider.is_some()
    }

    /// Returns the earliest line involved in the most recent collision,
    /// if the check was positive.
    #[must_use]
    pub const fn collider(&self) -> Option<u32> {
        self.collider
    }

    /// Iterates over every cell the figure visits, walking unit steps
    /// from the origin.
    ///
    /// Cells shared by adjacent lines are yielded exactly once, so a
    /// solved figure visits each yielded cell exactly once.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        if self.lines.is_empty() {
            return Either::Left(iter::empty());
        }

        let mut position = ORIGIN;
        Either::Right(iter::once(ORIGIN).chain(self.lines.iter().flat_map(
            move |line| {
                let vector = line.direction().vector();
                let start = position;
                position = start.offset(vector, line.length());
                (1..=line.length()).map(move |step| start.offset(vector, step))
            },
        )))
    }

    /// Assigns a length to every unsolved line, in order, such that the
    /// figure never crosses itself.
    ///
    /// Already-solved figures return immediately with unchanged lengths.
    ///
    /// # Errors
    ///
    /// See [`SolveError`].
    pub fn solve(&mut self, options: &SolveOptions<'_>) -> Result<(), SolveError> {
        solve::plot(self, options, &mut |_, _, _| {})
    }

    /// Like [`solve`](Self::solve), invoking `progress` after every
    /// committed line with the figure, the latest line index and the
    /// target line index.
    ///
    /// The callback must treat the figure as read-only.
    ///
    /// # Errors
    ///
    /// See [`SolveError`].
    pub fn solve_with_progress<F>(
        &mut self,
        options: &SolveOptions<'_>,
        mut progress: F,
    ) -> Result<(), SolveError>
    where
        F: FnMut(&Self, u32, u32),
    {
        solve::plot(self, options, &mut progress)
    }

    /// Serialises the figure to its binary representation.
    ///
    /// # Errors
    ///
    /// [`AllocationError`] when the output buffer cannot be acquired.
    pub fn dump(&self) -> Result<Vec<u8>, AllocationError> {
        serialise::dump(self)
    }

    /// Deserialises a figure from its binary representation.
    ///
    /// Partially solved figures load with `solved_count` restored, so a
    /// solve can resume where it stopped.
    ///
    /// # Errors
    ///
    /// See [`LoadError`].
    pub fn load(data: &[u8]) -> Result<Self, LoadError> {
        serialise::load(data)
    }

    /// Rasterises a fully solved figure to a monochrome bitmap, one pixel
    /// per visited cell with a one-cell border.
    ///
    /// # Errors
    ///
    /// See [`RenderError`].
    pub fn rasterise(&self) -> Result<Bitmap, RenderError> {
        render::rasterise(self)
    }

    /// Rebuilds a figure from its lines, as read from a serialised dump.
    pub(crate) fn from_lines(lines: Vec<Line>) -> Self {
        let solved_count = lines
            .iter()
            .take_while(|line| line.is_solved())
            .count()
            .try_into()
            .unwrap_or(u32::MAX);

        Self {
            lines,
            cache: CoordCache::new(),
            solved_count,
            collider: None,
        }
    }
}

#[cfg(test)]
#[path = "./figure_tests.rs"]
mod tests;
