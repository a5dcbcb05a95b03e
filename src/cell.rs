//! Integer lattice coordinates.
//!
//! Figures live on ℤ²: every visited position is a [`Cell`], and movement
//! between cells happens in whole steps of a cardinal unit [`Vector`].
//! Coordinates are 64-bit so that even a figure of 2³² lines, each at the
//! maximum length, cannot overflow them.

use std::{fmt, ops::Add};

// -----------------------------------------------------------------------------

/// A position on the integer grid.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// `x` component (grows rightward).
    pub x: i64,
    /// `y` component (grows upward).
    pub y: i64,
}

impl Cell {
    /// Initializes a new cell at the specified coordinates.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the cell reached after walking `steps` unit steps along
    /// `vector`.
    #[must_use]
    pub const fn offset(self, vector: Vector, steps: u32) -> Self {
        let steps = steps as i64;
        Self {
            x: self.x + vector.x * steps,
            y: self.y + vector.y * steps,
        }
    }
}

impl Add<Vector> for Cell {
    type Output = Self;

    fn add(self, rhs: Vector) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// -----------------------------------------------------------------------------

/// A displacement on the integer grid.
///
/// The four unit vectors are exposed through
/// [`Direction::vector`](crate::Direction::vector).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    /// `x` component.
    pub x: i64,
    /// `y` component.
    pub y: i64,
}

impl Vector {
    /// Initializes a new vector with the specified components.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
#[path = "./cell_tests.rs"]
mod tests;
