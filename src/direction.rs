//! Cardinal directions and rotations.

use crate::{error, Vector};
use std::fmt;

/// Maximum value for a direction.
const MAX: u8 = 3;

/// Unit vector for each direction, indexed by numerical value.
const UNIT_VECTORS: [Vector; 4] = [
    Vector::new(0, 1),
    Vector::new(1, 0),
    Vector::new(0, -1),
    Vector::new(-1, 0),
];

// -----------------------------------------------------------------------------

/// One of the four cardinal directions a line can point in.
///
/// Directions are numbered clockwise so that adding ±1 (mod 4) rotates by
/// 90°:
///
/// ```text
///         0
///         ↑
///     3 ←   → 1
///         ↓
///         2
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(u8)]
#[allow(clippy::exhaustive_enums, reason = "the plane only has 4 of them")]
#[cfg_attr(
    feature = "serde",
    derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr)
)]
pub enum Direction {
    /// Towards positive `y`.
    Up = 0,
    /// Towards positive `x`.
    Right = 1,
    /// Towards negative `y`.
    Down = 2,
    /// Towards negative `x`.
    Left = 3,
}

impl Direction {
    /// Iterates over the directions, in clockwise order starting from
    /// [`Up`](Self::Up).
    ///
    /// # Example
    ///
    /// ```
    /// use sxbp::Direction;
    ///
    /// let directions = Direction::iter().collect::<Vec<_>>();
    /// ```
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..=MAX).map(Self::new_unchecked)
    }

    /// Returns the unit vector of one step in this direction.
    #[must_use]
    pub const fn vector(self) -> Vector {
        UNIT_VECTORS[self as usize]
    }

    /// Returns the direction faced after turning once in the given
    /// rotational direction.
    #[must_use]
    pub const fn rotate(self, rotation: Rotation) -> Self {
        Self::new_unchecked((self as i8 + rotation as i8).rem_euclid(4) as u8)
    }

    /// Returns `true` when both directions lie on the same axis.
    #[must_use]
    pub const fn is_parallel_to(self, other: Self) -> bool {
        (self as u8) % 2 == (other as u8) % 2
    }

    /// Initializes a new [`Direction`] using a value that may be out of
    /// range.
    #[allow(unsafe_code, reason = "infallible thanks to the range assert")]
    pub(crate) const fn new_unchecked(value: u8) -> Self {
        assert!(value <= MAX, "direction out of range");
        // SAFETY: range checked above.
        unsafe { std::mem::transmute::<u8, Self>(value) }
    }
}

impl TryFrom<u8> for Direction {
    type Error = error::InvalidDirection;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Up),
            1 => Ok(Self::Right),
            2 => Ok(Self::Down),
            3 => Ok(Self::Left),
            _ => Err(Self::Error::new(value, "out of range")),
        }
    }
}

impl From<Direction> for u8 {
    fn from(value: Direction) -> Self {
        value as Self
    }
}

impl From<Direction> for usize {
    fn from(value: Direction) -> Self {
        u8::from(value).into()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        };
        write!(f, "{name}")
    }
}

// -----------------------------------------------------------------------------

/// A rotational direction: one quarter turn, either way.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(i8)]
#[allow(clippy::exhaustive_enums, reason = "there is no third way to turn")]
#[cfg_attr(
    feature = "serde",
    derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr)
)]
pub enum Rotation {
    /// Quarter turn clockwise.
    Clockwise = 1,
    /// Quarter turn anti-clockwise.
    AntiClockwise = -1,
}

impl Rotation {
    /// Returns the opposite rotational direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::AntiClockwise,
            Self::AntiClockwise => Self::Clockwise,
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::Clockwise => "clockwise",
            Self::AntiClockwise => "anti-clockwise",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
#[path = "./direction_tests.rs"]
mod tests;
