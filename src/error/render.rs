use super::AllocationError;
use core::fmt;

/// Errors occurring while rasterising a figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RenderError {
    /// The figure has no lines to draw.
    Empty,
    /// The figure still has unsolved lines.
    Incomplete,
    /// The figure's bounding box exceeds the bitmap's addressable size.
    TooLarge,
    /// The pixel buffer could not be acquired.
    Allocation(AllocationError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Empty => write!(f, "figure has no lines"),
            Self::Incomplete => write!(f, "figure is not fully solved"),
            Self::TooLarge => write!(f, "figure too large to rasterise"),
            Self::Allocation(err) => write!(f, "{err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::Allocation(ref err) => Some(err),
            Self::Empty | Self::Incomplete | Self::TooLarge => None,
        }
    }
}

impl From<AllocationError> for RenderError {
    fn from(value: AllocationError) -> Self {
        Self::Allocation(value)
    }
}
