use super::AllocationError;
use core::fmt;

/// Errors occurring while solving a figure's line lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SolveError {
    /// The coordinate cache could not grow.
    Allocation(AllocationError),
    /// Backtracking exhausted: clearing a collision would require growing
    /// the anchor. Not expected for bit-derived turn sequences.
    Unsolvable,
    /// The requested solve method is not implemented yet.
    Unimplemented,
    /// The cancellation flag was raised mid-solve. Lines below
    /// `solved_count` are intact; later lengths are scratch values.
    Cancelled,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Allocation(err) => write!(f, "{err}"),
            Self::Unsolvable => write!(f, "backtracking exhausted"),
            Self::Unimplemented => write!(f, "solve method not implemented"),
            Self::Cancelled => write!(f, "solve cancelled"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::Allocation(ref err) => Some(err),
            Self::Unsolvable | Self::Unimplemented | Self::Cancelled => None,
        }
    }
}

impl From<AllocationError> for SolveError {
    fn from(value: AllocationError) -> Self {
        Self::Allocation(value)
    }
}
