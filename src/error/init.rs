use super::AllocationError;
use core::fmt;

/// Errors occurring while building a figure from input binary data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InitError {
    /// The input would produce more lines than a 32-bit step index can
    /// address. Holds the offending byte count.
    TooManyTurns(usize),
    /// The line buffer could not be acquired.
    Allocation(AllocationError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::TooManyTurns(bytes) => {
                write!(f, "{bytes} bytes of input is more turns than a figure can hold")
            }
            Self::Allocation(err) => write!(f, "{err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::TooManyTurns(_) => None,
            Self::Allocation(ref err) => Some(err),
        }
    }
}

impl From<AllocationError> for InitError {
    fn from(value: AllocationError) -> Self {
        Self::Allocation(value)
    }
}
