use super::AllocationError;
use crate::Version;
use core::fmt;

/// Errors occurring while deserialising a figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
#[allow(
    variant_size_differences,
    reason = "AllocationError carries layout info needed for diagnostics"
)]
pub enum LoadError {
    /// The buffer is too small to hold a header.
    HeaderTooSmall,
    /// The header does not start with the format's magic bytes.
    BadMagic,
    /// The data was written by an incompatible version of the format.
    UnsupportedVersion(Version),
    /// The body size does not match the line count declared in the
    /// header, or the count is not addressable.
    BadDataSize,
    /// The line buffer could not be acquired.
    Allocation(AllocationError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::HeaderTooSmall => write!(f, "header too small"),
            Self::BadMagic => write!(f, "bad magic number"),
            Self::UnsupportedVersion(version) => {
                write!(f, "unsupported data version {version}")
            }
            Self::BadDataSize => write!(f, "bad data section size"),
            Self::Allocation(err) => write!(f, "{err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::Allocation(ref err) => Some(err),
            Self::HeaderTooSmall
            | Self::BadMagic
            | Self::UnsupportedVersion(_)
            | Self::BadDataSize => None,
        }
    }
}

impl From<AllocationError> for LoadError {
    fn from(value: AllocationError) -> Self {
        Self::Allocation(value)
    }
}
