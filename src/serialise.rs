//! Binary serialisation of figures.
//!
//! The format is deliberately dumb: a fixed header (magic bytes, the
//! format version triple, a big-endian line count) followed by one packed
//! word per line. Lengths fit 30 bits, so a direction rides in the two
//! most significant bits of each word.

use crate::{
    error::{AllocationError, LoadError},
    figure::{Figure, Line},
    Direction, VERSION,
};
use core::fmt;
use log::debug;

/// Magic bytes identifying the format.
const MAGIC: [u8; 4] = *b"sxbp";

/// Size, in bytes, of the file header.
const HEADER_SIZE: usize = MAGIC.len() + 3 + 8;

/// Size, in bytes, of one packed line.
const LINE_PACK_SIZE: usize = 4;

/// Offset (in bits) of the direction in a packed line.
const DIRECTION_OFFSET: u32 = 30;
// Bitmask to select the length bits in a packed line.
const LENGTH_MASK: u32 = (1 << DIRECTION_OFFSET) - 1;

// -----------------------------------------------------------------------------

/// A version of the serialised figure format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Version {
    /// Major version: bumped on incompatible format changes.
    pub major: u8,
    /// Minor version: bumped on compatible extensions.
    pub minor: u8,
    /// Patch version.
    pub patch: u8,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

// -----------------------------------------------------------------------------

/// Packs a line into its serialised word.
const fn pack_line(line: Line) -> u32 {
    (line.direction() as u32) << DIRECTION_OFFSET | line.length()
}

/// Unpacks a line from its serialised word.
#[allow(clippy::cast_possible_truncation, reason = "masked to 2 bits")]
const fn unpack_line(bits: u32) -> Line {
    let direction = Direction::new_unchecked((bits >> DIRECTION_OFFSET) as u8);
    Line::new_unchecked(direction, bits & LENGTH_MASK)
}

/// Serialises a figure.
pub(crate) fn dump(figure: &Figure) -> Result<Vec<u8>, AllocationError> {
    let size = HEADER_SIZE + figure.lines.len() * LINE_PACK_SIZE;
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(size)?;

    buffer.extend_from_slice(&MAGIC);
    buffer.extend_from_slice(&[VERSION.major, VERSION.minor, VERSION.patch]);
    buffer.extend_from_slice(&(figure.lines.len() as u64).to_be_bytes());
    for line in &figure.lines {
        buffer.extend_from_slice(&pack_line(*line).to_be_bytes());
    }

    debug!("dumped {} lines ({size} bytes)", figure.lines.len());
    Ok(buffer)
}

/// Deserialises a figure.
pub(crate) fn load(data: &[u8]) -> Result<Figure, LoadError> {
    if data.len() < HEADER_SIZE {
        return Err(LoadError::HeaderTooSmall);
    }
    if data[..MAGIC.len()] != MAGIC {
        return Err(LoadError::BadMagic);
    }

    let version = Version {
        major: data[4],
        minor: data[5],
        patch: data[6],
    };
    if version.major != VERSION.major {
        return Err(LoadError::UnsupportedVersion(version));
    }

    let declared =
        u64::from_be_bytes(data[7..HEADER_SIZE].try_into().expect("8 bytes"));
    // Line indexes must stay addressable by a 32-bit step index.
    let count = usize::try_from(declared)
        .ok()
        .filter(|&count| u32::try_from(count).is_ok())
        .ok_or(LoadError::BadDataSize)?;

    let body = &data[HEADER_SIZE..];
    let body_size = count
        .checked_mul(LINE_PACK_SIZE)
        .ok_or(LoadError::BadDataSize)?;
    if body.len() != body_size {
        return Err(LoadError::BadDataSize);
    }

    let mut lines = Vec::new();
    lines.try_reserve_exact(count).map_err(AllocationError::from)?;
    for word in body.chunks_exact(LINE_PACK_SIZE) {
        let bits = u32::from_be_bytes(word.try_into().expect("4-byte chunk"));
        lines.push(unpack_line(bits));
    }

    debug!("loaded {count} lines (format version {version})");
    Ok(Figure::from_lines(lines))
}

#[cfg(test)]
#[path = "./serialise_tests.rs"]
mod tests;
