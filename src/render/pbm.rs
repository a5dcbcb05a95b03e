//! Binary PBM (`P4`) encoding.

use super::Bitmap;
use crate::error::AllocationError;

/// Encodes a bitmap as a binary PBM file.
///
/// The header is the `P4` magic number and the decimal image dimensions,
/// each followed by a single whitespace byte; rows are then packed to the
/// nearest byte, most significant bit first, set pixel = black = 1.
pub(super) fn encode(bitmap: &Bitmap) -> Result<Vec<u8>, AllocationError> {
    let width_string = bitmap.width().to_string();
    let height_string = bitmap.height().to_string();

    let bytes_per_row = (bitmap.width() as usize + 7) / 8;
    let image_bytes = bytes_per_row * bitmap.height() as usize;
    let size = 3 // "P4" magic number + whitespace
        + width_string.len() + 1
        + height_string.len() + 1
        + image_bytes;

    let mut buffer = Vec::new();
    buffer.try_reserve_exact(size)?;

    buffer.extend_from_slice(b"P4\n");
    buffer.extend_from_slice(width_string.as_bytes());
    buffer.push(b'\n');
    buffer.extend_from_slice(height_string.as_bytes());
    buffer.push(b'\n');

    for y in 0..bitmap.height() {
        let row_start = buffer.len();
        buffer.resize(row_start + bytes_per_row, 0);
        for x in 0..bitmap.width() {
            if bitmap.get(x, y) {
                buffer[row_start + x as usize / 8] |= 0x80 >> (x % 8);
            }
        }
    }

    Ok(buffer)
}
