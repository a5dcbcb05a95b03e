//! Rasterisation of solved figures.
//!
//! A solved figure is turned into a monochrome bitmap with one pixel per
//! visited cell and a one-cell border, `y` flipped so the anchor points
//! towards the top of the image. Encoders to PBM (P4) and SVG operate on
//! the bitmap.

mod pbm;
mod svg;

use crate::{
    error::{AllocationError, RenderError},
    figure::Figure,
};

// -----------------------------------------------------------------------------

/// A monochrome raster image, row-major, top row first.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl Bitmap {
    /// Returns the width of the image, in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image, in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns whether the pixel at `(x, y)` is set, `(0, 0)` being the
    /// top-left corner.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> bool {
        debug_assert!(x < self.width && y < self.height, "pixel out of range");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    fn set(&mut self, x: u32, y: u32) {
        debug_assert!(x < self.width && y < self.height, "pixel out of range");
        self.pixels[y as usize * self.width as usize + x as usize] = true;
    }

    /// Encodes the image as a binary PBM (`P4`) file.
    ///
    /// # Errors
    ///
    /// [`AllocationError`] when the output buffer cannot be acquired.
    pub fn to_pbm(&self) -> Result<Vec<u8>, AllocationError> {
        pbm::encode(self)
    }

    /// Encodes the image as an SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        svg::Svg(self).to_string()
    }
}

// -----------------------------------------------------------------------------

/// Rasterises a fully solved figure.
pub(crate) fn rasterise(figure: &Figure) -> Result<Bitmap, RenderError> {
    if figure.line_count() == 0 {
        return Err(RenderError::Empty);
    }
    if !figure.is_solved() {
        return Err(RenderError::Incomplete);
    }

    // The walk starts at the origin, so the bounds always contain it.
    let (mut min_x, mut max_x, mut min_y, mut max_y) = (0_i64, 0, 0, 0);
    for cell in figure.cells() {
        min_x = min_x.min(cell.x);
        max_x = max_x.max(cell.x);
        min_y = min_y.min(cell.y);
        max_y = max_y.max(cell.y);
    }

    // One pixel per cell, plus the border on each side.
    let width = u32::try_from(max_x - min_x + 3)
        .map_err(|_| RenderError::TooLarge)?;
    let height = u32::try_from(max_y - min_y + 3)
        .map_err(|_| RenderError::TooLarge)?;
    let size = (width as usize)
        .checked_mul(height as usize)
        .ok_or(RenderError::TooLarge)?;

    let mut pixels = Vec::new();
    pixels.try_reserve_exact(size).map_err(AllocationError::from)?;
    pixels.resize(size, false);

    let mut bitmap = Bitmap {
        width,
        height,
        pixels,
    };
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "bounded by the computed dimensions"
    )]
    for cell in figure.cells() {
        let x = (cell.x - min_x + 1) as u32;
        let y = (max_y - cell.y + 1) as u32;
        bitmap.set(x, y);
    }

    Ok(bitmap)
}
