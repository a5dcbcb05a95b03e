//! SVG encoding.

use super::Bitmap;
use core::fmt;

/// Lazily renders a bitmap as an SVG document, one rect per horizontal
/// run of set pixels.
pub(super) struct Svg<'a>(pub(super) &'a Bitmap);

impl fmt::Display for Svg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bitmap = self.0;
        let (width, height) = (bitmap.width(), bitmap.height());

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" shape-rendering="crispEdges">"#
        )?;
        writeln!(f, r#"<rect width="100%" height="100%" fill="white"/>"#)?;

        for y in 0..height {
            let mut x = 0;
            while x < width {
                if bitmap.get(x, y) {
                    let run_start = x;
                    while x < width && bitmap.get(x, y) {
                        x += 1;
                    }
                    writeln!(
                        f,
                        r#"<rect x="{run_start}" y="{y}" width="{}" height="1" fill="black"/>"#,
                        x - run_start
                    )?;
                } else {
                    x += 1;
                }
            }
        }

        write!(f, "</svg>")
    }
}
