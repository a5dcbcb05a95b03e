use sxbp::{Figure, SolveOptions};

fn solved(data: &[u8]) -> Figure {
    let mut figure = Figure::from_data(data).expect("figure");
    figure.solve(&SolveOptions::new()).expect("solvable");
    figure
}

// Every set pixel comes from a visited cell, so the pixel count matches
// the cell count.
#[test]
fn bitmap_pixel_count() {
    let figure = solved(&[0x42]);
    let bitmap = figure.rasterise().expect("rasterise");

    let set = (0..bitmap.height())
        .flat_map(|y| (0..bitmap.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| bitmap.get(x, y))
        .count();

    assert_eq!(set, figure.cells().count());
}

// The border is guaranteed clear on all four sides.
#[test]
fn bitmap_border_is_clear() {
    let bitmap = solved(&[0x50]).rasterise().expect("rasterise");

    for x in 0..bitmap.width() {
        assert!(!bitmap.get(x, 0), "top border");
        assert!(!bitmap.get(x, bitmap.height() - 1), "bottom border");
    }
    for y in 0..bitmap.height() {
        assert!(!bitmap.get(0, y), "left border");
        assert!(!bitmap.get(bitmap.width() - 1, y), "right border");
    }
}

#[test]
fn pbm_header() {
    let bitmap = solved(&[0x53]).rasterise().expect("rasterise");

    let pbm = bitmap.to_pbm().expect("encode");

    let expected =
        format!("P4\n{}\n{}\n", bitmap.width(), bitmap.height());
    assert!(pbm.starts_with(expected.as_bytes()));
}

#[test]
fn svg_is_well_formed() {
    let bitmap = solved(&[0x53]).rasterise().expect("rasterise");

    let svg = bitmap.to_svg();

    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<svg ").count(), 1);
    assert!(svg.contains(&format!(
        r#"viewBox="0 0 {} {}""#,
        bitmap.width(),
        bitmap.height()
    )));
}
