use std::collections::HashSet;
use sxbp::{Cell, Figure, SolveOptions};

fn assert_self_avoiding(figure: &Figure) {
    let cells: Vec<Cell> = figure.cells().collect();
    let distinct: HashSet<Cell> = cells.iter().copied().collect();

    assert_eq!(cells.len(), distinct.len(), "a cell was visited twice");
}

// A figure of one byte per cardinal wind solves to a 9-line shape.
#[test]
fn single_byte_figures_solve() {
    for byte in [0x00, 0xff, 0x53, 0xa5] {
        let mut figure = Figure::from_data(&[byte]).expect("figure");

        figure.solve(&SolveOptions::new()).expect("solvable");

        assert_eq!(figure.line_count(), 9, "byte {byte:#04x}");
        assert!(figure.is_solved(), "byte {byte:#04x}");
        assert_self_avoiding(&figure);
    }
}

// The flagship input: 4 bytes, 33 lines, and a fully deterministic
// solution.
#[test]
fn sxbp_input_solves() {
    let mut figure = Figure::from_data(b"SXBP").expect("figure");

    figure.solve(&SolveOptions::new()).expect("solvable");

    assert_eq!(figure.line_count(), 33);
    assert!(figure.is_solved());
    assert!(figure.lines().iter().all(|line| line.length() >= 1));
    assert_self_avoiding(&figure);

    // Same input, same rule, same lengths.
    let mut again = Figure::from_data(b"SXBP").expect("figure");
    again.solve(&SolveOptions::new()).expect("solvable");
    assert_eq!(figure.lines(), again.lines());
}

// The cells walk matches a from-scratch reconstruction of the polyline.
#[test]
fn cells_walk_is_consistent() {
    let mut figure = Figure::from_data(&[0xc3]).expect("figure");
    figure.solve(&SolveOptions::new()).expect("solvable");

    let mut expected = vec![Cell::new(0, 0)];
    let mut position = Cell::new(0, 0);
    for line in figure.lines() {
        for _ in 0..line.length() {
            position = position + line.direction().vector();
            expected.push(position);
        }
    }

    assert_eq!(figure.cells().collect::<Vec<_>>(), expected);
}

// Total visited cells = sum of lengths + 1: adjacent lines share their
// joint.
#[test]
fn cells_share_joints() {
    let mut figure = Figure::from_data(&[0x2e]).expect("figure");
    figure.solve(&SolveOptions::new()).expect("solvable");

    let length_sum: u32 =
        figure.lines().iter().map(|line| line.length()).sum();

    assert_eq!(figure.cells().count(), length_sum as usize + 1);
}
