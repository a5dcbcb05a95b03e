use sxbp::{Figure, SolveOptions};

#[test]
fn roundtrip_solved_figure() {
    let mut original = Figure::from_data(b"SXBP").expect("figure");
    original.solve(&SolveOptions::new()).expect("solvable");

    let data = original.dump().expect("dump");
    let restored = Figure::load(&data).expect("load");

    assert_eq!(restored.lines(), original.lines());
    assert!(restored.is_solved());
}

// A dump taken mid-solve can be loaded and finished later, and ends up
// identical to an uninterrupted solve.
#[test]
fn resume_from_partial_dump() {
    let mut partial = Figure::from_data(&[0x58, 0x42]).expect("figure");
    let options = SolveOptions {
        max_line: Some(9),
        ..SolveOptions::new()
    };
    partial.solve(&options).expect("solvable");
    let data = partial.dump().expect("dump");

    let mut resumed = Figure::load(&data).expect("load");
    assert_eq!(resumed.solved_count(), 9);
    resumed.solve(&SolveOptions::new()).expect("solvable");

    let mut uninterrupted = Figure::from_data(&[0x58, 0x42]).expect("figure");
    uninterrupted.solve(&SolveOptions::new()).expect("solvable");
    assert_eq!(resumed.lines(), uninterrupted.lines());
}

#[test]
fn load_rejects_garbage() {
    assert!(Figure::load(b"").is_err());
    assert!(Figure::load(b"not a figure at all").is_err());
}
