use rand::{rngs::SmallRng, Rng as _, SeedableRng as _};
use std::collections::HashSet;
use sxbp::{Cell, Figure, SolveOptions};

fn is_self_avoiding(figure: &Figure) -> bool {
    let cells: Vec<Cell> = figure.cells().collect();
    let distinct: HashSet<Cell> = cells.iter().copied().collect();

    cells.len() == distinct.len()
}

// Disabling the perfection threshold and capping it both have to produce
// valid figures; only the compactness may differ.
#[test]
fn perfection_thresholds_all_solve() {
    for threshold in [0, 1, 2] {
        let mut figure = Figure::from_data(&[0x53, 0x58]).expect("figure");
        let options = SolveOptions {
            perfection_threshold: threshold,
            ..SolveOptions::new()
        };

        figure.solve(&options).expect("solvable");

        assert!(figure.is_solved(), "threshold {threshold}");
        assert!(is_self_avoiding(&figure), "threshold {threshold}");
    }
}

// The solved prefix only ever grows, one line at a time.
#[test]
fn solved_count_is_monotone() {
    let mut figure = Figure::from_data(&[0xb7]).expect("figure");
    let mut previous = figure.solved_count();

    figure
        .solve_with_progress(&SolveOptions::new(), |figure, _, _| {
            assert!(figure.solved_count() >= previous);
            previous = figure.solved_count();
        })
        .expect("solvable");

    assert_eq!(figure.solved_count(), 9);
}

// Random inputs sweep: every 2-byte figure the generator throws at us
// must solve to a self-avoiding shape.
#[test]
fn random_inputs_solve() {
    let mut rng = SmallRng::seed_from_u64(0x5358_4250);

    for _ in 0..64 {
        let data: [u8; 2] = rng.random();
        let mut figure = Figure::from_data(&data).expect("figure");

        figure.solve(&SolveOptions::new()).expect("solvable");

        assert!(figure.is_solved(), "input {data:02x?}");
        assert!(is_self_avoiding(&figure), "input {data:02x?}");
    }
}

// Solving with an unresolvable method surfaces the stub error rather
// than silently doing nothing.
#[test]
fn grow_from_start_stub() {
    use sxbp::SolveMethod;

    let mut figure = Figure::from_data(&[0x01]).expect("figure");
    let options = SolveOptions {
        method: SolveMethod::GrowFromStart,
        ..SolveOptions::new()
    };

    assert!(figure.solve(&options).is_err());
    assert_eq!(figure.solved_count(), 1, "nothing was committed");
}
