use super::*;
use crate::Rotation::{AntiClockwise, Clockwise};

#[test]
fn no_turns_is_valid() {
    assert_eq!(is_solution_valid(&[], &[]), Ok(true));
}

// Fewer than 4 lines cannot collide, so every assignment of up to two
// turns is valid.
#[test]
fn short_figures_are_always_valid() {
    assert_eq!(count_valid_solutions(&[AntiClockwise]), Ok(2));
    assert_eq!(count_valid_solutions(&[Clockwise, AntiClockwise]), Ok(4));
}

// Three anti-clockwise turns wind back towards the anchor's column: the
// returning line clears it only when the line leaving it was longer.
#[test]
fn tight_wind_filters_solutions() {
    let turns = [AntiClockwise, AntiClockwise, AntiClockwise];

    assert_eq!(is_solution_valid(&turns, &[2, 1, 1]), Ok(true));
    assert_eq!(is_solution_valid(&turns, &[2, 2, 1]), Ok(true));
    assert_eq!(is_solution_valid(&turns, &[1, 1, 1]), Ok(false));
    assert_eq!(is_solution_valid(&turns, &[1, 1, 2]), Ok(false));

    assert_eq!(count_valid_solutions(&turns), Ok(2));
}

// Mirrored turns accept mirrored solutions.
#[test]
fn mirror_symmetry() {
    let anti_clockwise = [AntiClockwise, AntiClockwise, AntiClockwise];
    let clockwise = [Clockwise, Clockwise, Clockwise];

    assert_eq!(
        count_valid_solutions(&anti_clockwise),
        count_valid_solutions(&clockwise)
    );
}
