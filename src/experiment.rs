//! Brute-force solution-density experiments.
//!
//! The solver only ever finds *one* length assignment per turn sequence.
//! For studying how dense valid assignments are, this module exposes the
//! same validity predicate the solver relies on, plus an exhaustive sweep
//! over every assignment with lengths in {1, 2} (one bit per line, so a
//! sequence of `n` turns has 2ⁿ candidate solutions).

use crate::{
    cache::CoordCache,
    collide::find_collider,
    error::AllocationError,
    figure::{Figure, Line},
    Direction, Rotation,
};

/// Returns whether assigning `lengths` to the lines generated by `turns`
/// yields a self-avoiding figure.
///
/// The figure is anchored like any other: `lengths[i]` applies to the
/// line created by `turns[i]`, one line after the anchor. Lengths must
/// be in `1..=Line::MAX_LENGTH`.
///
/// # Errors
///
/// [`AllocationError`] when the figure buffers cannot be acquired.
pub fn is_solution_valid(
    turns: &[Rotation],
    lengths: &[u32],
) -> Result<bool, AllocationError> {
    debug_assert_eq!(turns.len(), lengths.len(), "one length per turn");
    debug_assert!(
        lengths
            .iter()
            .all(|&length| (1..=Line::MAX_LENGTH).contains(&length)),
        "candidate lengths must be at least 1"
    );

    let mut lines = lines_from_turns(turns)?;
    for (line, &length) in lines.iter_mut().skip(1).zip(lengths) {
        line.set_length(length);
    }

    let mut cache = CoordCache::new();
    figure_is_valid(&lines, &mut cache)
}

/// Counts the valid solutions among all 2ⁿ assignments of `turns`' lines
/// to lengths 1 or 2, most significant solution bit on the first line.
///
/// # Errors
///
/// [`AllocationError`] when the figure buffers cannot be acquired.
pub fn count_valid_solutions(
    turns: &[Rotation],
) -> Result<u64, AllocationError> {
    let n = turns.len();
    debug_assert!(n < 64, "exhaustive enumeration needs 2^n to fit a u64");

    let mut lines = lines_from_turns(turns)?;
    let mut cache = CoordCache::new();
    let mut count = 0;
    for solution in 0..(1_u64 << n) {
        for (index, line) in lines.iter_mut().skip(1).enumerate() {
            let bit = solution >> (n - 1 - index) & 1 == 1;
            line.set_length(1 + u32::from(bit));
        }
        cache.invalidate(0);
        count += u64::from(figure_is_valid(&lines, &mut cache)?);
    }

    Ok(count)
}

/// Checks every line of a fully assigned figure against the oracle,
/// materialising incrementally exactly as the solver does.
fn figure_is_valid(
    lines: &[Line],
    cache: &mut CoordCache,
) -> Result<bool, AllocationError> {
    for index in 0..lines.len() {
        cache.materialize(lines, index + 1)?;
        if find_collider(lines, cache, index).is_some() {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Builds the anchored line sequence of a turn sequence, all generated
/// lines 1 cell long.
fn lines_from_turns(turns: &[Rotation]) -> Result<Vec<Line>, AllocationError> {
    let mut lines = Vec::new();
    lines.try_reserve_exact(turns.len() + 1)?;
    lines.push(Line::new_unchecked(Direction::Up, Figure::ANCHOR_LENGTH));

    let mut current = Direction::Up;
    for &turn in turns {
        current = current.rotate(turn);
        lines.push(Line::new_unchecked(current, 1));
    }

    Ok(lines)
}

#[cfg(test)]
#[path = "./experiment_tests.rs"]
mod tests;
