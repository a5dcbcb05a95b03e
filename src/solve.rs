//! The backtracking solver that assigns line lengths.
//!
//! Lines are committed left to right. Each candidate length is checked
//! against the collision oracle; a collision turns into an exact growth
//! suggestion for the line one before the newcomer, and the solver steps
//! back to apply it, then re-walks forward. The state machine is
//! iterative on purpose: recursion depth would otherwise track the line
//! count.

use crate::{
    cache::line_start_index,
    collide::find_collider,
    error::SolveError,
    figure::{Figure, Line},
    Direction,
};
use log::{debug, trace};
use std::sync::atomic::{AtomicBool, Ordering};

// -----------------------------------------------------------------------------

/// Strategy used to assign line lengths.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum SolveMethod {
    /// Grow the line before a collision until the newcomer fits.
    #[default]
    GrowFromEnd,
    /// Grow lines from the start of the figure instead.
    ///
    /// Not implemented yet; solving with it returns
    /// [`SolveError::Unimplemented`].
    GrowFromStart,
}

/// Tunables for one solve.
#[derive(Clone, Copy, Debug)]
pub struct SolveOptions<'a> {
    /// Longest colliding line for which the analytic length jump is
    /// attempted; collisions on longer lines grow the previous line one
    /// step at a time instead. 0 disables the cap.
    ///
    /// Aggressive jumps on long lines tend to waste space, hence the
    /// cautious default of 1.
    pub perfection_threshold: u32,
    /// Highest line (exclusive) to solve, for partial solves. `None`
    /// solves the whole figure.
    pub max_line: Option<u32>,
    /// Strategy to solve with.
    pub method: SolveMethod,
    /// Flag polled once per solver iteration; raising it makes the solve
    /// return [`SolveError::Cancelled`], leaving lines below
    /// `solved_count` intact.
    pub cancel: Option<&'a AtomicBool>,
}

impl SolveOptions<'_> {
    /// Initializes solve options with the default tunables.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            perfection_threshold: 1,
            max_line: None,
            method: SolveMethod::GrowFromEnd,
            cancel: None,
        }
    }
}

impl Default for SolveOptions<'_> {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------

/// Solves every line in `[solved_count, max_line)`, in order.
pub(crate) fn plot<F>(
    figure: &mut Figure,
    options: &SolveOptions<'_>,
    progress: &mut F,
) -> Result<(), SolveError>
where
    F: FnMut(&Figure, u32, u32),
{
    if options.method == SolveMethod::GrowFromStart {
        return Err(SolveError::Unimplemented);
    }

    let target = options
        .max_line
        .map_or(figure.lines.len(), |max_line| {
            (max_line as usize).min(figure.lines.len())
        });

    for index in figure.solved_count as usize..target {
        resize(figure, index, 1, options)?;
        trace!("committed line {index} of {target}");
        progress(figure, index as u32, target as u32);
    }

    Ok(())
}

/// Sets the line at `index` to `length`, then fixes up the fallout.
///
/// Runs the `(current_index, current_length)` state machine: a collision
/// sends the suggested growth one line backward, a clean check below
/// `index` steps forward again with a fresh length of 1, and a clean
/// check at `index` commits the whole range.
pub(crate) fn resize(
    figure: &mut Figure,
    index: usize,
    length: u32,
    options: &SolveOptions<'_>,
) -> Result<(), SolveError> {
    debug_assert!(index < figure.lines.len(), "line index out of range");
    debug_assert!(length >= 1, "solved lines are at least 1 cell long");

    let mut current_index = index;
    let mut current_length = length;
    loop {
        if let Some(cancel) = options.cancel {
            if cancel.load(Ordering::Relaxed) {
                return Err(SolveError::Cancelled);
            }
        }

        figure.lines[current_index].set_length(current_length);
        figure.cache.invalidate(current_index);
        figure.cache.materialize(&figure.lines, current_index + 1)?;
        let collider =
            find_collider(&figure.lines, &figure.cache, current_index);
        figure.collider = collider;

        match collider {
            Some(collider) => {
                if current_index <= 1 {
                    // Only the anchor is left to grow, and it may not.
                    return Err(SolveError::Unsolvable);
                }
                current_length = suggest_resize(
                    figure,
                    current_index,
                    collider,
                    options.perfection_threshold,
                );
                debug!(
                    "line {current_index} hit line {collider}, growing line \
                     {} to {current_length}",
                    current_index - 1
                );
                current_index -= 1;
            }
            None if current_index < index => {
                // A collision further up was just resolved; re-attempt
                // the lines above with the updated predecessor context.
                current_index += 1;
                current_length = 1;
            }
            None => {
                figure.solved_count = index as u32 + 1;
                return Ok(());
            }
        }
    }
}

/// Suggests the length to grow the line before `index` to, after the
/// line at `index` collided with the line at `collider`.
///
/// When the previous line and the collided-with ("rigid") line are
/// parallel, the suggestion is exact: the perpendicular gap between the
/// two lines plus the rigid line's length plus one, which walks the
/// previous line strictly clear past the rigid one. Everything else gets
/// the pessimistic one-step growth.
///
/// Suggestions are not guaranteed collision-free themselves; the caller
/// re-evaluates after applying one.
fn suggest_resize(
    figure: &Figure,
    index: usize,
    collider: u32,
    perfection_threshold: u32,
) -> u32 {
    use Direction::{Down, Left, Right, Up};

    let lines: &[Line] = &figure.lines;
    let previous = lines[index - 1];

    if perfection_threshold > 0
        && lines[index].length() > perfection_threshold
    {
        return previous.length() + 1;
    }

    let rigid = lines[collider as usize];
    if !previous.direction().is_parallel_to(rigid.direction()) {
        return previous.length() + 1;
    }

    let cells = figure.cache.cells();
    let previous_start = cells[line_start_index(lines, index - 1)];
    let rigid_start_index = line_start_index(lines, collider as usize);
    let rigid_start = cells[rigid_start_index];
    let rigid_end = cells[rigid_start_index + rigid.length() as usize];

    let delta = match (previous.direction(), rigid.direction()) {
        (Up, Up) => rigid_start.y - previous_start.y,
        (Up, Down) => rigid_end.y - previous_start.y,
        (Right, Right) => rigid_start.x - previous_start.x,
        (Right, Left) => rigid_end.x - previous_start.x,
        (Down, Up) => previous_start.y - rigid_end.y,
        (Down, Down) => previous_start.y - rigid_start.y,
        (Left, Right) => previous_start.x - rigid_end.x,
        (Left, Left) => previous_start.x - rigid_start.x,
        // Unreachable behind the parallelism gate.
        _ => return previous.length() + 1,
    };

    let suggested = delta + i64::from(rigid.length()) + 1;
    u32::try_from(suggested)
        .ok()
        .filter(|&suggested| suggested >= 1)
        .unwrap_or(previous.length() + 1)
}

#[cfg(test)]
#[path = "./solve_tests.rs"]
mod tests;
