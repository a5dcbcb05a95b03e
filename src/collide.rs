//! Collision detection for the most recently changed line.
//!
//! The oracle assumes every line before `index` is already known not to
//! collide, so only the cells of the line at `index` (the cache tail)
//! need to be checked against the earlier cells (the cache head).

use crate::{cache::CoordCache, figure::Line};

/// Decides whether the line at `index` collides with an earlier line.
///
/// Returns the index of the *earliest* such line. The cache must be
/// materialised exactly through the line at `index`, so that the cache
/// tail is that line's cells.
///
/// The head walk keeps a running line counter driven by a per-line TTL:
/// the first line owns its length + 1 cells (it includes the origin),
/// every later line owns exactly its length, since the joint cell is
/// stored once. Scanning the head in order means the first coordinate
/// match is against the earliest line.
pub(crate) fn find_collider(
    lines: &[Line],
    cache: &CoordCache,
    index: usize,
) -> Option<u32> {
    debug_assert!(index < lines.len(), "line index out of range");
    debug_assert!(cache.validity() == index + 1, "cache not materialised");

    // Fewer than 4 lines cannot self-intersect.
    if lines.len() < 4 {
        return None;
    }

    let cells = cache.cells();
    let tail_len = lines[index].length() as usize + 1;
    let (head, tail) = cells.split_at(cells.len() - tail_len);

    let mut line_count: u32 = 0;
    let mut ttl = lines[0].length() + 1;
    for cell in head {
        if tail.contains(cell) {
            return Some(line_count);
        }
        ttl -= 1;
        if ttl == 0 {
            line_count += 1;
            ttl = lines[line_count as usize].length();
        }
        // The two lines directly before the tail sit in its backward
        // corner and can never reach it.
        if line_count as usize == lines.len() - 3 {
            break;
        }
    }

    None
}

#[cfg(test)]
#[path = "./collide_tests.rs"]
mod tests;
