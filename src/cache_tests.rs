use super::*;
use crate::Direction;

fn lines(segments: &[(Direction, u32)]) -> Vec<Line> {
    segments.iter()
        .map(|&(direction, length)| Line::new_unchecked(direction, length))
        .collect()
}

// An anchor-only figure materialises to the 4 cells of the spine.
#[test]
fn materialize_anchor() {
    let lines = lines(&[(Direction::Up, 3)]);
    let mut cache = CoordCache::new();

    cache.materialize(&lines, 1).expect("materialise");

    assert_eq!(
        cache.cells(),
        &[
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(0, 3),
        ]
    );
    assert_eq!(cache.validity(), 1);
}

#[test]
fn materialize_empty() {
    let mut cache = CoordCache::new();

    cache.materialize(&[], 0).expect("materialise");

    assert!(cache.cells().is_empty());
    assert_eq!(cache.validity(), 0);
}

// Joint cells between adjacent lines are stored exactly once, so the
// cache size is the length sum plus one.
#[test]
fn materialize_shares_joints() {
    let lines = lines(&[
        (Direction::Up, 3),
        (Direction::Left, 2),
        (Direction::Down, 1),
    ]);
    let mut cache = CoordCache::new();

    cache.materialize(&lines, 3).expect("materialise");

    assert_eq!(cache.cells().len(), 3 + 2 + 1 + 1);
    assert_eq!(
        &cache.cells()[3..],
        &[
            Cell::new(0, 3),
            Cell::new(-1, 3),
            Cell::new(-2, 3),
            Cell::new(-2, 2),
        ]
    );
}

// Invalidating a line drops it and everything after it from the trusted
// prefix; re-materialising after a resize walks only the stale suffix.
#[test]
fn invalidate_and_rematerialize() {
    let mut lines = lines(&[
        (Direction::Up, 3),
        (Direction::Left, 1),
        (Direction::Down, 2),
    ]);
    let mut cache = CoordCache::new();
    cache.materialize(&lines, 3).expect("materialise");

    lines[1].set_length(2);
    cache.invalidate(1);
    assert_eq!(cache.validity(), 1);
    cache.materialize(&lines, 3).expect("re-materialise");

    // Same result as a from-scratch walk.
    let mut scratch = CoordCache::new();
    scratch.materialize(&lines, 3).expect("scratch");
    assert_eq!(cache.cells(), scratch.cells());
}

// Asking for an already-covered prefix is a no-op.
#[test]
fn materialize_covered_prefix() {
    let lines = lines(&[(Direction::Up, 3), (Direction::Right, 2)]);
    let mut cache = CoordCache::new();
    cache.materialize(&lines, 2).expect("materialise");
    let before = cache.cells().to_vec();

    cache.materialize(&lines, 1).expect("no-op");

    assert_eq!(cache.cells(), &*before);
    assert_eq!(cache.validity(), 2);
}

#[test]
fn line_start_indexes() {
    let lines = lines(&[
        (Direction::Up, 3),
        (Direction::Left, 2),
        (Direction::Down, 4),
    ]);

    assert_eq!(line_start_index(&lines, 0), 0);
    assert_eq!(line_start_index(&lines, 1), 3);
    assert_eq!(line_start_index(&lines, 2), 5);
}
