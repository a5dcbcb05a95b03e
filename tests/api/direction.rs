use sxbp::{Direction, Rotation, Vector};

#[test]
fn try_from_u8() {
    assert!(Direction::try_from(0).is_ok(), "lower bound");
    assert!(Direction::try_from(2).is_ok(), "valid value");
    assert!(Direction::try_from(3).is_ok(), "upper bound");

    assert!(Direction::try_from(4).is_err(), "out of range");
}

#[test]
fn into_u8() {
    assert_eq!(u8::from(Direction::Up), 0, "lower bound");
    assert_eq!(u8::from(Direction::Down), 2, "valid value");
    assert_eq!(u8::from(Direction::Left), 3, "upper bound");
}

#[test]
fn iter() {
    let directions = Direction::iter().collect::<Vec<_>>();

    assert_eq!(
        directions,
        vec![
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ]
    );
}

#[test]
fn rotate() {
    assert_eq!(
        Direction::Up.rotate(Rotation::Clockwise),
        Direction::Right
    );
    assert_eq!(
        Direction::Up.rotate(Rotation::AntiClockwise),
        Direction::Left
    );
}

// Unit vectors are, in fact, unit.
#[test]
fn vector() {
    for direction in Direction::iter() {
        let Vector { x, y } = direction.vector();

        assert_eq!(x.abs() + y.abs(), 1, "{direction}");
    }
}

#[test]
fn display() {
    assert_eq!(Direction::Up.to_string(), "up");
    assert_eq!(Rotation::AntiClockwise.to_string(), "anti-clockwise");
}
