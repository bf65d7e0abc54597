use super::geometry::Point;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the point `unit` board units away from `pos` in this direction.
    /// The result may lie off the board.
    pub(crate) fn step(self, pos: Point, unit: i32) -> Point {
        match self {
            Direction::Up => pos.offset(0, -unit),
            Direction::Down => pos.offset(0, unit),
            Direction::Left => pos.offset(-unit, 0),
            Direction::Right => pos.offset(unit, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
