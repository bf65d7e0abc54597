use crate::consts;
use rand::Rng;

/// A location on the board, measured in board units from the top-left
/// corner.  Coordinates are signed so that a head that has run off the edge
/// of the board can still be represented.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Point {
    pub(crate) const ORIGIN: Point = Point { x: 0, y: 0 };

    pub(crate) const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    pub(crate) const fn offset(self, dx: i32, dy: i32) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The playing field: `width`×`height` board units divided into square cells
/// `unit` units on a side
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) unit: i32,
}

impl Board {
    pub(crate) const STANDARD: Board = Board {
        width: consts::BOARD_WIDTH,
        height: consts::BOARD_HEIGHT,
        unit: consts::UNIT_SIZE,
    };

    pub(crate) fn columns(self) -> i32 {
        self.width / self.unit
    }

    pub(crate) fn rows(self) -> i32 {
        self.height / self.unit
    }

    pub(crate) fn contains(self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Return the (column, row) of the cell containing `p`, or `None` if `p`
    /// is off the board
    pub(crate) fn cell_of(self, p: Point) -> Option<(u16, u16)> {
        if !self.contains(p) {
            return None;
        }
        let col = u16::try_from(p.x / self.unit).ok()?;
        let row = u16::try_from(p.y / self.unit).ok()?;
        Some((col, row))
    }

    /// Pick a cell uniformly at random and return its top-left corner
    pub(crate) fn random_cell<R: Rng>(self, rng: &mut R) -> Point {
        let col = rng.random_range(0..self.columns());
        let row = rng.random_range(0..self.rows());
        Point::new(col * self.unit, row * self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    #[test]
    fn standard_dimensions() {
        let board = Board::STANDARD;
        assert_eq!(board.columns(), 30);
        assert_eq!(board.rows(), 30);
    }

    #[rstest]
    #[case(Point::new(0, 0), true)]
    #[case(Point::new(580, 580), true)]
    #[case(Point::new(600, 0), false)]
    #[case(Point::new(0, 600), false)]
    #[case(Point::new(-20, 40), false)]
    #[case(Point::new(40, -20), false)]
    fn test_contains(#[case] p: Point, #[case] inside: bool) {
        assert_eq!(Board::STANDARD.contains(p), inside);
    }

    #[rstest]
    #[case(Point::new(0, 0), Some((0, 0)))]
    #[case(Point::new(40, 100), Some((2, 5)))]
    #[case(Point::new(580, 580), Some((29, 29)))]
    #[case(Point::new(600, 20), None)]
    #[case(Point::new(-20, 20), None)]
    fn test_cell_of(#[case] p: Point, #[case] cell: Option<(u16, u16)>) {
        assert_eq!(Board::STANDARD.cell_of(p), cell);
    }

    #[test]
    fn random_cells_are_aligned_and_on_board() {
        let board = Board::STANDARD;
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        for _ in 0..1000 {
            let p = board.random_cell(&mut rng);
            assert!(board.contains(p), "{p:?} is off the board");
            assert_eq!(p.x % board.unit, 0, "{p:?} is not aligned");
            assert_eq!(p.y % board.unit, 0, "{p:?} is not aligned");
        }
    }
}
