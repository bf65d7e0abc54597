use super::direction::Direction;
use super::geometry::Point;
use std::collections::VecDeque;

/// The snake: a head followed by a chain of body segments.
///
/// The head is segment 0; `body[0]` is segment 1, and so on back to the tail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    pub(super) head: Point,

    /// The positions of the rest of the snake, nearest the head first
    pub(super) body: VecDeque<Point>,

    /// The direction in which the snake will move on the next tick
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a snake of `len` segments all stacked on `origin`, facing in
    /// `direction`.  The segments fan out as the snake moves.
    pub(crate) fn new(origin: Point, len: usize, direction: Direction) -> Snake {
        Snake {
            head: origin,
            body: std::iter::repeat_n(origin, len.saturating_sub(1)).collect(),
            direction,
        }
    }

    pub(crate) fn head(&self) -> Point {
        self.head
    }

    /// Return the positions of all segments after the head
    pub(crate) fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Face the snake in `direction` unless that would send it straight back
    /// into itself.  Returns whether the turn was accepted.
    pub(crate) fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    /// Shift every segment into its predecessor's place and move the head
    /// `unit` board units onwards.  Returns the position vacated by the
    /// tail.
    pub(crate) fn advance(&mut self, unit: i32) -> Option<Point> {
        self.body.push_front(self.head);
        self.head = self.direction.step(self.head, unit);
        self.body.pop_back()
    }

    /// Grow by one segment placed at `tail`, normally the position just
    /// returned by [`Snake::advance()`]
    pub(crate) fn grow(&mut self, tail: Point) {
        self.body.push_back(tail);
    }

    /// Has the head run into some other segment?
    pub(crate) fn bites_itself(&self) -> bool {
        self.body.contains(&self.head)
    }
}

#[cfg(test)]
impl Snake {
    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterate over every segment, head first
    pub(crate) fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snake_is_stacked() {
        let snake = Snake::new(Point::ORIGIN, 6, Direction::Right);
        assert_eq!(snake.len(), 6);
        assert!(snake.segments().all(|p| p == Point::ORIGIN));
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn advance_shifts_segments() {
        let mut snake = Snake {
            head: Point::new(60, 40),
            body: VecDeque::from([Point::new(40, 40), Point::new(20, 40)]),
            direction: Direction::Down,
        };
        let tail = snake.advance(20);
        assert_eq!(tail, Some(Point::new(20, 40)));
        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            [Point::new(60, 60), Point::new(60, 40), Point::new(40, 40)]
        );
    }

    #[test]
    fn advance_then_grow() {
        let mut snake = Snake::new(Point::ORIGIN, 3, Direction::Right);
        let tail = snake.advance(20);
        snake.grow(tail.unwrap());
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Point::new(20, 0));
    }

    #[test]
    fn single_segment_advance() {
        let mut snake = Snake::new(Point::new(100, 100), 1, Direction::Up);
        assert_eq!(snake.advance(20), Some(Point::new(100, 100)));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Point::new(100, 80));
        assert!(snake.body().is_empty());
    }

    #[test]
    fn reversal_is_refused() {
        let mut snake = Snake::new(Point::ORIGIN, 6, Direction::Right);
        assert!(!snake.turn(Direction::Left));
        assert_eq!(snake.direction(), Direction::Right);
        assert!(snake.turn(Direction::Up));
        assert_eq!(snake.direction(), Direction::Up);
        assert!(!snake.turn(Direction::Down));
        assert!(snake.turn(Direction::Left));
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn bites_itself() {
        let mut snake = Snake {
            head: Point::new(20, 20),
            body: VecDeque::from([
                Point::new(40, 20),
                Point::new(40, 40),
                Point::new(20, 40),
                Point::new(0, 40),
            ]),
            direction: Direction::Down,
        };
        assert!(!snake.bites_itself());
        let _ = snake.advance(20);
        assert!(snake.bites_itself());
    }
}
