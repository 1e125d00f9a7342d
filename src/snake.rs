use std::collections::VecDeque;

use crate::grid::Position;
use crate::input::Direction;

/// Ordered snake body (head first) plus direction state.
///
/// The body is mutated exclusively by the tick in `game.rs`: new head pushed
/// at the front, tail popped at the back unless the snake just ate.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    /// Creates a snake of `length` segments with its head at `head`, the body
    /// trailing away opposite to `direction`.
    #[must_use]
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = VecDeque::with_capacity(length.max(1));
        let mut segment = head;
        body.push_back(segment);
        for _ in 1..length.max(1) {
            segment = segment.step(direction.opposite());
            body.push_back(segment);
        }

        Self {
            body,
            direction,
            pending_direction: direction,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_direction: direction,
        }
    }

    /// Records a direction change request for the next tick.
    ///
    /// A request that exactly reverses the current direction is ignored, and
    /// only the latest surviving request before a tick is honored.
    pub fn request_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.pending_direction = direction;
    }

    /// Promotes the pending request to the active direction and returns it.
    pub fn resolve_direction(&mut self) -> Direction {
        self.direction = self.pending_direction;
        self.direction
    }

    /// Pushes a new head segment.
    pub fn push_head(&mut self, position: Position) {
        self.body.push_front(position);
    }

    /// Drops the tail segment.
    pub fn pop_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Reverses the body end-for-end and inverts the travel direction, so the
    /// old tail leads and the snake retraces its own path.
    pub fn invert_course(&mut self) {
        let reversed: VecDeque<Position> = self.body.iter().rev().copied().collect();
        self.body = reversed;
        self.direction = self.direction.opposite();
        self.pending_direction = self.direction;
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body always holds at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Position;
    use crate::input::Direction;

    use super::Snake;

    #[test]
    fn new_snake_trails_behind_the_head() {
        let snake = Snake::new(Position { x: 3, y: 2 }, Direction::Right, 3);
        let body: Vec<Position> = snake.segments().copied().collect();

        assert_eq!(
            body,
            vec![
                Position { x: 3, y: 2 },
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
            ]
        );
    }

    #[test]
    fn reversal_request_is_ignored() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Up, 2);

        snake.request_direction(Direction::Down);

        assert_eq!(snake.resolve_direction(), Direction::Up);
    }

    #[test]
    fn latest_request_wins_within_a_tick() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Up, 2);

        snake.request_direction(Direction::Left);
        snake.request_direction(Direction::Right);

        assert_eq!(snake.resolve_direction(), Direction::Right);
    }

    #[test]
    fn reversal_of_a_pending_turn_is_still_relative_to_current_direction() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Up, 2);

        // Down reverses Up and is dropped even after Left was requested.
        snake.request_direction(Direction::Left);
        snake.request_direction(Direction::Down);

        assert_eq!(snake.resolve_direction(), Direction::Left);
    }

    #[test]
    fn invert_course_reverses_body_and_direction() {
        let mut snake = Snake::from_segments(
            vec![
                Position { x: 4, y: 2 },
                Position { x: 3, y: 2 },
                Position { x: 2, y: 2 },
            ],
            Direction::Right,
        );

        snake.invert_course();

        let body: Vec<Position> = snake.segments().copied().collect();
        assert_eq!(
            body,
            vec![
                Position { x: 2, y: 2 },
                Position { x: 3, y: 2 },
                Position { x: 4, y: 2 },
            ]
        );
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn head_overlap_detection_skips_the_head_itself() {
        let snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 3, y: 2 },
                Position { x: 3, y: 3 },
                Position { x: 2, y: 3 },
                Position { x: 2, y: 2 },
            ],
            Direction::Up,
        );

        assert!(snake.head_overlaps_body());
    }
}
