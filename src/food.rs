use rand::Rng;

use crate::config::BONUS_LIFESPAN_TICKS;
use crate::grid::{GridSize, Position};
use crate::snake::Snake;

/// Attempts at random placement before falling back to a linear sweep.
/// Keeps placement O(1) on sparse boards and bounded on dense ones.
const MAX_SAMPLE_ATTEMPTS: usize = 512;

/// The ordinary food item. Exactly one exists for the whole round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Places ordinary food on a snake-free cell.
    ///
    /// Returns `None` when the snake covers the entire playfield.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: GridSize, snake: &Snake) -> Option<Self> {
        free_cell(rng, grid, snake).map(Self::at)
    }
}

/// The timed bonus item. At most one exists at a time.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BonusFood {
    pub position: Position,
    pub remaining_ticks: u32,
}

impl BonusFood {
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self {
            position,
            remaining_ticks: BONUS_LIFESPAN_TICKS,
        }
    }

    /// Places a fresh bonus on a snake-free cell. The ordinary food's cell is
    /// deliberately not excluded; the two items may coincide.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: GridSize, snake: &Snake) -> Option<Self> {
        free_cell(rng, grid, snake).map(Self::at)
    }

    /// Counts down one tick of lifespan. Returns `true` once expired.
    pub fn tick_lifespan(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks == 0
    }
}

/// Picks a playable cell not occupied by the snake.
///
/// Rejection-samples random cells first; when the board is too dense for that
/// to land quickly, sweeps the playfield for the first free cell. `None` means
/// the snake occupies every playable cell.
#[must_use]
pub fn free_cell<R: Rng + ?Sized>(rng: &mut R, grid: GridSize, snake: &Snake) -> Option<Position> {
    let top = grid.playfield_top();

    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let candidate = Position {
            x: rng.gen_range(0..i32::from(grid.width)),
            y: rng.gen_range(top..i32::from(grid.height)),
        };
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    for y in top..i32::from(grid.height) {
        for x in 0..i32::from(grid.width) {
            let candidate = Position { x, y };
            if !snake.occupies(candidate) {
                return Some(candidate);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::BONUS_LIFESPAN_TICKS;
    use crate::grid::{GridSize, Position};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::{free_cell, BonusFood, Food};

    const GRID: GridSize = GridSize {
        width: 8,
        height: 6,
        info_bar_rows: 2,
    };

    #[test]
    fn food_never_lands_on_the_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::new(Position { x: 4, y: 3 }, Direction::Right, 3);

        for _ in 0..200 {
            let food = Food::spawn(&mut rng, GRID, &snake).expect("board has free cells");
            assert!(!snake.occupies(food.position));
            assert!(food.position.in_playfield(GRID));
        }
    }

    #[test]
    fn food_never_lands_in_the_info_bar() {
        let mut rng = StdRng::seed_from_u64(11);
        let snake = Snake::new(Position { x: 4, y: 3 }, Direction::Right, 1);

        for _ in 0..200 {
            let cell = free_cell(&mut rng, GRID, &snake).expect("board has free cells");
            assert!(cell.y >= GRID.playfield_top());
        }
    }

    #[test]
    fn near_full_board_finds_the_remaining_cell() {
        let grid = GridSize {
            width: 3,
            height: 3,
            info_bar_rows: 1,
        };
        // Fill every playable cell except (2, 2).
        let segments = vec![
            Position { x: 0, y: 1 },
            Position { x: 1, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 2, y: 2 },
            Position { x: 1, y: 2 },
        ];
        let snake = Snake::from_segments(segments, Direction::Down);
        let mut rng = StdRng::seed_from_u64(3);

        let cell = free_cell(&mut rng, grid, &snake).expect("one free cell remains");

        assert_eq!(cell, Position { x: 0, y: 2 });
    }

    #[test]
    fn full_board_yields_no_cell() {
        let grid = GridSize {
            width: 2,
            height: 2,
            info_bar_rows: 1,
        };
        let snake = Snake::from_segments(
            vec![Position { x: 0, y: 1 }, Position { x: 1, y: 1 }],
            Direction::Left,
        );
        let mut rng = StdRng::seed_from_u64(5);

        assert_eq!(free_cell(&mut rng, grid, &snake), None);
    }

    #[test]
    fn bonus_lifespan_counts_down_to_expiry() {
        let mut bonus = BonusFood::at(Position { x: 1, y: 2 });

        for _ in 0..BONUS_LIFESPAN_TICKS - 1 {
            assert!(!bonus.tick_lifespan());
        }
        assert!(bonus.tick_lifespan());
    }
}
