use crate::input::Direction;

/// Logical grid dimensions, including the reserved info-bar strip.
///
/// The top `info_bar_rows` rows of the grid are occupied by the score bar and
/// are off-limits to gameplay; entering them ends the round the same way a
/// wall does.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
    pub info_bar_rows: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the number of cells the snake can actually occupy.
    #[must_use]
    pub fn playable_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height.saturating_sub(self.info_bar_rows))
    }

    /// Returns the first playable row index (the row just below the info bar).
    #[must_use]
    pub fn playfield_top(self) -> i32 {
        i32::from(self.info_bar_rows)
    }
}

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the adjacent cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }

    /// Returns true when the position lies inside the playable field,
    /// excluding the info-bar strip.
    #[must_use]
    pub fn in_playfield(self, grid: GridSize) -> bool {
        self.x >= 0
            && self.x < i32::from(grid.width)
            && self.y >= grid.playfield_top()
            && self.y < i32::from(grid.height)
    }
}
