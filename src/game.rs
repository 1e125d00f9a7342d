use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{
    BASE_TICKS_PER_SECOND, BONUS_SPAWN_ODDS, POINTS_BONUS, POINTS_PER_SPEED_STEP, POINTS_REGULAR,
    START_LENGTH,
};
use crate::food::{BonusFood, Food};
use crate::grid::{GridSize, Position};
use crate::input::Direction;
use crate::snake::Snake;

/// Whether the round continues after a tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickStatus {
    Running,
    RoundOver { final_score: u32 },
}

/// Signals emitted by a tick for the presentation layer (sparkles, audio
/// cues). Never read back by the simulation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickEvent {
    AteRegular { position: Position },
    AteBonus { position: Position },
    SpeedIncreased { ticks_per_second: u32 },
    BonusSpawned { position: Position },
    BonusExpired,
}

/// Outcome of one simulation tick.
#[derive(Debug, Clone)]
pub struct TickResult {
    pub status: TickStatus,
    pub events: Vec<TickEvent>,
}

/// Complete mutable state for one round of play.
///
/// Owned by the playing screen; the renderer only ever borrows it.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub snake: Snake,
    pub food: Food,
    pub bonus_food: Option<BonusFood>,
    pub score: u32,
    pub ticks_per_second: u32,
    pub tick_count: u64,
    grid: GridSize,
    wrap_mode: bool,
    /// Body as it stood before the last tick, kept for interpolation only.
    prev_body: Vec<Position>,
    rng: StdRng,
}

impl RoundState {
    /// Creates a fresh round with an entropy-seeded RNG.
    #[must_use]
    pub fn new(grid: GridSize, wrap_mode: bool) -> Self {
        Self::with_rng(grid, wrap_mode, StdRng::from_entropy())
    }

    /// Creates a deterministic round for tests and reproducible play.
    #[must_use]
    pub fn new_with_seed(grid: GridSize, wrap_mode: bool, seed: u64) -> Self {
        Self::with_rng(grid, wrap_mode, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: GridSize, wrap_mode: bool, mut rng: StdRng) -> Self {
        let head = Position {
            x: i32::try_from(START_LENGTH).unwrap_or(3),
            y: grid.playfield_top(),
        };
        let snake = Snake::new(head, Direction::Right, START_LENGTH);
        let food = Food::spawn(&mut rng, grid, &snake).unwrap_or(Food::at(head));
        let prev_body = snake.segments().copied().collect();

        Self {
            snake,
            food,
            bonus_food: None,
            score: 0,
            ticks_per_second: BASE_TICKS_PER_SECOND,
            tick_count: 0,
            grid,
            wrap_mode,
            prev_body,
            rng,
        }
    }

    /// Forwards a direction-change request to the snake.
    pub fn request_direction(&mut self, direction: Direction) {
        self.snake.request_direction(direction);
    }

    /// Advances the simulation by one fixed tick.
    ///
    /// Check order is load-bearing: walls end the round before the body is
    /// extended, and self-collision is judged only after the tail-pop
    /// decision, so the head may legally move into the cell the tail is
    /// vacating this very tick.
    pub fn tick(&mut self) -> TickResult {
        let mut events = Vec::new();
        self.tick_count += 1;
        self.prev_body = self.snake.segments().copied().collect();

        let direction = self.snake.resolve_direction();
        let next_head = self.snake.head().step(direction);

        if !next_head.in_playfield(self.grid) {
            return TickResult {
                status: TickStatus::RoundOver {
                    final_score: self.score,
                },
                events,
            };
        }

        self.snake.push_head(next_head);

        let mut ate = false;
        if next_head == self.food.position {
            ate = true;
            self.score += POINTS_REGULAR;
            events.push(TickEvent::AteRegular {
                position: next_head,
            });
            if self.score % POINTS_PER_SPEED_STEP == 0 {
                self.ticks_per_second += 1;
                events.push(TickEvent::SpeedIncreased {
                    ticks_per_second: self.ticks_per_second,
                });
            }
            match Food::spawn(&mut self.rng, self.grid, &self.snake) {
                Some(food) => self.food = food,
                // Snake covers the whole playfield; the round is complete.
                None => {
                    return TickResult {
                        status: TickStatus::RoundOver {
                            final_score: self.score,
                        },
                        events,
                    };
                }
            }
        }

        // Independent of the ordinary-food check: when the bonus shares the
        // ordinary food's cell, both are credited in the same tick.
        if let Some(bonus) = self.bonus_food {
            if next_head == bonus.position {
                ate = true;
                self.score += POINTS_BONUS;
                events.push(TickEvent::AteBonus {
                    position: next_head,
                });
                self.bonus_food = None;
            }
        }

        if !ate {
            self.snake.pop_tail();
        } else {
            // Align the retained body for interpolation by duplicating the
            // previous tail, mirroring the growth at the other end.
            if let Some(tail) = self.prev_body.last().copied() {
                self.prev_body.push(tail);
            }
            if self.wrap_mode {
                self.snake.invert_course();
            }
        }

        match self.bonus_food.as_mut() {
            Some(bonus) => {
                if bonus.tick_lifespan() {
                    self.bonus_food = None;
                    events.push(TickEvent::BonusExpired);
                }
            }
            None => {
                if self.rng.gen_range(0..BONUS_SPAWN_ODDS) == 0 {
                    if let Some(bonus) = BonusFood::spawn(&mut self.rng, self.grid, &self.snake) {
                        events.push(TickEvent::BonusSpawned {
                            position: bonus.position,
                        });
                        self.bonus_food = Some(bonus);
                    }
                }
            }
        }

        if self.snake.head_overlaps_body() {
            return TickResult {
                status: TickStatus::RoundOver {
                    final_score: self.score,
                },
                events,
            };
        }

        TickResult {
            status: TickStatus::Running,
            events,
        }
    }

    /// Returns the fixed interval between ticks at the current rate.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.ticks_per_second.max(1)))
    }

    /// Body as it stood before the last tick, for interpolation.
    #[must_use]
    pub fn previous_body(&self) -> &[Position] {
        &self.prev_body
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn wrap_mode(&self) -> bool {
        self.wrap_mode
    }
}
