use ratatui::style::Color;

use crate::grid::GridSize;

/// Default arcade grid: 32×18 cells with a two-row score strip at the top.
pub const GRID: GridSize = GridSize {
    width: 32,
    height: 18,
    info_bar_rows: 2,
};

/// Starting snake length in segments.
pub const START_LENGTH: usize = 3;

/// Base simulation rate in ticks per second.
pub const BASE_TICKS_PER_SECOND: u32 = 10;

/// Points granted for ordinary food.
pub const POINTS_REGULAR: u32 = 10;

/// Points granted for bonus food.
pub const POINTS_BONUS: u32 = 50;

/// The tick rate rises by one whenever the score lands on a multiple of this.
pub const POINTS_PER_SPEED_STEP: u32 = 50;

/// Bonus food lifespan in simulation ticks.
pub const BONUS_LIFESPAN_TICKS: u32 = 150;

/// One-in-N chance per tick of a bonus food appearing while none is active.
pub const BONUS_SPAWN_ODDS: u32 = 400;

/// Sparkle effect duration in rendered frames.
pub const SPARKLE_FRAMES: u8 = 10;

/// Target delay between rendered frames in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 8;

/// Upper bound on the wall-clock delta fed to the tick accumulator per frame.
/// Keeps a stalled terminal from draining a burst of catch-up ticks.
pub const MAX_FRAME_DELTA_MS: u64 = 250;

/// White flash duration when a round ends, in milliseconds.
pub const FLASH_MS: u64 = 75;

/// Dramatic hold on the final frame before the round-ended screen.
pub const ROUND_END_PAUSE_MS: u64 = 500;

/// Snake body segment glyph.
pub const GLYPH_BODY: &str = "█";

/// Directional head glyphs.
pub const GLYPH_HEAD_UP: &str = "▲";
pub const GLYPH_HEAD_DOWN: &str = "▼";
pub const GLYPH_HEAD_LEFT: &str = "◀";
pub const GLYPH_HEAD_RIGHT: &str = "▶";

/// Ordinary food glyph.
pub const GLYPH_FOOD: &str = "●";

/// Bonus food glyphs, alternated for a pulsing shimmer.
pub const GLYPH_BONUS: &str = "◆";
pub const GLYPH_BONUS_PULSE: &str = "◈";

/// Sparkle glyphs from freshly spawned to nearly faded.
pub const GLYPH_SPARKLE_BRIGHT: &str = "✶";
pub const GLYPH_SPARKLE_MID: &str = "✦";
pub const GLYPH_SPARKLE_FADE: &str = "·";

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Checkerboard light squares.
    pub field_light: Color,
    /// Checkerboard dark squares.
    pub field_dark: Color,
    pub snake: Color,
    pub snake_eye: Color,
    pub food: Color,
    pub bonus_food: Color,
    pub sparkle: Color,
    pub info_text: Color,
    pub game_over: Color,
    pub overlay_text: Color,
    pub button_primary: Color,
    pub button_secondary: Color,
    pub button_label: Color,
}

/// Garden-green default theme.
pub const THEME_GARDEN: Theme = Theme {
    name: "Garden",
    field_light: Color::Rgb(142, 204, 57),
    field_dark: Color::Rgb(124, 184, 46),
    snake: Color::Rgb(76, 119, 219),
    snake_eye: Color::Rgb(255, 255, 255),
    food: Color::Rgb(223, 75, 61),
    bonus_food: Color::Rgb(239, 187, 83),
    sparkle: Color::Rgb(255, 255, 100),
    info_text: Color::Rgb(40, 40, 40),
    game_over: Color::Rgb(200, 0, 0),
    overlay_text: Color::Rgb(255, 255, 255),
    button_primary: Color::Rgb(76, 119, 219),
    button_secondary: Color::Rgb(130, 130, 130),
    button_label: Color::Rgb(255, 255, 255),
};
