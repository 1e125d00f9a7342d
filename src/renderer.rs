use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    Theme, GLYPH_BODY, GLYPH_BONUS, GLYPH_BONUS_PULSE, GLYPH_FOOD, GLYPH_HEAD_DOWN,
    GLYPH_HEAD_LEFT, GLYPH_HEAD_RIGHT, GLYPH_HEAD_UP, GLYPH_SPARKLE_BRIGHT, GLYPH_SPARKLE_FADE,
    GLYPH_SPARKLE_MID,
};
use crate::effects::{EffectKind, PresentationState};
use crate::game::RoundState;
use crate::grid::{GridSize, Position};
use crate::input::Direction;
use crate::interpolate::{interpolate, VisualSegment};
use crate::screen::Screen;
use crate::ui::hud::{render_info_bar, HudInfo};
use crate::ui::menu::{
    render_high_score, render_pause_overlay, render_round_ended,
};

/// Where the board landed on the terminal this frame.
///
/// The same geometry is recomputed from the terminal size when mapping click
/// coordinates back into the board, so rendering and hit-testing agree.
#[derive(Debug, Clone, Copy)]
pub struct BoardLayout {
    /// Bordered board area.
    pub board: Rect,
    /// Cell area inside the border; one terminal cell per grid cell.
    pub inner: Rect,
}

/// Computes the centered board placement for a terminal of `area` size.
#[must_use]
pub fn board_layout(area: Rect, grid: GridSize) -> BoardLayout {
    let want_width = grid.width + 2;
    let want_height = grid.height + 2;
    let width = want_width.min(area.width);
    let height = want_height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;

    let board = Rect::new(x, y, width, height);
    let inner = Rect::new(
        board.x.saturating_add(1),
        board.y.saturating_add(1),
        board.width.saturating_sub(2),
        board.height.saturating_sub(2),
    );

    BoardLayout { board, inner }
}

/// Everything the renderer needs for one frame, borrowed immutably.
#[derive(Debug)]
pub struct FrameView<'a> {
    pub screen: Screen,
    pub round: &'a RoundState,
    pub paused: bool,
    /// Fractional tick progress for interpolation, in `[0, 1]`.
    pub progress: f32,
    pub high_score: u32,
    pub final_score: u32,
    pub presentation: &'a PresentationState,
    pub theme: &'a Theme,
    /// Paint the playfield solid white (round-end flash).
    pub flash: bool,
}

/// Renders one full frame from immutable state.
pub fn render(frame: &mut Frame<'_>, view: &FrameView<'_>) {
    let grid = view.round.grid();
    let layout = board_layout(frame.area(), grid);
    let theme = view.theme;

    let block = Block::bordered().border_style(
        Style::default()
            .fg(theme.field_dark)
            .bg(theme.field_light),
    );
    frame.render_widget(block, layout.board);

    if view.flash {
        flash_playfield(frame, layout.inner, grid);
        return;
    }

    render_field(frame, layout.inner, grid, theme);

    let info_rows = grid.info_bar_rows.min(layout.inner.height);
    let info_area = Rect::new(layout.inner.x, layout.inner.y, layout.inner.width, info_rows);
    render_info_bar(
        frame,
        info_area,
        HudInfo {
            score: view.round.score,
            high_score: view.high_score,
            ticks_per_second: view.round.ticks_per_second,
        },
        theme,
    );

    render_food(frame, layout.inner, view, grid);
    render_snake(frame, layout.inner, view, grid);
    render_effects(frame, layout.inner, view, grid);

    match view.screen {
        Screen::Playing if view.paused => render_pause_overlay(frame, layout.board, theme),
        Screen::Playing => {}
        Screen::RoundEnded => {
            render_round_ended(frame, layout.board, view.final_score, view.high_score, theme);
        }
        Screen::ShowHighScore => render_high_score(frame, layout.board, view.high_score, theme),
    }
}

/// Checkerboard backdrop over the playable rows.
fn render_field(frame: &mut Frame<'_>, inner: Rect, grid: GridSize, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for y in 0..i32::from(grid.height) {
        for x in 0..i32::from(grid.width) {
            let Some((col, row)) = cell_to_terminal(inner, Position { x, y }) else {
                continue;
            };
            let bg = cell_background(grid, x, y, theme);
            buffer.set_string(col, row, " ", Style::default().bg(bg));
        }
    }
}

fn flash_playfield(frame: &mut Frame<'_>, inner: Rect, grid: GridSize) {
    let buffer = frame.buffer_mut();
    for y in 0..i32::from(grid.height) {
        for x in 0..i32::from(grid.width) {
            let Some((col, row)) = cell_to_terminal(inner, Position { x, y }) else {
                continue;
            };
            buffer.set_string(
                col,
                row,
                " ",
                Style::default().bg(ratatui::style::Color::White),
            );
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, view: &FrameView<'_>, grid: GridSize) {
    let theme = view.theme;
    let buffer = frame.buffer_mut();

    let food = view.round.food.position;
    if let Some((col, row)) = cell_to_terminal(inner, food) {
        buffer.set_string(
            col,
            row,
            GLYPH_FOOD,
            Style::default()
                .fg(theme.food)
                .bg(cell_background(grid, food.x, food.y, theme)),
        );
    }

    if let Some(bonus) = view.round.bonus_food {
        // The shimmer alternates on the free-running pulse counter.
        let glyph = if view.presentation.pulse() % 16 < 8 {
            GLYPH_BONUS
        } else {
            GLYPH_BONUS_PULSE
        };
        if let Some((col, row)) = cell_to_terminal(inner, bonus.position) {
            buffer.set_string(
                col,
                row,
                glyph,
                Style::default()
                    .fg(theme.bonus_food)
                    .bg(cell_background(grid, bonus.position.x, bonus.position.y, theme))
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, view: &FrameView<'_>, grid: GridSize) {
    let round = view.round;
    let current: Vec<Position> = round.snake.segments().copied().collect();
    let visual = interpolate(&current, round.previous_body(), view.progress, grid);
    let theme = view.theme;
    let direction = round.snake.direction();

    let buffer = frame.buffer_mut();
    for (index, segment) in visual.iter().enumerate().rev() {
        let cell = nearest_cell(*segment);
        let Some((col, row)) = cell_to_terminal(inner, cell) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                col,
                row,
                head_glyph(direction),
                Style::default()
                    .fg(theme.snake_eye)
                    .bg(theme.snake)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(
                col,
                row,
                GLYPH_BODY,
                Style::default()
                    .fg(theme.snake)
                    .bg(cell_background(grid, cell.x, cell.y, theme)),
            );
        }
    }
}

fn render_effects(frame: &mut Frame<'_>, inner: Rect, view: &FrameView<'_>, grid: GridSize) {
    let theme = view.theme;
    let buffer = frame.buffer_mut();

    for effect in view.presentation.effects() {
        let glyph = match effect.kind {
            EffectKind::Sparkle => match effect.elapsed_fraction() {
                f if f < 0.34 => GLYPH_SPARKLE_BRIGHT,
                f if f < 0.67 => GLYPH_SPARKLE_MID,
                _ => GLYPH_SPARKLE_FADE,
            },
        };
        let Some((col, row)) = cell_to_terminal(inner, effect.position) else {
            continue;
        };
        buffer.set_string(
            col,
            row,
            glyph,
            Style::default()
                .fg(theme.sparkle)
                .bg(cell_background(grid, effect.position.x, effect.position.y, theme))
                .add_modifier(Modifier::BOLD),
        );
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_HEAD_UP,
        Direction::Down => GLYPH_HEAD_DOWN,
        Direction::Left => GLYPH_HEAD_LEFT,
        Direction::Right => GLYPH_HEAD_RIGHT,
    }
}

fn cell_background(grid: GridSize, x: i32, y: i32, theme: &Theme) -> ratatui::style::Color {
    if y < grid.playfield_top() {
        theme.field_light
    } else if (x + y) % 2 == 0 {
        theme.field_dark
    } else {
        theme.field_light
    }
}

fn nearest_cell(segment: VisualSegment) -> Position {
    Position {
        x: segment.x.round() as i32,
        y: segment.y.round() as i32,
    }
}

fn cell_to_terminal(inner: Rect, position: Position) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let col = inner.x.saturating_add(x_offset);
    let row = inner.y.saturating_add(y_offset);
    if col >= inner.right() || row >= inner.bottom() {
        return None;
    }

    Some((col, row))
}
