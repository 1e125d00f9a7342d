use ratatui::layout::{Alignment, Position as ScreenPosition, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::screen::ScreenEvent;

const LABEL_PLAY_AGAIN: &str = "Play Again";
const LABEL_HIGH_SCORES: &str = "High Scores";
const LABEL_QUIT: &str = "Quit";
const LABEL_BACK: &str = "Back";

/// Horizontal padding inside a button, per side.
const BUTTON_PADDING: u16 = 2;

/// Clickable button rows of the round-ended screen, top to bottom.
///
/// Both the renderer and the click hit-test derive button geometry from this
/// one function, so what is drawn is exactly what is clickable.
#[must_use]
pub fn round_ended_buttons(board: Rect) -> [(Rect, ScreenEvent, &'static str); 3] {
    let popup = centered(board, popup_width(board), 11);
    [
        (
            button_rect(popup, 6, LABEL_PLAY_AGAIN),
            ScreenEvent::Replay,
            LABEL_PLAY_AGAIN,
        ),
        (
            button_rect(popup, 8, LABEL_HIGH_SCORES),
            ScreenEvent::ViewHighScore,
            LABEL_HIGH_SCORES,
        ),
        (
            button_rect(popup, 10, LABEL_QUIT),
            ScreenEvent::Quit,
            LABEL_QUIT,
        ),
    ]
}

/// Clickable button rows of the high-score screen.
#[must_use]
pub fn high_score_buttons(board: Rect) -> [(Rect, ScreenEvent, &'static str); 1] {
    let popup = centered(board, popup_width(board), 8);
    [(
        button_rect(popup, 7, LABEL_BACK),
        ScreenEvent::Back,
        LABEL_BACK,
    )]
}

/// Maps a display-space click to a round-ended menu action.
#[must_use]
pub fn round_ended_hit(board: Rect, column: u16, row: u16) -> Option<ScreenEvent> {
    hit(&round_ended_buttons(board), column, row)
}

/// Maps a display-space click to a high-score menu action.
#[must_use]
pub fn high_score_hit(board: Rect, column: u16, row: u16) -> Option<ScreenEvent> {
    hit(&high_score_buttons(board), column, row)
}

fn hit(
    buttons: &[(Rect, ScreenEvent, &'static str)],
    column: u16,
    row: u16,
) -> Option<ScreenEvent> {
    buttons
        .iter()
        .find(|(rect, _, _)| rect.contains(ScreenPosition { x: column, y: row }))
        .map(|&(_, event, _)| event)
}

/// Draws the round-ended screen over the board.
pub fn render_round_ended(
    frame: &mut Frame<'_>,
    board: Rect,
    final_score: u32,
    high_score: u32,
    theme: &Theme,
) {
    let popup = centered(board, popup_width(board), 11);
    frame.render_widget(Clear, popup);

    let title_style = Style::default()
        .fg(theme.game_over)
        .add_modifier(Modifier::BOLD);
    render_centered_line(frame, popup, 1, "GAME OVER", title_style);

    let text_style = Style::default().fg(theme.overlay_text);
    render_centered_line(
        frame,
        popup,
        3,
        &format!("Your Score: {final_score}"),
        text_style,
    );
    render_centered_line(
        frame,
        popup,
        4,
        &format!("High Score: {high_score}"),
        text_style,
    );
    if final_score >= high_score && final_score > 0 {
        render_centered_line(
            frame,
            popup,
            5,
            "New high score!",
            Style::default()
                .fg(theme.bonus_food)
                .add_modifier(Modifier::BOLD),
        );
    }

    for (index, (rect, _, label)) in round_ended_buttons(board).into_iter().enumerate() {
        let bg = if index == 0 {
            theme.button_primary
        } else {
            theme.button_secondary
        };
        render_button(frame, rect, label, bg, theme);
    }
}

/// Draws the high-score screen over the board.
pub fn render_high_score(frame: &mut Frame<'_>, board: Rect, high_score: u32, theme: &Theme) {
    let popup = centered(board, popup_width(board), 8);
    frame.render_widget(Clear, popup);

    render_centered_line(
        frame,
        popup,
        1,
        "High Score",
        Style::default()
            .fg(theme.overlay_text)
            .add_modifier(Modifier::BOLD),
    );
    render_centered_line(
        frame,
        popup,
        3,
        &high_score.to_string(),
        Style::default()
            .fg(theme.bonus_food)
            .add_modifier(Modifier::BOLD),
    );

    for (rect, _, label) in high_score_buttons(board) {
        render_button(frame, rect, label, theme.button_secondary, theme);
    }
}

/// Draws the pause overlay on top of the live board.
pub fn render_pause_overlay(frame: &mut Frame<'_>, board: Rect, theme: &Theme) {
    let popup = centered(board, popup_width(board), 5);
    frame.render_widget(Clear, popup);

    render_centered_line(
        frame,
        popup,
        1,
        "PAUSED",
        Style::default()
            .fg(theme.overlay_text)
            .add_modifier(Modifier::BOLD),
    );
    render_centered_line(
        frame,
        popup,
        3,
        "Press 'P' to continue",
        Style::default().fg(theme.overlay_text),
    );
}

fn render_button(frame: &mut Frame<'_>, rect: Rect, label: &str, bg: ratatui::style::Color, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Line::from(label))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.button_label)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
        rect,
    );
}

fn render_centered_line(frame: &mut Frame<'_>, popup: Rect, row: u16, text: &str, style: Style) {
    let Some(area) = popup_row(popup, row) else {
        return;
    };
    frame.render_widget(
        Paragraph::new(Line::from(text.to_string()))
            .alignment(Alignment::Center)
            .style(style),
        area,
    );
}

fn popup_row(popup: Rect, row: u16) -> Option<Rect> {
    if row >= popup.height {
        return None;
    }
    Some(Rect::new(popup.x, popup.y + row, popup.width, 1))
}

fn popup_width(board: Rect) -> u16 {
    // Wide enough for every label plus breathing room, never wider than the
    // board itself.
    let widest = [LABEL_PLAY_AGAIN, LABEL_HIGH_SCORES, LABEL_QUIT, LABEL_BACK]
        .into_iter()
        .map(|label| label.width() as u16)
        .max()
        .unwrap_or(0);
    (widest + 2 * BUTTON_PADDING + 8).min(board.width)
}

fn button_rect(popup: Rect, row: u16, label: &str) -> Rect {
    let width = (label.width() as u16 + 2 * BUTTON_PADDING).min(popup.width);
    let x = popup.x + popup.width.saturating_sub(width) / 2;
    let y = popup.y + row.min(popup.height.saturating_sub(1));
    Rect::new(x, y, width, 1)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
