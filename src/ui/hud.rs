use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;

/// Values shown in the info bar above the playfield.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub score: u32,
    pub high_score: u32,
    pub ticks_per_second: u32,
}

/// Renders the info-bar strip: score on the left, speed in the middle,
/// high score on the right.
pub fn render_info_bar(frame: &mut Frame<'_>, area: Rect, info: HudInfo, theme: &Theme) {
    // Paint the whole strip before the text goes on top.
    frame.render_widget(
        Paragraph::new("").style(Style::default().bg(theme.field_light)),
        area,
    );

    let [_, text_row] =
        Layout::vertical([Constraint::Length(area.height.saturating_sub(1)), Constraint::Length(1)])
            .areas(area);

    let [left, middle, right] = Layout::horizontal([
        Constraint::Percentage(34),
        Constraint::Percentage(32),
        Constraint::Percentage(34),
    ])
    .areas(text_row);

    let text_style = Style::default()
        .fg(theme.info_text)
        .bg(theme.field_light)
        .add_modifier(Modifier::BOLD);

    frame.render_widget(
        Paragraph::new(Line::from(format!(" Score: {}", info.score)))
            .alignment(Alignment::Left)
            .style(text_style),
        left,
    );
    frame.render_widget(
        Paragraph::new(Line::from(format!("Speed: {}", info.ticks_per_second)))
            .alignment(Alignment::Center)
            .style(text_style),
        middle,
    );
    frame.render_widget(
        Paragraph::new(Line::from(format!("High: {} ", info.high_score)))
            .alignment(Alignment::Right)
            .style(text_style),
        right,
    );
}
