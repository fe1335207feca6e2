//! Alert dialog rendering.

use crate::app::Alert;
use crate::ui::profile::centered;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Render a modal alert centered in `area`.
///
/// # Details
/// The message keeps its line breaks so each validation error gets its own
/// line. The dialog height grows with the number of lines.
pub fn render_alert(alert: &Alert, area: Rect, buf: &mut Buffer) {
    let mut lines: Vec<Line> = alert.message.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[ OK ]",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));

    let height = lines.len() as u16 + 2;
    let popup = centered(area, 60, height);
    Widget::render(Clear, popup, buf);

    let title_color = if alert.title == "Error" { Color::Red } else { Color::Green };
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    alert.title.as_str(),
                    Style::default()
                        .fg(title_color)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL),
        );
    Widget::render(paragraph, popup, buf);
}
