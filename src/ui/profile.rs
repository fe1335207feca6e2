//! Profile, settings, terms and education level rendering.

use crate::app::{App, SubmissionKind};
use crate::fixtures::{EDUCATION_LEVELS, SETTINGS, TERMS_OF_SERVICE};
use crate::ui::{forms::render_field, selection_style};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Render the profile page.
///
/// # Details
/// Shows the username and the session's submissions, newest first. The
/// change-username dialog is drawn over the page when open.
pub fn render_profile(app: &App, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            app.username.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "u: Change Username | s: Settings",
            Style::default().fg(Color::Cyan),
        )),
    ])
    .block(Block::default().title("Profile").borders(Borders::ALL));
    Widget::render(header, chunks[0], buf);

    let lines: Vec<Line> = if app.submissions.is_empty() {
        vec![Line::from(Span::styled(
            "Nothing submitted yet.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        app.submissions
            .iter()
            .rev()
            .map(|submission| {
                let kind = match submission.kind {
                    SubmissionKind::Question => "Question",
                    SubmissionKind::Answer => "Answer",
                    SubmissionKind::UsernameChange => "Username",
                };
                Line::from(vec![
                    Span::styled(
                        submission.at.format("%H:%M ").to_string(),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(format!("{:<9}", kind), Style::default().fg(Color::Magenta)),
                    Span::raw(submission.summary.as_str()),
                ])
            })
            .collect()
    };
    let activity = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Activity").borders(Borders::ALL));
    Widget::render(activity, chunks[1], buf);

    if let Some(field) = &app.profile.rename {
        let popup = centered(area, 50, 3);
        Widget::render(Clear, popup, buf);
        render_field(field, true, popup, buf);
    }
}

/// Render the settings sections with the selected entry highlighted.
pub fn render_settings(app: &App, area: Rect, buf: &mut Buffer) {
    let mut lines = Vec::new();
    let mut index = 0;
    for section in SETTINGS.iter() {
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for item in section.items {
            let is_selected = index == app.settings_selected;
            let color = if item.destructive { Color::Red } else { Color::White };
            let marker = if is_selected { "▶ " } else { "  " };
            lines.push(
                Line::from(Span::styled(
                    format!("{}{}", marker, item.label),
                    Style::default().fg(color),
                ))
                .style(selection_style(is_selected)),
            );
            index += 1;
        }
        lines.push(Line::from(""));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().title("Settings").borders(Borders::ALL));
    Widget::render(paragraph, area, buf);
}

pub fn render_terms(app: &App, area: Rect, buf: &mut Buffer) {
    let paragraph = Paragraph::new(TERMS_OF_SERVICE)
        .wrap(Wrap { trim: true })
        .scroll((app.terms_scroll, 0))
        .block(
            Block::default()
                .title("Terms of Service")
                .borders(Borders::ALL),
        );
    Widget::render(paragraph, area, buf);
}

/// Render the education level choice list.
pub fn render_education(app: &App, area: Rect, buf: &mut Buffer) {
    let mut lines = vec![
        Line::from("Select your current education level."),
        Line::from(""),
    ];
    for (index, level) in EDUCATION_LEVELS.iter().enumerate() {
        let radio = if app.education.selected == Some(index) { "(•)" } else { "( )" };
        lines.push(
            Line::from(format!("{} {}", radio, level.label))
                .style(selection_style(index == app.education.cursor)),
        );
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title("Education Level")
            .borders(Borders::ALL),
    );
    Widget::render(paragraph, area, buf);
}

/// Rect of `width` percent and `height` rows centered in `area`.
pub(crate) fn centered(area: Rect, width_percent: u16, height: u16) -> Rect {
    let width = ((u32::from(area.width) * u32::from(width_percent) / 100) as u16)
        .max(20)
        .min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside() {
        let area = Rect::new(0, 0, 100, 30);
        let popup = centered(area, 50, 5);
        assert_eq!(popup, Rect::new(25, 12, 50, 5));

        let tiny = Rect::new(0, 0, 10, 2);
        let popup = centered(tiny, 50, 5);
        assert_eq!(popup.width, 10);
        assert_eq!(popup.height, 2);
    }
}
