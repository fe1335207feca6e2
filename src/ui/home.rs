//! Landing page rendering.
//!
//! Displays the greeting, the section switcher and question cards.

use crate::app::{App, LandingSection};
use crate::model::Record;
use crate::ui::selection_style;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

/// Render the landing page.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Shows the two sections as tabs with the active one highlighted, and the
/// active section's cards below. Cards with an image show a placeholder.
pub fn render_landing(app: &App, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Greeting
            Constraint::Length(3), // Sections
            Constraint::Min(0),    // Cards
        ])
        .split(area);

    let greeting = Paragraph::new(Line::from(vec![
        Span::raw("Hi, "),
        Span::styled(
            app.username.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("! What do you want to ask today?"),
    ]))
    .block(Block::default().title("Home").borders(Borders::ALL));
    Widget::render(greeting, chunks[0], buf);

    render_sections(app.landing.section, chunks[1], buf);
    render_cards(app.landing.cards(), app.landing.selected, chunks[2], buf);
}

fn render_sections(active: LandingSection, area: Rect, buf: &mut Buffer) {
    let sections = [LandingSection::RecentQuestion, LandingSection::RecentAnswered];

    let mut spans = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        let is_active = *section == active;
        let style = if is_active {
            Style::default()
                .fg(Color::Yellow)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }

        let label = if is_active {
            format!("▶ {} ◀", section.title())
        } else {
            format!("  {}  ", section.title())
        };
        spans.push(Span::styled(label, style));
    }
    spans.push(Span::styled("   s: See all", Style::default().fg(Color::Cyan)));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    Widget::render(paragraph, area, buf);
}

fn render_cards(cards: &[Record], selected: usize, area: Rect, buf: &mut Buffer) {
    let items: Vec<ListItem> = cards
        .iter()
        .enumerate()
        .map(|(idx, card)| {
            let is_selected = idx == selected;
            let mut lines = vec![Line::from(Span::styled(
                card.title.as_str(),
                Style::default()
                    .fg(if is_selected { Color::Yellow } else { Color::White })
                    .add_modifier(Modifier::BOLD),
            ))];
            if card.image_placeholder {
                lines.push(Line::from(Span::styled(
                    "[ image ]",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines.push(Line::from(Span::styled(
                card.body.as_str(),
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(Span::styled(
                format!("♥ {}", card.format_likes()),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(""));
            ListItem::new(lines).style(selection_style(is_selected))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select((!cards.is_empty()).then_some(selected));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(selection_style(true));
    StatefulWidget::render(list, area, buf, &mut list_state);
}
