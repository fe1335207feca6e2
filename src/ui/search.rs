//! Search screen rendering.
//!
//! Displays the search input bar and the matching records.

use crate::app::App;
use crate::ui::selection_style;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

/// Render the search screen.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Before the first search a prompt is shown instead of results. After a
/// search with no matches, "No results found" is shown.
pub fn render_search(app: &App, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::Yellow)),
        Span::styled(app.search.input.value.as_str(), Style::default().fg(Color::White)),
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ]);
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title("Search")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Yellow)),
    );
    Widget::render(paragraph, chunks[0], buf);

    let Some(query) = app.search.submitted.as_deref() else {
        let hint = Paragraph::new(Span::styled(
            "Type a question, topic or category and press Enter.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(Block::default().title("Results").borders(Borders::ALL));
        Widget::render(hint, chunks[1], buf);
        return;
    };

    let results = &app.search.results;
    if results.is_empty() {
        let list = List::new(vec![ListItem::new("No results found")])
            .block(Block::default().title("Results (0)").borders(Borders::ALL));
        Widget::render(list, chunks[1], buf);
        return;
    }

    let items: Vec<ListItem> = results
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let is_selected = idx == app.search.selected;
            ListItem::new(vec![
                Line::from(Span::styled(
                    record.title.as_str(),
                    Style::default()
                        .fg(if is_selected { Color::Yellow } else { Color::White })
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    record.category.as_str(),
                    Style::default().fg(Color::Cyan),
                )),
                Line::from(Span::styled(record.body.as_str(), Style::default().fg(Color::Gray))),
                Line::from(""),
            ])
            .style(selection_style(is_selected))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(app.search.selected));

    let title = format!("Results for \"{}\" ({})", query, results.len());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(selection_style(true));
    StatefulWidget::render(list, chunks[1], buf, &mut list_state);
}
