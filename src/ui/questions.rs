//! Question list and detail rendering.

use crate::app::App;
use crate::reaction::Reaction;
use crate::ui::selection_style;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap,
    },
};

/// Render the "Recent Question" list.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Only the revealed prefix is listed. A "More..." row follows it while
/// unrevealed records remain.
pub fn render_recent(app: &App, area: Rect, buf: &mut Buffer) {
    let visible = app.recent.visible();
    let total = app.recent.records.len();

    // Each record takes 4 lines (title, body, likes, separator)
    let lines_per_record = 4;
    let available_height = area.height.saturating_sub(2);
    let visible_records = (available_height / lines_per_record).max(1) as usize;
    let selected = app.recent.selected.min(visible.len().saturating_sub(1));
    let scroll_offset = selected.saturating_sub(visible_records.saturating_sub(1));

    let separator_width = area.width.saturating_sub(2).max(10) as usize;
    let separator_line = "─".repeat(separator_width);

    let mut items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .map(|(idx, record)| {
            let is_selected = idx == selected;
            let mut title = vec![Span::styled(
                record.title.as_str(),
                Style::default()
                    .fg(if is_selected { Color::Yellow } else { Color::White })
                    .add_modifier(Modifier::BOLD),
            )];
            if record.image_placeholder {
                title.push(Span::styled(" [image]", Style::default().fg(Color::DarkGray)));
            }
            let lines = vec![
                Line::from(title),
                Line::from(Span::styled(record.body.as_str(), Style::default().fg(Color::Gray))),
                Line::from(Span::styled(
                    format!("♥ {}", record.format_likes()),
                    Style::default().fg(Color::Red),
                )),
                Line::from(Span::styled(
                    separator_line.clone(),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            ListItem::new(lines).style(selection_style(is_selected))
        })
        .collect();

    if app.recent.has_more() {
        let next = app.recent.paginator.page_size().min(total - visible.len());
        items.push(ListItem::new(Line::from(Span::styled(
            format!("More... (m: +{})", next),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))));
    }

    let mut list_state = ListState::default();
    list_state.select((!visible.is_empty()).then(|| selected - scroll_offset));

    let title = format!("Recent Question ({}/{})", visible.len(), total);
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(selection_style(true));
    StatefulWidget::render(list, area, buf, &mut list_state);
}

/// Glyphs for the three reaction buttons, filled when active.
fn reaction_spans(reaction: Reaction) -> Vec<Span<'static>> {
    let button = |active: bool, on: &'static str, off: &'static str, color: Color| {
        if active {
            Span::styled(on, Style::default().fg(color).add_modifier(Modifier::BOLD))
        } else {
            Span::styled(off, Style::default().fg(Color::DarkGray))
        }
    };
    vec![
        button(reaction.is_liked(), "♥ Like", "♡ Like", Color::Red),
        Span::raw("  "),
        button(reaction.is_thumbs_up(), "▲ Up", "△ Up", Color::Green),
        Span::raw("  "),
        button(reaction.is_thumbs_down(), "▼ Down", "▽ Down", Color::Magenta),
    ]
}

/// Render a question with its comments.
pub fn render_detail(app: &App, area: Rect, buf: &mut Buffer) {
    let post = &app.detail.post;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Min(0)])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            post.category.as_str(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            post.question.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(post.content.as_str()),
    ];
    if post.image_placeholder {
        lines.push(Line::from(Span::styled("[ image ]", Style::default().fg(Color::DarkGray))));
    }
    if let Some(attachment) = &post.attachment {
        lines.push(Line::from(Span::styled(
            format!("Attachment: {}", attachment),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("♥ {}", crate::model::format_likes(post.likes)),
        Style::default().fg(Color::Red),
    )));

    let question = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Question").borders(Borders::ALL));
    Widget::render(question, chunks[0], buf);

    let items: Vec<ListItem> = post
        .comments
        .iter()
        .zip(app.detail.reactions.iter())
        .enumerate()
        .map(|(idx, (comment, reaction))| {
            let is_selected = idx == app.detail.selected;
            ListItem::new(vec![
                Line::from(Span::styled(
                    comment.heading.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(comment.text.as_str()),
                Line::from(reaction_spans(*reaction)),
                Line::from(""),
            ])
            .style(selection_style(is_selected))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select((!items.is_empty()).then_some(app.detail.selected));

    let title = format!("Comments ({})", post.comments.len());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(selection_style(true));
    StatefulWidget::render(list, chunks[1], buf, &mut list_state);
}
