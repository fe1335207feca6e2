//! UI components module.
//!
//! Contains ratatui widgets for displaying the application interface.

pub mod alert;
pub mod forms;
pub mod home;
pub mod profile;
pub mod questions;
pub mod search;

use crate::app::App;
use crate::keys;
use crate::navigation::Screen;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Render the complete UI.
///
/// # Arguments
/// * `f` - Frame to render to
/// * `app` - Application state
///
/// # Details
/// Lays out the header, the current screen and the status bar, then draws
/// the alert dialog on top if one is open.
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Screen
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    let buf = f.buffer_mut();
    render_header(app, chunks[0], buf);
    render_screen(app, chunks[1], buf);
    render_status(app, chunks[2], buf);

    if let Some(alert) = &app.alert {
        alert::render_alert(alert, chunks[1], buf);
    }
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
    let mut spans = vec![
        Span::styled(
            "Go-Tanya",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.screen().title(), Style::default().fg(Color::White)),
    ];
    if !matches!(
        app.screen(),
        Screen::Login
            | Screen::Register
            | Screen::EducationLevel
            | Screen::ForgotEmail
            | Screen::ForgotOtp
            | Screen::ForgotReset
    ) {
        spans.push(Span::styled(
            format!("  @{}", app.username),
            Style::default().fg(Color::Cyan),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL));
    Widget::render(paragraph, area, buf);
}

fn render_screen(app: &App, area: Rect, buf: &mut Buffer) {
    match app.screen() {
        Screen::Login => forms::render_login(app, area, buf),
        Screen::Register => forms::render_register(app, area, buf),
        Screen::EducationLevel => profile::render_education(app, area, buf),
        Screen::ForgotEmail => forms::render_forgot_email(app, area, buf),
        Screen::ForgotOtp => forms::render_otp(app, area, buf),
        Screen::ForgotReset => forms::render_reset_password(app, area, buf),
        Screen::Landing => home::render_landing(app, area, buf),
        Screen::RecentQuestions => questions::render_recent(app, area, buf),
        Screen::QuestionDetail => questions::render_detail(app, area, buf),
        Screen::AskQuestion => forms::render_ask(app, area, buf),
        Screen::Answer => forms::render_answer(app, area, buf),
        Screen::Search => search::render_search(app, area, buf),
        Screen::Profile => profile::render_profile(app, area, buf),
        Screen::Settings => profile::render_settings(app, area, buf),
        Screen::Terms => profile::render_terms(app, area, buf),
    }
}

fn render_status(app: &App, area: Rect, buf: &mut Buffer) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            keys::hints(app),
            Style::default().fg(Color::Gray),
        )),
    };
    let status = Paragraph::new(line)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    Widget::render(status, area, buf);
}

/// Style for a selectable row.
pub(crate) fn selection_style(is_selected: bool) -> Style {
    if is_selected {
        Style::default()
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}
