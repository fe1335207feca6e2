//! Form screen rendering.
//!
//! Sign-in, sign-up, password recovery and the question and answer editors.

use crate::app::{App, Form, TextField};
use crate::validation::MAX_DESCRIPTION_LENGTH;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Render a single text field.
///
/// # Arguments
/// * `field` - Field to draw
/// * `focused` - Whether the field has keyboard focus
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Masked fields show bullets unless revealed. Fields with a length limit
/// show a "count/max" counter in the bottom border.
pub fn render_field(field: &TextField, focused: bool, area: Rect, buf: &mut Buffer) {
    let mut spans = vec![Span::styled(
        field.display(),
        Style::default().fg(if focused { Color::White } else { Color::Gray }),
    )];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
    }

    let mut title = field.label.to_string();
    if field.masked {
        title.push_str(if field.revealed { " (F2: hide)" } else { " (F2: show)" });
    }
    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        });
    if let Some(max) = field.max_len {
        block = block.title_bottom(Line::from(format!("{}/{}", field.char_count(), max)).right_aligned());
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(block);
    Widget::render(paragraph, area, buf);
}

/// Height used by a field: limited fields get room to wrap.
fn field_height(field: &TextField) -> u16 {
    if field.max_len == Some(MAX_DESCRIPTION_LENGTH) { 8 } else { 3 }
}

/// Render a titled form followed by a line of footer text.
fn render_form(form: &Form, title: &str, footer: Vec<Line>, area: Rect, buf: &mut Buffer) {
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    let inner = block.inner(area);
    Widget::render(block, area, buf);

    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|field| Constraint::Length(field_height(field)))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, field) in form.fields.iter().enumerate() {
        render_field(field, index == form.focus, chunks[index], buf);
    }

    let footer = Paragraph::new(footer).wrap(Wrap { trim: true });
    Widget::render(footer, chunks[form.fields.len()], buf);
}

fn link(text: &str) -> Span<'_> {
    Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED),
    )
}

pub fn render_login(app: &App, area: Rect, buf: &mut Buffer) {
    let footer = vec![
        Line::from(vec![Span::raw("Forgot Password? "), link("Ctrl+F")]),
        Line::from(vec![Span::raw("Don't have an account? "), link("Ctrl+N: Sign Up")]),
    ];
    render_form(&app.login, "Sign In", footer, area, buf);
}

pub fn render_register(app: &App, area: Rect, buf: &mut Buffer) {
    let footer = vec![Line::from(vec![
        Span::raw("Already have an account? "),
        link("Ctrl+L: Sign In"),
    ])];
    render_form(&app.register, "Sign Up", footer, area, buf);
}

pub fn render_forgot_email(app: &App, area: Rect, buf: &mut Buffer) {
    let footer = vec![
        Line::from("Enter your email address to receive a one-time password."),
        Line::from(vec![Span::raw("Remember your password? "), link("Ctrl+L: Sign In")]),
    ];
    render_form(&app.forgot_email, "Forgot Password", footer, area, buf);
}

pub fn render_reset_password(app: &App, area: Rect, buf: &mut Buffer) {
    let footer = vec![Line::from("Enter and confirm your new password.")];
    render_form(&app.reset_password, "Forgot Password", footer, area, buf);
}

/// Render the OTP entry with the resend countdown.
pub fn render_otp(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::default().title("Forgot Password").borders(Borders::ALL);
    let inner = block.inner(area);
    Widget::render(block, area, buf);

    let Some(otp) = app.otp.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    Widget::render(
        Paragraph::new("Enter the OTP code sent to your email."),
        chunks[0],
        buf,
    );
    render_field(&otp.input, true, chunks[1], buf);

    let resend = if otp.countdown.can_resend() {
        Line::from(vec![Span::raw("Didn't get the code? "), link("Ctrl+R: Resend OTP")])
    } else {
        Line::from(Span::styled(
            format!("Resend OTP in {}", otp.countdown.display()),
            Style::default().fg(Color::DarkGray),
        ))
    };
    Widget::render(Paragraph::new(resend), chunks[2], buf);
}

pub fn render_ask(app: &App, area: Rect, buf: &mut Buffer) {
    let footer = vec![Line::from(Span::styled(
        "Attachment is optional. Enter a path to an existing image file.",
        Style::default().fg(Color::DarkGray),
    ))];
    render_form(&app.ask, "Ask a Question", footer, area, buf);
}

pub fn render_answer(app: &App, area: Rect, buf: &mut Buffer) {
    let footer = vec![Line::from(vec![
        Span::styled("Answering: ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.detail.post.question.as_str()),
    ])];
    render_form(&app.answer, "Submit Answer", footer, area, buf);
}
