//! Keyboard handling.
//!
//! Maps key presses to application actions for the current screen.

use crate::app::App;
use crate::navigation::{RouteParams, Screen};
use crate::reaction::Reaction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Handle a key press.
///
/// # Arguments
/// * `app` - Application state
/// * `key` - Key event from the terminal
///
/// # Returns
/// * `Flow` - `Quit` when the user asked to exit
///
/// # Details
/// Ctrl+C always quits. An open alert swallows every other key until it is
/// acknowledged with Enter or Esc.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Flow {
    if key.kind != KeyEventKind::Press {
        return Flow::Continue;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Flow::Quit;
    }

    if app.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.acknowledge_alert();
        }
        return Flow::Continue;
    }

    if !app.accepts_text() && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return Flow::Quit;
    }

    match app.screen() {
        Screen::Login => return handle_login(app, key, ctrl),
        Screen::Register => handle_form_screen(app, key, ctrl, Screen::Register),
        Screen::EducationLevel => handle_education(app, key),
        Screen::ForgotEmail => handle_form_screen(app, key, ctrl, Screen::ForgotEmail),
        Screen::ForgotOtp => handle_otp(app, key, ctrl),
        Screen::ForgotReset => handle_form_screen(app, key, ctrl, Screen::ForgotReset),
        Screen::Landing => return handle_landing(app, key),
        Screen::RecentQuestions => handle_recent(app, key),
        Screen::QuestionDetail => handle_detail(app, key),
        Screen::AskQuestion => handle_form_screen(app, key, ctrl, Screen::AskQuestion),
        Screen::Answer => handle_form_screen(app, key, ctrl, Screen::Answer),
        Screen::Search => handle_search(app, key, ctrl),
        Screen::Profile => handle_profile(app, key),
        Screen::Settings => handle_settings(app, key),
        Screen::Terms => handle_terms(app, key),
    }
    Flow::Continue
}

fn handle_login(app: &mut App, key: KeyEvent, ctrl: bool) -> Flow {
    match key.code {
        KeyCode::Esc => return Flow::Quit,
        KeyCode::Char('n') if ctrl => app.navigate(Screen::Register, RouteParams::new()),
        KeyCode::Char('f') if ctrl => app.navigate(Screen::ForgotEmail, RouteParams::new()),
        _ => handle_form_screen(app, key, ctrl, Screen::Login),
    }
    Flow::Continue
}

/// Shared editing keys for screens made of a single form.
fn handle_form_screen(app: &mut App, key: KeyEvent, ctrl: bool, screen: Screen) {
    if key.code == KeyCode::Esc {
        app.go_back();
        return;
    }
    // "Sign in instead" links on the sign-up and forgot-password screens
    if ctrl
        && key.code == KeyCode::Char('l')
        && matches!(screen, Screen::Register | Screen::ForgotEmail)
    {
        app.reset_to(Screen::Login);
        return;
    }
    if key.code == KeyCode::Enter {
        match screen {
            Screen::Login => app.submit_login(),
            Screen::Register => app.submit_register(),
            Screen::ForgotEmail => app.send_otp(),
            Screen::ForgotReset => app.submit_reset_password(),
            Screen::AskQuestion => app.submit_question(),
            Screen::Answer => app.submit_answer(),
            _ => {}
        }
        return;
    }

    let form = match screen {
        Screen::Login => &mut app.login,
        Screen::Register => &mut app.register,
        Screen::ForgotEmail => &mut app.forgot_email,
        Screen::ForgotReset => &mut app.reset_password,
        Screen::AskQuestion => &mut app.ask,
        Screen::Answer => &mut app.answer,
        _ => return,
    };
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::F(2) => form.toggle_reveal(),
        KeyCode::Backspace => form.pop(),
        KeyCode::Char(c) if !ctrl => form.push(c),
        _ => {}
    }
}

fn handle_education(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.go_back();
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_education_cursor(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_education_cursor(true),
        KeyCode::Char(' ') => app.select_education_level(),
        KeyCode::Enter => app.complete_signup(),
        _ => {}
    }
}

fn handle_otp(app: &mut App, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Esc => {
            app.go_back();
        }
        KeyCode::Char('r') if ctrl => app.resend_otp(),
        KeyCode::Enter => app.verify_otp(),
        KeyCode::Backspace => {
            if let Some(otp) = app.otp.as_mut() {
                otp.input.pop();
            }
        }
        KeyCode::Char(c) if !ctrl => {
            if let Some(otp) = app.otp.as_mut() {
                otp.input.push(c);
            }
        }
        _ => {}
    }
}

fn handle_landing(app: &mut App, key: KeyEvent) -> Flow {
    match key.code {
        KeyCode::Esc => return Flow::Quit,
        KeyCode::Tab => app.switch_landing_section(),
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => app.move_landing_selection(false),
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => app.move_landing_selection(true),
        KeyCode::Enter => app.open_landing_card(),
        KeyCode::Char('s') => app.see_all(),
        KeyCode::Char('a') => app.navigate(Screen::AskQuestion, RouteParams::new()),
        KeyCode::Char('p') => app.navigate(Screen::Profile, RouteParams::new()),
        KeyCode::Char('/') => app.navigate(Screen::Search, RouteParams::new()),
        _ => {}
    }
    Flow::Continue
}

fn handle_recent(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.go_back();
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_recent_selection(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_recent_selection(true),
        KeyCode::Char('m') => app.load_more(),
        KeyCode::Enter => app.open_recent_question(),
        _ => {}
    }
}

fn handle_detail(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.go_back();
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_comment_selection(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_comment_selection(true),
        KeyCode::Char('l') => app.react(Reaction::press_like),
        KeyCode::Char('u') => app.react(Reaction::press_thumbs_up),
        KeyCode::Char('d') => app.react(Reaction::press_thumbs_down),
        KeyCode::Char('a') => app.navigate(Screen::Answer, RouteParams::new()),
        _ => {}
    }
}

fn handle_search(app: &mut App, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Esc => {
            app.go_back();
        }
        KeyCode::Enter => app.submit_search(),
        KeyCode::Up => app.move_search_selection(false),
        KeyCode::Down => app.move_search_selection(true),
        KeyCode::Backspace => app.search.input.pop(),
        KeyCode::Char(c) if !ctrl => app.search.input.push(c),
        _ => {}
    }
}

fn handle_profile(app: &mut App, key: KeyEvent) {
    if let Some(field) = app.profile.rename.as_mut() {
        match key.code {
            KeyCode::Esc => app.cancel_rename(),
            KeyCode::Enter => app.submit_rename(),
            KeyCode::Backspace => field.pop(),
            KeyCode::Char(c) => field.push(c),
            _ => {}
        }
        return;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('h') => {
            app.go_back();
        }
        KeyCode::Char('u') => app.open_rename(),
        KeyCode::Char('s') => app.navigate(Screen::Settings, RouteParams::new()),
        _ => {}
    }
}

fn handle_settings(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.go_back();
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_settings_selection(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_settings_selection(true),
        KeyCode::Enter => app.activate_setting(),
        _ => {}
    }
}

fn handle_terms(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_terms(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_terms(false),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_terms(true),
        _ => {}
    }
}

/// Key hints for the status bar.
pub fn hints(app: &App) -> &'static str {
    if app.alert.is_some() {
        return "Enter/Esc: OK";
    }
    match app.screen() {
        Screen::Login => {
            "Tab: next field | F2: show password | Enter: sign in | Ctrl+N: sign up | Ctrl+F: forgot password | Esc: quit"
        }
        Screen::Register => {
            "Tab: next field | F2: show password | Enter: sign up | Ctrl+L: sign in | Esc: back"
        }
        Screen::EducationLevel => "Up/Down: move | Space: select | Enter: complete sign up | Esc: back",
        Screen::ForgotEmail => "Enter: send OTP | Ctrl+L: sign in | Esc: back",
        Screen::ForgotOtp => "Enter: verify | Ctrl+R: resend OTP | Esc: back",
        Screen::ForgotReset => "Tab: next field | F2: show password | Enter: change password | Esc: back",
        Screen::Landing => {
            "Tab: section | Left/Right: select | Enter: open | s: see all | a: ask | /: search | p: profile | q: quit"
        }
        Screen::RecentQuestions => "Up/Down: select | Enter: open | m: more | Esc: back",
        Screen::QuestionDetail => {
            "Up/Down: comment | l: like | u: thumbs up | d: thumbs down | a: answer | Esc: back"
        }
        Screen::AskQuestion | Screen::Answer => "Tab: next field | Enter: submit | Esc: back",
        Screen::Search => "Type a query | Enter: search | Up/Down: scroll | Esc: back",
        Screen::Profile => {
            if app.profile.rename.is_some() {
                "Enter: change username | Esc: cancel"
            } else {
                "u: change username | s: settings | h: home"
            }
        }
        Screen::Settings => "Up/Down: select | Enter: open | Esc: back",
        Screen::Terms => "Up/Down: scroll | Esc: back",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn press(app: &mut App, code: KeyCode) -> Flow {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press_ctrl(app: &mut App, ch: char) -> Flow {
        handle_key(app, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut app = App::new(Config::default());
        assert_eq!(press_ctrl(&mut app, 'c'), Flow::Quit);
    }

    #[test]
    fn test_q_is_text_on_login() {
        let mut app = App::new(Config::default());
        assert_eq!(press(&mut app, KeyCode::Char('q')), Flow::Continue);
        assert_eq!(app.login.value(0), "q");
    }

    #[test]
    fn test_sign_in_by_keyboard() {
        let mut app = App::new(Config::default());
        type_text(&mut app, "gabriel");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "secret");
        assert_eq!(app.login.fields[1].display(), "••••••");
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.login.fields[1].display(), "secret");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Landing);
        assert_eq!(press(&mut app, KeyCode::Char('q')), Flow::Quit);
    }

    #[test]
    fn test_alert_blocks_input() {
        let mut app = App::new(Config::default());
        press(&mut app, KeyCode::Enter);
        assert!(app.alert.is_some());
        type_text(&mut app, "abc");
        assert_eq!(app.login.value(0), "");
        press(&mut app, KeyCode::Esc);
        assert!(app.alert.is_none());
        assert_eq!(app.screen(), Screen::Login);
    }

    #[test]
    fn test_login_links() {
        let mut app = App::new(Config::default());
        press_ctrl(&mut app, 'n');
        assert_eq!(app.screen(), Screen::Register);
        press_ctrl(&mut app, 'l');
        assert_eq!(app.screen(), Screen::Login);
        press_ctrl(&mut app, 'f');
        assert_eq!(app.screen(), Screen::ForgotEmail);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Login);
    }

    #[test]
    fn test_comment_reactions_by_keyboard() {
        let mut app = App::new(Config::default());
        app.reset_to(Screen::QuestionDetail);
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.detail.reactions[0], Reaction::LikedAndThumbsUp);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.detail.reactions[0], Reaction::ThumbsDown);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.detail.reactions[1], Reaction::Liked);
        assert_eq!(app.detail.reactions[0], Reaction::ThumbsDown);
    }

    #[test]
    fn test_search_by_keyboard() {
        let mut app = App::new(Config::default());
        app.reset_to(Screen::Landing);
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.screen(), Screen::Search);
        type_text(&mut app, "react native");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.search.results.len(), 1);
        assert_eq!(app.search.results[0].id, "3");
    }

    #[test]
    fn test_search_ignores_control_chords() {
        let mut app = App::new(Config::default());
        app.reset_to(Screen::Search);
        type_text(&mut app, "vlan");
        press_ctrl(&mut app, 'x');
        press_ctrl(&mut app, 'r');
        assert_eq!(app.search.input.value, "vlan");
    }

    #[test]
    fn test_profile_rename_captures_text() {
        let mut app = App::new(Config::default());
        app.reset_to(Screen::Profile);
        press(&mut app, KeyCode::Char('u'));
        type_text(&mut app, "squid");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.username, "squid");
    }

    #[test]
    fn test_hints_follow_alert() {
        let mut app = App::new(Config::default());
        app.show_alert("Error", "x", None);
        assert_eq!(hints(&app), "Enter/Esc: OK");
    }
}
