//! Application state management.
//!
//! One explicit state holder per screen, the navigation stack, the alert
//! dialog and the session log of submissions.

use crate::config::Config;
use crate::countdown::{CountdownTimer, OtpCountdown};
use crate::fixtures::{self, SettingsItem};
use crate::model::{Post, Record};
use crate::navigation::{QuestionParams, RouteParams, Router, Screen};
use crate::paginate::Paginator;
use crate::reaction::Reaction;
use crate::search;
use crate::validation::{
    self, AnswerInput, EducationInput, ForgotPasswordInput, LoginInput, QuestionInput,
    RegisterInput, ResetPasswordInput, UsernameInput, Validate, ValidationError,
    MAX_DESCRIPTION_LENGTH,
};
use chrono::{DateTime, Local};
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// Maximum OTP length.
pub const OTP_LENGTH: usize = 6;

/// Single-line text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub label: &'static str,
    pub value: String,
    /// Rendered as bullets unless revealed
    pub masked: bool,
    pub revealed: bool,
    /// Maximum length in characters; further input is refused
    pub max_len: Option<usize>,
    /// Accept ASCII digits only
    pub digits_only: bool,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            masked: false,
            revealed: false,
            max_len: None,
            digits_only: false,
        }
    }

    pub fn password(label: &'static str) -> Self {
        Self {
            masked: true,
            ..Self::new(label)
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn digits(mut self) -> Self {
        self.digits_only = true;
        self
    }

    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Append a character if the field accepts it.
    pub fn push(&mut self, ch: char) {
        if self.digits_only && !ch.is_ascii_digit() {
            return;
        }
        if let Some(max) = self.max_len
            && self.char_count() >= max
        {
            return;
        }
        self.value.push(ch);
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    pub fn toggle_reveal(&mut self) {
        if self.masked {
            self.revealed = !self.revealed;
        }
    }

    /// Text to draw: bullets for hidden passwords.
    pub fn display(&self) -> String {
        if self.masked && !self.revealed {
            "•".repeat(self.char_count())
        } else {
            self.value.clone()
        }
    }
}

/// Group of text fields with one focused field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub fields: Vec<TextField>,
    pub focus: usize,
}

impl Form {
    pub fn new(fields: Vec<TextField>) -> Self {
        Self { fields, focus: 0 }
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn focused_mut(&mut self) -> Option<&mut TextField> {
        self.fields.get_mut(self.focus)
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn push(&mut self, ch: char) {
        if let Some(field) = self.focused_mut() {
            field.push(ch);
        }
    }

    pub fn pop(&mut self) {
        if let Some(field) = self.focused_mut() {
            field.pop();
        }
    }

    pub fn toggle_reveal(&mut self) {
        if let Some(field) = self.focused_mut() {
            field.toggle_reveal();
        }
    }
}

fn login_form() -> Form {
    Form::new(vec![
        TextField::new("Username or Email"),
        TextField::password("Password"),
    ])
}

fn register_form() -> Form {
    Form::new(vec![
        TextField::new("Email"),
        TextField::new("Username"),
        TextField::password("Password"),
        TextField::password("Confirm Password"),
    ])
}

fn forgot_email_form() -> Form {
    Form::new(vec![TextField::new("Email")])
}

fn reset_password_form() -> Form {
    Form::new(vec![
        TextField::password("New Password"),
        TextField::password("Confirm Password"),
    ])
}

fn question_form() -> Form {
    Form::new(vec![
        TextField::new("Title"),
        TextField::new("Description").with_max_len(MAX_DESCRIPTION_LENGTH),
        TextField::new("Attachment (image path)"),
    ])
}

fn answer_form() -> Form {
    Form::new(vec![
        TextField::new("Description").with_max_len(MAX_DESCRIPTION_LENGTH),
        TextField::new("Attachment (image path)"),
    ])
}

/// What happens when an alert is acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterAlert {
    /// Pop the current screen
    Back,
    /// Open a screen on top of the current one
    Push(Screen),
    /// Clear the stack and start over at a screen
    ResetTo(Screen),
}

/// Blocking dialog with a single "OK" action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub after: Option<AfterAlert>,
}

/// Kind of content submitted during the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Question,
    Answer,
    UsernameChange,
}

/// Entry of the session activity log. Not persisted.
#[derive(Debug, Clone)]
pub struct Submission {
    pub kind: SubmissionKind,
    pub summary: String,
    pub at: DateTime<Local>,
}

/// Landing page card rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingSection {
    RecentQuestion,
    RecentAnswered,
}

impl LandingSection {
    pub fn title(self) -> &'static str {
        match self {
            LandingSection::RecentQuestion => "Recent Question",
            LandingSection::RecentAnswered => "Recent Answered",
        }
    }
}

#[derive(Debug)]
pub struct LandingState {
    pub recent: Vec<Record>,
    pub answered: Vec<Record>,
    pub section: LandingSection,
    pub selected: usize,
}

impl LandingState {
    fn new() -> Self {
        Self {
            recent: fixtures::landing_recent_questions(),
            answered: fixtures::landing_recent_answered(),
            section: LandingSection::RecentQuestion,
            selected: 0,
        }
    }

    pub fn cards(&self) -> &[Record] {
        match self.section {
            LandingSection::RecentQuestion => &self.recent,
            LandingSection::RecentAnswered => &self.answered,
        }
    }
}

#[derive(Debug)]
pub struct RecentState {
    pub records: Vec<Record>,
    pub paginator: Paginator,
    pub selected: usize,
}

impl RecentState {
    fn new(page_size: usize) -> Self {
        Self {
            records: fixtures::recent_questions(),
            paginator: Paginator::new(page_size),
            selected: 0,
        }
    }

    pub fn visible(&self) -> &[Record] {
        self.paginator.visible_prefix(&self.records)
    }

    pub fn has_more(&self) -> bool {
        self.paginator.has_more(self.records.len())
    }
}

/// Question detail with one reaction per comment.
#[derive(Debug)]
pub struct DetailState {
    pub post: Post,
    pub reactions: Vec<Reaction>,
    pub selected: usize,
}

impl DetailState {
    fn new(post: Post) -> Self {
        let reactions = post
            .comments
            .iter()
            .map(|c| Reaction::initial(c.liked_by_current_user))
            .collect();
        Self {
            post,
            reactions,
            selected: 0,
        }
    }
}

#[derive(Debug)]
pub struct SearchState {
    pub input: TextField,
    pub records: Vec<Record>,
    /// Query of the last submitted search, None before the first one
    pub submitted: Option<String>,
    pub results: Vec<Record>,
    pub selected: usize,
}

impl SearchState {
    fn new() -> Self {
        Self {
            input: TextField::new("Search"),
            records: fixtures::search_records(),
            submitted: None,
            results: Vec::new(),
            selected: 0,
        }
    }
}

#[derive(Debug)]
pub struct OtpState {
    pub input: TextField,
    pub countdown: OtpCountdown,
    timer: Option<CountdownTimer>,
}

impl OtpState {
    fn start(cooldown_secs: u32) -> Self {
        let countdown = OtpCountdown::new(cooldown_secs);
        let timer = (!countdown.can_resend()).then(|| CountdownTimer::spawn(Duration::from_secs(1)));
        Self {
            input: TextField::new("OTP").with_max_len(OTP_LENGTH).digits(),
            countdown,
            timer,
        }
    }

    pub fn timer_running(&self) -> bool {
        self.timer.as_ref().is_some_and(CountdownTimer::is_running)
    }
}

#[derive(Debug)]
pub struct ProfileState {
    /// Open change-username dialog
    pub rename: Option<TextField>,
}

#[derive(Debug, Default)]
pub struct EducationState {
    pub cursor: usize,
    pub selected: Option<usize>,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    pub config: Config,
    pub router: Router,
    pub username: String,
    pub alert: Option<Alert>,
    pub status_message: Option<String>,
    pub submissions: Vec<Submission>,

    pub login: Form,
    pub register: Form,
    pub education: EducationState,
    pub forgot_email: Form,
    pub otp: Option<OtpState>,
    pub reset_password: Form,
    pub landing: LandingState,
    pub recent: RecentState,
    pub detail: DetailState,
    pub ask: Form,
    pub answer: Form,
    pub search: SearchState,
    pub profile: ProfileState,
    pub settings: Vec<SettingsItem>,
    pub settings_selected: usize,
    pub terms_scroll: u16,
}

impl App {
    /// Create the application at the sign-in screen.
    pub fn new(config: Config) -> Self {
        let page_size = config.page_size;
        let username = config.username.clone();
        Self {
            config,
            router: Router::new(Screen::Login),
            username,
            alert: None,
            status_message: None,
            submissions: Vec::new(),
            login: login_form(),
            register: register_form(),
            education: EducationState::default(),
            forgot_email: forgot_email_form(),
            otp: None,
            reset_password: reset_password_form(),
            landing: LandingState::new(),
            recent: RecentState::new(page_size),
            detail: DetailState::new(fixtures::sample_post()),
            ask: question_form(),
            answer: answer_form(),
            search: SearchState::new(),
            profile: ProfileState { rename: None },
            settings: fixtures::settings_items(),
            settings_selected: 0,
            terms_scroll: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.router.current()
    }

    /// Whether printable keys should be treated as text input.
    pub fn accepts_text(&self) -> bool {
        self.screen().accepts_text()
            || (self.screen() == Screen::Profile && self.profile.rename.is_some())
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // --- navigation -------------------------------------------------------

    /// Open a screen with fresh state.
    pub fn navigate(&mut self, screen: Screen, params: RouteParams) {
        self.leave(self.screen());
        self.enter(screen, &params);
        self.router.push(screen, params);
        self.clear_status();
    }

    /// Replace the current screen with a fresh one.
    pub fn replace(&mut self, screen: Screen, params: RouteParams) {
        self.leave(self.screen());
        self.enter(screen, &params);
        self.router.replace(screen, params);
        self.clear_status();
    }

    /// Clear the stack and start over at `screen`.
    pub fn reset_to(&mut self, screen: Screen) {
        self.leave(self.screen());
        self.enter(screen, &RouteParams::new());
        self.router = Router::new(screen);
        self.clear_status();
    }

    /// Return to the previous screen.
    ///
    /// # Returns
    /// * `bool` - False if already at the root screen
    pub fn go_back(&mut self) -> bool {
        if !self.router.can_go_back() {
            return false;
        }
        self.leave(self.screen());
        self.router.back();
        self.clear_status();
        true
    }

    /// Initialize state for a screen being opened.
    fn enter(&mut self, screen: Screen, params: &RouteParams) {
        match screen {
            Screen::Login => self.login = login_form(),
            Screen::Register => self.register = register_form(),
            Screen::EducationLevel => self.education = EducationState::default(),
            Screen::ForgotEmail => self.forgot_email = forgot_email_form(),
            Screen::ForgotOtp => self.otp = Some(OtpState::start(self.config.otp_cooldown_secs)),
            Screen::ForgotReset => self.reset_password = reset_password_form(),
            Screen::Landing => self.landing = LandingState::new(),
            Screen::RecentQuestions => self.recent = RecentState::new(self.config.page_size),
            Screen::QuestionDetail => {
                let post = QuestionParams::from_params(params).resolve(&fixtures::sample_post());
                debug!(id = %post.id, "opening question");
                self.detail = DetailState::new(post);
            }
            Screen::AskQuestion => self.ask = question_form(),
            Screen::Answer => self.answer = answer_form(),
            Screen::Search => self.search = SearchState::new(),
            Screen::Profile => self.profile = ProfileState { rename: None },
            Screen::Settings => self.settings_selected = 0,
            Screen::Terms => self.terms_scroll = 0,
        }
    }

    /// Tear down state of a screen being left.
    fn leave(&mut self, screen: Screen) {
        if screen == Screen::ForgotOtp
            && let Some(otp) = self.otp.take()
        {
            debug!(running = otp.timer_running(), "cancelling OTP countdown");
        }
    }

    // --- alerts -----------------------------------------------------------

    pub fn show_alert(&mut self, title: &str, message: &str, after: Option<AfterAlert>) {
        self.alert = Some(Alert {
            title: title.to_string(),
            message: message.to_string(),
            after,
        });
    }

    fn show_errors(&mut self, errors: &[ValidationError]) {
        warn!(screen = ?self.screen(), count = errors.len(), "validation failed");
        self.show_alert("Error", &validation::describe(errors), None);
    }

    /// Dismiss the alert and run its follow-up navigation.
    pub fn acknowledge_alert(&mut self) {
        let Some(alert) = self.alert.take() else {
            return;
        };
        match alert.after {
            Some(AfterAlert::Back) => {
                self.go_back();
            }
            Some(AfterAlert::Push(screen)) => self.navigate(screen, RouteParams::new()),
            Some(AfterAlert::ResetTo(screen)) => self.reset_to(screen),
            None => {}
        }
    }

    // --- periodic ---------------------------------------------------------

    /// Apply elapsed countdown ticks. Called on every loop iteration.
    pub fn on_tick(&mut self) {
        let Some(otp) = self.otp.as_mut() else {
            return;
        };
        let Some(timer) = otp.timer.as_mut() else {
            return;
        };
        let elapsed = timer.drain();
        for _ in 0..elapsed {
            otp.countdown.tick();
        }
        if elapsed > 0 {
            trace!(remaining = otp.countdown.remaining(), "OTP countdown");
        }
        if otp.countdown.can_resend() {
            timer.stop();
            otp.timer = None;
            debug!("OTP countdown finished");
        }
    }

    // --- auth flow --------------------------------------------------------

    pub fn submit_login(&mut self) {
        let input = LoginInput {
            username: self.login.value(0),
            password: self.login.value(1),
        };
        match input.validate() {
            Ok(credentials) => {
                info!(username = %credentials.username, "sign in");
                self.reset_to(Screen::Landing);
            }
            Err(errors) => self.show_errors(&errors),
        }
    }

    pub fn submit_register(&mut self) {
        let input = RegisterInput {
            email: self.register.value(0),
            username: self.register.value(1),
            password: self.register.value(2),
            confirm_password: self.register.value(3),
        };
        match input.validate() {
            Ok(registration) => {
                info!(email = %registration.email, username = %registration.username, "sign up");
                self.username = registration.username;
                self.navigate(Screen::EducationLevel, RouteParams::new());
            }
            Err(errors) => self.show_errors(&errors),
        }
    }

    pub fn move_education_cursor(&mut self, down: bool) {
        let len = fixtures::EDUCATION_LEVELS.len();
        self.education.cursor = step(self.education.cursor, len, down);
    }

    pub fn select_education_level(&mut self) {
        self.education.selected = Some(self.education.cursor);
    }

    pub fn complete_signup(&mut self) {
        let selected = self
            .education
            .selected
            .and_then(|i| fixtures::EDUCATION_LEVELS.get(i))
            .map(|level| level.id);
        match (EducationInput { selected }).validate() {
            Ok(level) => {
                info!(level = %level, "education level selected");
                self.reset_to(Screen::Landing);
            }
            Err(_) => {
                warn!("education level missing");
                self.show_alert(
                    "Education Level Required",
                    "Please select your education level to continue.",
                    None,
                );
            }
        }
    }

    pub fn send_otp(&mut self) {
        let input = ForgotPasswordInput {
            email: self.forgot_email.value(0),
        };
        match input.validate() {
            Ok(email) => {
                info!(email = %email, "send OTP");
                self.navigate(Screen::ForgotOtp, RouteParams::new());
            }
            Err(_) => self.show_alert(
                "Email Required",
                "Please enter your email address to receive the OTP.",
                None,
            ),
        }
    }

    pub fn resend_otp(&mut self) {
        let Some(otp) = self.otp.as_mut() else {
            return;
        };
        if otp.countdown.resend() {
            info!("resending OTP");
            otp.timer = Some(CountdownTimer::spawn(Duration::from_secs(1)));
            self.set_status("OTP resent".to_string());
        } else {
            let wait = otp.countdown.display();
            self.set_status(format!("Resend available in {}", wait));
        }
    }

    pub fn verify_otp(&mut self) {
        let Some(otp) = self.otp.as_ref() else {
            return;
        };
        info!(otp = %otp.input.value, "verifying OTP");
        self.replace(Screen::ForgotReset, RouteParams::new());
    }

    pub fn submit_reset_password(&mut self) {
        let input = ResetPasswordInput {
            password: self.reset_password.value(0),
            confirm_password: self.reset_password.value(1),
        };
        match input.validate() {
            Ok(_) => {
                info!("password changed");
                self.show_alert(
                    "Success",
                    "Your password has been changed successfully",
                    Some(AfterAlert::ResetTo(Screen::Login)),
                );
            }
            Err(errors) => self.show_errors(&errors),
        }
    }

    // --- browsing ---------------------------------------------------------

    pub fn switch_landing_section(&mut self) {
        self.landing.section = match self.landing.section {
            LandingSection::RecentQuestion => LandingSection::RecentAnswered,
            LandingSection::RecentAnswered => LandingSection::RecentQuestion,
        };
        self.landing.selected = 0;
    }

    pub fn move_landing_selection(&mut self, down: bool) {
        let len = self.landing.cards().len();
        self.landing.selected = step(self.landing.selected, len, down);
    }

    /// "See all" for the active landing section.
    pub fn see_all(&mut self) {
        match self.landing.section {
            LandingSection::RecentQuestion => {
                self.navigate(Screen::RecentQuestions, RouteParams::new())
            }
            LandingSection::RecentAnswered => {
                info!(section = self.landing.section.title(), "see all");
                self.set_status("No more answered questions yet".to_string());
            }
        }
    }

    pub fn open_landing_card(&mut self) {
        if let Some(record) = self.landing.cards().get(self.landing.selected).cloned() {
            self.open_question(&record);
        }
    }

    pub fn open_question(&mut self, record: &Record) {
        let params = QuestionParams::from_record(record).to_params();
        self.navigate(Screen::QuestionDetail, params);
    }

    pub fn move_recent_selection(&mut self, down: bool) {
        let len = self.recent.visible().len();
        self.recent.selected = step(self.recent.selected, len, down);
    }

    pub fn load_more(&mut self) {
        if self.recent.has_more() {
            self.recent.paginator.load_more();
            debug!(
                pages = self.recent.paginator.pages_shown(),
                visible = self.recent.visible().len(),
                "load more"
            );
        } else {
            self.set_status("All questions shown".to_string());
        }
    }

    pub fn open_recent_question(&mut self) {
        if let Some(record) = self.recent.visible().get(self.recent.selected).cloned() {
            self.open_question(&record);
        }
    }

    pub fn move_comment_selection(&mut self, down: bool) {
        let len = self.detail.reactions.len();
        self.detail.selected = step(self.detail.selected, len, down);
    }

    /// Apply a reaction press to the selected comment.
    pub fn react(&mut self, press: fn(Reaction) -> Reaction) {
        if let Some(reaction) = self.detail.reactions.get_mut(self.detail.selected) {
            *reaction = press(*reaction);
            debug!(comment = self.detail.selected, state = ?reaction, "reaction");
        }
    }

    /// Run the search. A blank query resets to the prompt state.
    pub fn submit_search(&mut self) {
        let query = self.search.input.value.trim().to_string();
        self.search.results = search::filter(&self.search.records, &query);
        self.search.selected = 0;
        debug!(query = %query, results = self.search.results.len(), "search");
        self.search.submitted = (!query.is_empty()).then_some(query);
    }

    pub fn move_search_selection(&mut self, down: bool) {
        let len = self.search.results.len();
        self.search.selected = step(self.search.selected, len, down);
    }

    // --- posting ----------------------------------------------------------

    fn record_submission(&mut self, kind: SubmissionKind, summary: String) {
        info!(?kind, summary = %summary, "submitted");
        self.submissions.push(Submission {
            kind,
            summary,
            at: Local::now(),
        });
    }

    pub fn submit_question(&mut self) {
        let input = QuestionInput {
            title: self.ask.value(0),
            description: self.ask.value(1),
            attachment: self.ask.value(2),
        };
        match input.validate() {
            Ok(draft) => {
                let summary = match &draft.attachment {
                    Some(path) => format!("{} [{}]", draft.title, path.display()),
                    None => draft.title.clone(),
                };
                self.record_submission(SubmissionKind::Question, summary);
                self.ask = question_form();
                self.show_alert("Success", "Question submitted!", Some(AfterAlert::Back));
            }
            Err(errors) => self.show_errors(&errors),
        }
    }

    pub fn submit_answer(&mut self) {
        let input = AnswerInput {
            description: self.answer.value(0),
            attachment: self.answer.value(1),
        };
        match input.validate() {
            Ok(draft) => {
                let summary = format!("Re: {}", self.detail.post.question);
                debug!(chars = draft.description.chars().count(), "answer body");
                self.record_submission(SubmissionKind::Answer, summary);
                self.answer = answer_form();
                self.show_alert(
                    "Success",
                    "The answer has been submitted",
                    Some(AfterAlert::Back),
                );
            }
            Err(errors) => self.show_errors(&errors),
        }
    }

    // --- profile and settings ---------------------------------------------

    pub fn open_rename(&mut self) {
        self.profile.rename = Some(TextField::new("New Username"));
    }

    pub fn cancel_rename(&mut self) {
        self.profile.rename = None;
    }

    pub fn submit_rename(&mut self) {
        let Some(field) = self.profile.rename.as_ref() else {
            return;
        };
        let result = UsernameInput {
            username: &field.value,
        }
        .validate();
        match result {
            Ok(username) => {
                self.record_submission(
                    SubmissionKind::UsernameChange,
                    format!("{} -> {}", self.username, username),
                );
                self.username = username;
                self.profile.rename = None;
            }
            Err(errors) => self.show_errors(&errors),
        }
    }

    pub fn move_settings_selection(&mut self, down: bool) {
        self.settings_selected = step(self.settings_selected, self.settings.len(), down);
    }

    pub fn activate_setting(&mut self) {
        let Some(item) = self.settings.get(self.settings_selected).copied() else {
            return;
        };
        debug!(item = item.id, "settings");
        match item.id {
            "terms_of_service" => self.navigate(Screen::Terms, RouteParams::new()),
            "log_out" => {
                info!(username = %self.username, "log out");
                self.show_alert(
                    "Log Out",
                    "You have been signed out.",
                    Some(AfterAlert::ResetTo(Screen::Login)),
                );
            }
            "change_password" => self.show_alert(
                "Navigation",
                "Navigate to Change Password",
                Some(AfterAlert::Push(Screen::ForgotReset)),
            ),
            _ => {
                let message = format!("Navigate to {}", item.label);
                self.show_alert("Navigation", &message, None);
            }
        }
    }

    pub fn scroll_terms(&mut self, down: bool) {
        self.terms_scroll = if down {
            self.terms_scroll.saturating_add(1)
        } else {
            self.terms_scroll.saturating_sub(1)
        };
    }

    /// Leave the terms screen, falling back to settings if opened directly.
    pub fn close_terms(&mut self) {
        if !self.go_back() {
            self.replace(Screen::Settings, RouteParams::new());
        }
    }
}

/// Move a wrapping selection index one step.
fn step(index: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if down {
        (index + 1) % len
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_test_app() -> App {
        App::new(Config::default())
    }

    fn type_into(form: &mut Form, index: usize, text: &str) {
        form.focus = index;
        for ch in text.chars() {
            form.push(ch);
        }
    }

    #[test]
    fn test_app_new() {
        let app = create_test_app();
        assert_eq!(app.screen(), Screen::Login);
        assert!(app.alert.is_none());
        assert_eq!(app.username, "Gabriel");
    }

    #[test]
    fn test_text_field_limits() {
        let mut field = TextField::new("OTP").with_max_len(3).digits();
        for ch in "1a2b34".chars() {
            field.push(ch);
        }
        assert_eq!(field.value, "123");

        let mut password = TextField::password("Password");
        password.push('x');
        password.push('y');
        assert_eq!(password.display(), "••");
        password.toggle_reveal();
        assert_eq!(password.display(), "xy");
    }

    #[test]
    fn test_form_focus_wraps() {
        let mut form = register_form();
        form.prev_field();
        assert_eq!(form.focus, 3);
        form.next_field();
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn test_login_validation_alert_keeps_screen() {
        let mut app = create_test_app();
        app.submit_login();
        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.title, "Error");
        assert!(alert.message.contains("username or email"));
        assert!(alert.message.contains("password"));
        app.acknowledge_alert();
        assert_eq!(app.screen(), Screen::Login);
    }

    #[test]
    fn test_login_success_goes_to_landing() {
        let mut app = create_test_app();
        type_into(&mut app.login, 0, "gabriel");
        type_into(&mut app.login, 1, "secret");
        app.submit_login();
        assert!(app.alert.is_none());
        assert_eq!(app.screen(), Screen::Landing);
        assert!(!app.router.can_go_back());
    }

    #[test]
    fn test_register_then_education_level() {
        let mut app = create_test_app();
        app.navigate(Screen::Register, RouteParams::new());
        type_into(&mut app.register, 0, "sinta@example.com");
        type_into(&mut app.register, 1, "sinta");
        type_into(&mut app.register, 2, "secret1");
        type_into(&mut app.register, 3, "secret1");
        app.submit_register();
        assert_eq!(app.screen(), Screen::EducationLevel);
        assert_eq!(app.username, "sinta");

        app.complete_signup();
        assert_eq!(app.alert.as_ref().unwrap().title, "Education Level Required");
        app.acknowledge_alert();

        app.move_education_cursor(false);
        app.select_education_level();
        app.complete_signup();
        assert_eq!(app.screen(), Screen::Landing);
    }

    #[tokio::test]
    async fn test_forgot_password_flow() {
        let mut app = create_test_app();
        app.navigate(Screen::ForgotEmail, RouteParams::new());
        app.send_otp();
        assert_eq!(app.alert.as_ref().unwrap().title, "Email Required");
        app.acknowledge_alert();

        type_into(&mut app.forgot_email, 0, "a@b.c");
        app.send_otp();
        assert_eq!(app.screen(), Screen::ForgotOtp);
        let otp = app.otp.as_ref().unwrap();
        assert!(otp.timer_running());
        assert!(!otp.countdown.can_resend());

        app.resend_otp();
        assert!(app.status_message.as_deref().unwrap().starts_with("Resend available"));

        app.verify_otp();
        assert_eq!(app.screen(), Screen::ForgotReset);
        assert!(app.otp.is_none());

        type_into(&mut app.reset_password, 0, "newpass");
        type_into(&mut app.reset_password, 1, "newpass");
        app.submit_reset_password();
        app.acknowledge_alert();
        assert_eq!(app.screen(), Screen::Login);
        assert_eq!(app.router.depth(), 1);
    }

    #[tokio::test]
    async fn test_otp_countdown_ticks_and_stops() {
        let config = Config {
            otp_cooldown_secs: 0,
            ..Config::default()
        };
        let mut app = App::new(config);
        app.navigate(Screen::ForgotOtp, RouteParams::new());
        let otp = app.otp.as_ref().unwrap();
        assert!(otp.countdown.can_resend());
        assert!(!otp.timer_running());

        app.on_tick();
        app.resend_otp();
        assert_eq!(app.status_message.as_deref(), Some("OTP resent"));

        app.go_back();
        assert!(app.otp.is_none());
    }

    #[tokio::test]
    async fn test_otp_timer_stops_when_countdown_ends() {
        let config = Config {
            otp_cooldown_secs: 1,
            ..Config::default()
        };
        let mut app = App::new(config);
        app.navigate(Screen::ForgotOtp, RouteParams::new());
        assert!(app.otp.as_ref().unwrap().timer_running());
        app.resend_otp();
        assert_eq!(app.status_message.as_deref(), Some("Resend available in 00:01"));

        tokio::time::sleep(Duration::from_millis(1500)).await;
        app.on_tick();
        let otp = app.otp.as_ref().unwrap();
        assert_eq!(otp.countdown.remaining(), 0);
        assert!(otp.countdown.can_resend());
        assert!(!otp.timer_running());

        app.resend_otp();
        assert_eq!(app.status_message.as_deref(), Some("OTP resent"));
        assert!(app.otp.as_ref().unwrap().timer_running());
    }

    #[test]
    fn test_recent_questions_load_more() {
        let mut app = create_test_app();
        app.reset_to(Screen::Landing);
        app.see_all();
        assert_eq!(app.screen(), Screen::RecentQuestions);
        assert_eq!(app.recent.visible().len(), 5);
        assert!(app.recent.has_more());

        app.load_more();
        assert_eq!(app.recent.visible().len(), 10);
        assert!(!app.recent.has_more());

        app.load_more();
        assert_eq!(app.recent.visible().len(), 10);
        assert_eq!(app.status_message.as_deref(), Some("All questions shown"));
    }

    #[test]
    fn test_open_question_passes_params() {
        let mut app = create_test_app();
        app.reset_to(Screen::RecentQuestions);
        app.move_recent_selection(true);
        app.move_recent_selection(true);
        app.open_recent_question();
        assert_eq!(app.screen(), Screen::QuestionDetail);
        assert_eq!(app.detail.post.id, "3");
        assert!(app.detail.post.image_placeholder);
        assert_eq!(
            app.router.params().and_then(|p| p.get("likes")).map(String::as_str),
            Some("19")
        );
    }

    #[test]
    fn test_reactions_reset_on_reentry() {
        let mut app = create_test_app();
        app.reset_to(Screen::Landing);
        app.open_landing_card();
        assert_eq!(app.detail.reactions[0], Reaction::Liked);

        app.react(Reaction::press_thumbs_up);
        assert_eq!(app.detail.reactions[0], Reaction::LikedAndThumbsUp);
        app.react(Reaction::press_thumbs_down);
        assert_eq!(app.detail.reactions[0], Reaction::ThumbsDown);
        assert_eq!(app.detail.post.likes, 19);

        app.go_back();
        app.open_landing_card();
        assert_eq!(app.detail.reactions[0], Reaction::Liked);
    }

    #[test]
    fn test_search_screen() {
        let mut app = create_test_app();
        app.reset_to(Screen::Search);
        for ch in "   ".chars() {
            app.search.input.push(ch);
        }
        app.submit_search();
        assert!(app.search.results.is_empty());
        assert!(app.search.submitted.is_none());
        app.search.input.value.clear();

        for ch in "Mikrotik".chars() {
            app.search.input.push(ch);
        }
        app.submit_search();
        let ids: Vec<&str> = app.search.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_ask_question_flow() {
        let mut app = create_test_app();
        app.reset_to(Screen::Landing);
        app.navigate(Screen::AskQuestion, RouteParams::new());
        app.submit_question();
        assert!(app.alert.as_ref().unwrap().message.contains("Title is required"));
        app.acknowledge_alert();
        assert_eq!(app.screen(), Screen::AskQuestion);

        let file = NamedTempFile::new().unwrap();
        type_into(&mut app.ask, 0, "Apa itu VLAN?");
        type_into(&mut app.ask, 1, "Mohon penjelasannya");
        type_into(&mut app.ask, 2, file.path().to_str().unwrap());
        app.submit_question();
        assert_eq!(app.alert.as_ref().unwrap().message, "Question submitted!");
        app.acknowledge_alert();
        assert_eq!(app.screen(), Screen::Landing);
        assert_eq!(app.submissions.len(), 1);
        assert_eq!(app.submissions[0].kind, SubmissionKind::Question);
    }

    #[test]
    fn test_answer_returns_to_question() {
        let mut app = create_test_app();
        app.reset_to(Screen::QuestionDetail);
        app.navigate(Screen::Answer, RouteParams::new());
        app.submit_answer();
        assert_eq!(app.alert.as_ref().unwrap().title, "Error");
        app.acknowledge_alert();

        type_into(&mut app.answer, 0, "RouterOS adalah sistem operasinya.");
        app.submit_answer();
        app.acknowledge_alert();
        assert_eq!(app.screen(), Screen::QuestionDetail);
        assert_eq!(app.submissions[0].summary, "Re: Apa yang dimaksud dengan Mikrotik?");
    }

    #[test]
    fn test_answer_reports_missing_attachment() {
        let mut app = create_test_app();
        app.reset_to(Screen::QuestionDetail);
        app.navigate(Screen::Answer, RouteParams::new());
        type_into(&mut app.answer, 0, "RouterOS adalah OS");
        type_into(&mut app.answer, 1, "/no/such/file.png");
        app.submit_answer();
        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.title, "Error");
        assert!(alert.message.contains("Attachment not found"));
        assert!(!alert.message.contains("Description"));
        app.acknowledge_alert();
        assert_eq!(app.screen(), Screen::Answer);
        assert!(app.submissions.is_empty());
    }

    #[test]
    fn test_description_input_is_capped() {
        let mut app = create_test_app();
        app.reset_to(Screen::Answer);
        let long = "x".repeat(MAX_DESCRIPTION_LENGTH + 10);
        type_into(&mut app.answer, 0, &long);
        assert_eq!(app.answer.fields[0].char_count(), MAX_DESCRIPTION_LENGTH);
    }

    #[test]
    fn test_change_username() {
        let mut app = create_test_app();
        app.reset_to(Screen::Profile);
        app.open_rename();
        assert!(app.accepts_text());
        app.submit_rename();
        assert!(app.alert.is_some());
        app.acknowledge_alert();

        if let Some(field) = app.profile.rename.as_mut() {
            for ch in "Budi".chars() {
                field.push(ch);
            }
        }
        app.submit_rename();
        assert_eq!(app.username, "Budi");
        assert!(app.profile.rename.is_none());
        assert_eq!(app.submissions[0].summary, "Gabriel -> Budi");
    }

    #[test]
    fn test_settings_actions() {
        let mut app = create_test_app();
        app.reset_to(Screen::Settings);
        app.activate_setting();
        assert_eq!(app.alert.as_ref().unwrap().message, "Navigate to Change Email");
        app.acknowledge_alert();
        assert_eq!(app.screen(), Screen::Settings);

        app.settings_selected = 2;
        app.activate_setting();
        assert_eq!(app.screen(), Screen::Terms);
        app.close_terms();
        assert_eq!(app.screen(), Screen::Settings);

        app.settings_selected = 0;
        app.move_settings_selection(false);
        assert_eq!(app.settings[app.settings_selected].id, "log_out");
        app.activate_setting();
        app.acknowledge_alert();
        assert_eq!(app.screen(), Screen::Login);
    }

    #[test]
    fn test_terms_without_history_falls_back_to_settings() {
        let mut app = create_test_app();
        app.reset_to(Screen::Terms);
        app.close_terms();
        assert_eq!(app.screen(), Screen::Settings);
    }

    #[test]
    fn test_step_wraps() {
        assert_eq!(step(0, 3, false), 2);
        assert_eq!(step(2, 3, true), 0);
        assert_eq!(step(5, 0, true), 0);
    }
}
