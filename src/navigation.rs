//! Screen routing and navigation parameters.
//!
//! Screens pass plain string key/value parameters to each other, the same
//! way a URL query would.

use crate::model::{Post, Record};
use std::collections::BTreeMap;

/// Every screen of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Login,
    Register,
    EducationLevel,
    ForgotEmail,
    ForgotOtp,
    ForgotReset,
    Landing,
    RecentQuestions,
    QuestionDetail,
    AskQuestion,
    Answer,
    Search,
    Profile,
    Settings,
    Terms,
}

impl Screen {
    /// Title shown in the window block.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Login => "Sign In",
            Screen::Register => "Sign Up",
            Screen::EducationLevel => "Education Level",
            Screen::ForgotEmail | Screen::ForgotOtp | Screen::ForgotReset => "Forgot Password",
            Screen::Landing => "Home",
            Screen::RecentQuestions => "Recent Question",
            Screen::QuestionDetail => "Question",
            Screen::AskQuestion => "Ask a Question",
            Screen::Answer => "Submit Answer",
            Screen::Search => "Search",
            Screen::Profile => "Profile",
            Screen::Settings => "Settings",
            Screen::Terms => "Terms of Service",
        }
    }

    /// Whether typed characters go into a text field on this screen.
    pub fn accepts_text(self) -> bool {
        matches!(
            self,
            Screen::Login
                | Screen::Register
                | Screen::ForgotEmail
                | Screen::ForgotOtp
                | Screen::ForgotReset
                | Screen::AskQuestion
                | Screen::Answer
                | Screen::Search
        )
    }
}

/// String parameters passed along with a navigation.
pub type RouteParams = BTreeMap<String, String>;

/// Navigation stack.
#[derive(Debug, Clone)]
pub struct Router {
    stack: Vec<(Screen, RouteParams)>,
}

impl Router {
    /// Create a router rooted at `screen`.
    pub fn new(screen: Screen) -> Self {
        Self {
            stack: vec![(screen, RouteParams::new())],
        }
    }

    pub fn current(&self) -> Screen {
        self.stack.last().map(|(screen, _)| *screen).unwrap_or(Screen::Login)
    }

    /// Parameters the current screen was opened with.
    #[cfg(test)]
    pub fn params(&self) -> Option<&RouteParams> {
        self.stack.last().map(|(_, params)| params)
    }

    pub fn push(&mut self, screen: Screen, params: RouteParams) {
        tracing::debug!(?screen, "push");
        self.stack.push((screen, params));
    }

    /// Replace the current screen without growing the stack.
    pub fn replace(&mut self, screen: Screen, params: RouteParams) {
        tracing::debug!(?screen, "replace");
        self.stack.pop();
        self.stack.push((screen, params));
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Pop the current screen.
    ///
    /// # Returns
    /// * `bool` - False if already at the root
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.stack.pop();
        tracing::debug!(screen = ?self.current(), "back");
        true
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// Parameters for opening a question on the detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionParams {
    pub id: Option<String>,
    pub category_title: Option<String>,
    pub question_text: Option<String>,
    pub content_text: Option<String>,
    pub likes: Option<String>,
    pub attachment_uri: Option<String>,
    pub image_placeholder: Option<String>,
}

impl QuestionParams {
    /// Parameters describing a question card.
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: Some(record.id.clone()),
            category_title: (!record.category.is_empty()).then(|| record.category.clone()),
            question_text: Some(record.title.clone()),
            content_text: Some(record.body.clone()),
            likes: Some(record.likes.to_string()),
            attachment_uri: None,
            image_placeholder: Some(record.image_placeholder.to_string()),
        }
    }

    /// Serialize into string parameters. Absent values are omitted.
    pub fn to_params(&self) -> RouteParams {
        let mut params = RouteParams::new();
        let fields = [
            ("id", &self.id),
            ("categoryTitle", &self.category_title),
            ("questionText", &self.question_text),
            ("contentText", &self.content_text),
            ("likes", &self.likes),
            ("attachmentUri", &self.attachment_uri),
            ("imagePlaceholder", &self.image_placeholder),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                params.insert(key.to_string(), value.clone());
            }
        }
        params
    }

    pub fn from_params(params: &RouteParams) -> Self {
        let get = |key: &str| params.get(key).cloned();
        Self {
            id: get("id"),
            category_title: get("categoryTitle"),
            question_text: get("questionText"),
            content_text: get("contentText"),
            likes: get("likes"),
            attachment_uri: get("attachmentUri"),
            image_placeholder: get("imagePlaceholder"),
        }
    }

    /// Build the post to display, falling back to `fallback` field by field.
    ///
    /// # Details
    /// Empty strings count as missing. Likes that do not parse as a number
    /// fall back too. The image placeholder is shown only for the exact
    /// string "true". Comments always come from the fallback post.
    pub fn resolve(&self, fallback: &Post) -> Post {
        let text = |value: &Option<String>, default: &str| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };
        let likes = self
            .likes
            .as_deref()
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(fallback.likes);

        Post {
            id: text(&self.id, &fallback.id),
            category: text(&self.category_title, &fallback.category),
            question: text(&self.question_text, &fallback.question),
            content: text(&self.content_text, &fallback.content),
            likes,
            attachment: self.attachment_uri.clone().filter(|v| !v.is_empty()),
            image_placeholder: self.image_placeholder.as_deref() == Some("true"),
            comments: fallback.comments.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_router_push_and_back() {
        let mut router = Router::new(Screen::Landing);
        assert!(!router.can_go_back());
        assert!(!router.back());

        router.push(Screen::RecentQuestions, RouteParams::new());
        assert_eq!(router.current(), Screen::RecentQuestions);
        assert!(router.back());
        assert_eq!(router.current(), Screen::Landing);
    }

    #[test]
    fn test_router_replace_keeps_depth() {
        let mut router = Router::new(Screen::Login);
        router.push(Screen::ForgotEmail, RouteParams::new());
        router.replace(Screen::ForgotOtp, RouteParams::new());
        assert_eq!(router.depth(), 2);
        assert_eq!(router.current(), Screen::ForgotOtp);
    }

    #[test]
    fn test_question_params_round_trip_through_strings() {
        let records = fixtures::recent_questions();
        let record = &records[2];
        let params = QuestionParams::from_record(record).to_params();
        assert_eq!(params.get("likes").map(String::as_str), Some("19"));
        assert_eq!(params.get("imagePlaceholder").map(String::as_str), Some("true"));
        assert!(!params.contains_key("categoryTitle"));

        let post = QuestionParams::from_params(&params).resolve(&fixtures::sample_post());
        assert_eq!(post.id, "3");
        assert_eq!(post.question, "Keamanan Data & Informasi");
        assert_eq!(post.category, "Jaringan Komputer");
        assert_eq!(post.likes, 19);
        assert!(post.image_placeholder);
    }

    #[test]
    fn test_resolve_falls_back_to_sample_post() {
        let sample = fixtures::sample_post();
        let post = QuestionParams::default().resolve(&sample);
        assert_eq!(post.question, sample.question);
        assert_eq!(post.likes, 193);
        assert!(!post.image_placeholder);
        assert_eq!(post.comments.len(), 2);
    }

    #[test]
    fn test_resolve_bad_likes_and_placeholder_flag() {
        let params = QuestionParams {
            likes: Some("many".to_string()),
            image_placeholder: Some("yes".to_string()),
            ..QuestionParams::default()
        };
        let post = params.resolve(&fixtures::sample_post());
        assert_eq!(post.likes, 193);
        assert!(!post.image_placeholder);
    }
}
