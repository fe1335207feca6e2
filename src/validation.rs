//! Form validation.
//!
//! Every form validates all of its fields at once and reports one
//! [`ValidationError`] per failed field.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Maximum length of question and answer descriptions, in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Minimum password length at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A single failed field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your username or email")]
    LoginRequired,
    #[error("Please enter a username")]
    UsernameRequired,
    #[error("Please enter your email")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Please enter a password")]
    PasswordRequired,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Please confirm your password")]
    ConfirmationRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Title is required")]
    TitleRequired,
    #[error("Description is required")]
    DescriptionRequired,
    #[error("Description must be at most {max} characters")]
    DescriptionTooLong { max: usize },
    #[error("Attachment not found: {}", .0.display())]
    AttachmentNotFound(PathBuf),
    #[error("Please select your education level to continue")]
    EducationLevelRequired,
}

/// Result of validating a form.
pub type Validation<T> = Result<T, Vec<ValidationError>>;

/// A form that can be checked before submission.
pub trait Validate {
    /// Validated, owned form contents.
    type Output;

    /// Check every field, collecting all failures.
    fn validate(&self) -> Validation<Self::Output>;
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Loose email shape check: non-space, `@`, non-space, `.`, non-space.
pub fn looks_like_email(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    chars.iter().enumerate().any(|(at, &c)| {
        if c != '@' || at == 0 || chars[at - 1].is_whitespace() {
            return false;
        }
        let domain: Vec<char> = chars[at + 1..]
            .iter()
            .copied()
            .take_while(|ch| !ch.is_whitespace())
            .collect();
        domain
            .iter()
            .enumerate()
            .any(|(i, &ch)| ch == '.' && i > 0 && i + 1 < domain.len())
    })
}

fn check_attachment(attachment: &str, errors: &mut Vec<ValidationError>) -> Option<PathBuf> {
    let trimmed = attachment.trim();
    if trimmed.is_empty() {
        return None;
    }
    let path = Path::new(trimmed);
    if path.is_file() {
        Some(path.to_path_buf())
    } else {
        errors.push(ValidationError::AttachmentNotFound(path.to_path_buf()));
        None
    }
}

fn check_description(description: &str, errors: &mut Vec<ValidationError>) {
    if is_blank(description) {
        errors.push(ValidationError::DescriptionRequired);
    } else if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        errors.push(ValidationError::DescriptionTooLong {
            max: MAX_DESCRIPTION_LENGTH,
        });
    }
}

fn finish<T>(errors: Vec<ValidationError>, output: impl FnOnce() -> T) -> Validation<T> {
    if errors.is_empty() {
        Ok(output())
    } else {
        Err(errors)
    }
}

/// Sign-in form.
#[derive(Debug, Clone, Copy)]
pub struct LoginInput<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Validated sign-in credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Validate for LoginInput<'_> {
    type Output = Credentials;

    fn validate(&self) -> Validation<Credentials> {
        let mut errors = Vec::new();
        if is_blank(self.username) {
            errors.push(ValidationError::LoginRequired);
        }
        if is_blank(self.password) {
            errors.push(ValidationError::PasswordRequired);
        }
        finish(errors, || Credentials {
            username: self.username.trim().to_string(),
            password: self.password.to_string(),
        })
    }
}

/// Sign-up form.
#[derive(Debug, Clone, Copy)]
pub struct RegisterInput<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

/// Validated sign-up details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl Validate for RegisterInput<'_> {
    type Output = Registration;

    fn validate(&self) -> Validation<Registration> {
        let mut errors = Vec::new();

        if is_blank(self.email) {
            errors.push(ValidationError::EmailRequired);
        } else if !looks_like_email(self.email) {
            errors.push(ValidationError::EmailInvalid);
        }

        if is_blank(self.username) {
            errors.push(ValidationError::UsernameRequired);
        }

        if is_blank(self.password) {
            errors.push(ValidationError::PasswordRequired);
        } else if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        if is_blank(self.confirm_password) {
            errors.push(ValidationError::ConfirmationRequired);
        } else if self.confirm_password != self.password {
            errors.push(ValidationError::PasswordMismatch);
        }

        finish(errors, || Registration {
            email: self.email.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password.to_string(),
        })
    }
}

/// Email entered to receive a one-time password.
#[derive(Debug, Clone, Copy)]
pub struct ForgotPasswordInput<'a> {
    pub email: &'a str,
}

impl Validate for ForgotPasswordInput<'_> {
    type Output = String;

    fn validate(&self) -> Validation<String> {
        let mut errors = Vec::new();
        if is_blank(self.email) {
            errors.push(ValidationError::EmailRequired);
        }
        finish(errors, || self.email.trim().to_string())
    }
}

/// New password entered after OTP verification.
#[derive(Debug, Clone, Copy)]
pub struct ResetPasswordInput<'a> {
    pub password: &'a str,
    pub confirm_password: &'a str,
}

impl Validate for ResetPasswordInput<'_> {
    type Output = String;

    fn validate(&self) -> Validation<String> {
        let mut errors = Vec::new();
        if is_blank(self.password) {
            errors.push(ValidationError::PasswordRequired);
        }
        if is_blank(self.confirm_password) {
            errors.push(ValidationError::ConfirmationRequired);
        } else if self.password != self.confirm_password {
            errors.push(ValidationError::PasswordMismatch);
        }
        finish(errors, || self.password.to_string())
    }
}

/// Education level choice at the end of registration.
#[derive(Debug, Clone, Copy)]
pub struct EducationInput<'a> {
    pub selected: Option<&'a str>,
}

impl Validate for EducationInput<'_> {
    type Output = String;

    fn validate(&self) -> Validation<String> {
        match self.selected {
            Some(id) => Ok(id.to_string()),
            None => Err(vec![ValidationError::EducationLevelRequired]),
        }
    }
}

/// "Ask a question" form.
#[derive(Debug, Clone, Copy)]
pub struct QuestionInput<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// Path typed into the attachment field, possibly empty
    pub attachment: &'a str,
}

/// Validated question ready to post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub title: String,
    pub description: String,
    pub attachment: Option<PathBuf>,
}

impl Validate for QuestionInput<'_> {
    type Output = QuestionDraft;

    fn validate(&self) -> Validation<QuestionDraft> {
        let mut errors = Vec::new();
        if is_blank(self.title) {
            errors.push(ValidationError::TitleRequired);
        }
        check_description(self.description, &mut errors);
        let attachment = check_attachment(self.attachment, &mut errors);
        finish(errors, || QuestionDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            attachment,
        })
    }
}

/// Answer form.
#[derive(Debug, Clone, Copy)]
pub struct AnswerInput<'a> {
    pub description: &'a str,
    pub attachment: &'a str,
}

/// Validated answer ready to post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerDraft {
    pub description: String,
    pub attachment: Option<PathBuf>,
}

impl Validate for AnswerInput<'_> {
    type Output = AnswerDraft;

    fn validate(&self) -> Validation<AnswerDraft> {
        let mut errors = Vec::new();
        check_description(self.description, &mut errors);
        let attachment = check_attachment(self.attachment, &mut errors);
        finish(errors, || AnswerDraft {
            description: self.description.trim().to_string(),
            attachment,
        })
    }
}

/// Change-username dialog.
#[derive(Debug, Clone, Copy)]
pub struct UsernameInput<'a> {
    pub username: &'a str,
}

impl Validate for UsernameInput<'_> {
    type Output = String;

    fn validate(&self) -> Validation<String> {
        let mut errors = Vec::new();
        if is_blank(self.username) {
            errors.push(ValidationError::UsernameRequired);
        }
        finish(errors, || self.username.trim().to_string())
    }
}

/// Join validation errors into an alert message, one per line.
pub fn describe(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_login_requires_both_fields() {
        let errors = LoginInput {
            username: "  ",
            password: "",
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::LoginRequired, ValidationError::PasswordRequired]
        );

        let creds = LoginInput {
            username: " gabriel ",
            password: "secret",
        }
        .validate()
        .unwrap();
        assert_eq!(creds.username, "gabriel");
    }

    #[test]
    fn test_register_reports_every_field() {
        let errors = RegisterInput {
            email: "not-an-email",
            username: "",
            password: "abc",
            confirm_password: "abd",
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmailInvalid,
                ValidationError::UsernameRequired,
                ValidationError::PasswordTooShort { min: 6 },
                ValidationError::PasswordMismatch,
            ]
        );
    }

    #[test]
    fn test_register_valid() {
        let registration = RegisterInput {
            email: "gabriel@example.com",
            username: "gabriel",
            password: "secret1",
            confirm_password: "secret1",
        }
        .validate()
        .unwrap();
        assert_eq!(registration.email, "gabriel@example.com");
    }

    #[test]
    fn test_register_missing_confirmation() {
        let errors = RegisterInput {
            email: "",
            username: "u",
            password: "",
            confirm_password: " ",
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmailRequired,
                ValidationError::PasswordRequired,
                ValidationError::ConfirmationRequired,
            ]
        );
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("a@b.c"));
        assert!(looks_like_email("name.last@mail.example.org"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.c"));
        assert!(!looks_like_email("a@.c"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("a @b.c"));
    }

    #[test]
    fn test_reset_password_mismatch() {
        let errors = ResetPasswordInput {
            password: "one",
            confirm_password: "two",
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors, vec![ValidationError::PasswordMismatch]);
    }

    #[test]
    fn test_education_level_required() {
        assert!(EducationInput { selected: None }.validate().is_err());
        assert_eq!(
            EducationInput {
                selected: Some("college")
            }
            .validate()
            .unwrap(),
            "college"
        );
    }

    #[test]
    fn test_question_requires_title_and_description() {
        let errors = QuestionInput {
            title: "",
            description: " ",
            attachment: "",
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::TitleRequired, ValidationError::DescriptionRequired]
        );
    }

    #[test]
    fn test_description_length_limit() {
        let long = "x".repeat(MAX_DESCRIPTION_LENGTH + 1);
        let errors = AnswerInput {
            description: &long,
            attachment: "",
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DescriptionTooLong { max: 2000 }]
        );

        let exact = "x".repeat(MAX_DESCRIPTION_LENGTH);
        assert!(
            AnswerInput {
                description: &exact,
                attachment: ""
            }
            .validate()
            .is_ok()
        );
    }

    #[test]
    fn test_attachment_must_exist() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let draft = QuestionInput {
            title: "Apa itu mikrotik?",
            description: "Tolong jelaskan",
            attachment: &path,
        }
        .validate()
        .unwrap();
        assert_eq!(draft.attachment.as_deref(), Some(file.path()));

        let errors = AnswerInput {
            description: "jawaban",
            attachment: "/definitely/not/here.png",
        }
        .validate()
        .unwrap_err();
        assert!(matches!(errors[0], ValidationError::AttachmentNotFound(_)));
    }

    #[test]
    fn test_describe_joins_messages() {
        let message = describe(&[ValidationError::TitleRequired, ValidationError::DescriptionRequired]);
        assert_eq!(message, "Title is required\nDescription is required");
    }
}
