//! Go-Tanya data models.
//!
//! Contains questions, comments, posts and the other fixture-backed records
//! shown by the screens.

/// Represents a question or answer item.
///
/// Carries the searchable text fields and a static like count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Opaque stable identifier
    pub id: String,
    /// Question title
    pub title: String,
    /// Question body or answer snippet
    pub body: String,
    /// Category label (e.g. "Jaringan Komputer")
    pub category: String,
    /// Like count
    pub likes: u32,
    /// Whether the card shows an image placeholder
    pub image_placeholder: bool,
}

impl Record {
    /// Create a new Record instance.
    ///
    /// # Arguments
    /// * `id` - Record ID
    /// * `title` - Question title
    /// * `body` - Body text
    /// * `category` - Category label
    /// * `likes` - Like count
    ///
    /// # Returns
    /// * `Record` - New record without an image placeholder
    pub fn new(id: &str, title: &str, body: &str, category: &str, likes: u32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            category: category.to_string(),
            likes,
            image_placeholder: false,
        }
    }

    /// Mark the record as showing an image placeholder.
    pub fn with_image_placeholder(mut self) -> Self {
        self.image_placeholder = true;
        self
    }

    /// Format like count with K/M suffixes.
    pub fn format_likes(&self) -> String {
        format_likes(self.likes)
    }
}

/// A comment shown under a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    /// Heading line ("Re: ...")
    pub heading: String,
    pub text: String,
    /// Seed for the heart reaction
    pub liked_by_current_user: bool,
}

/// The question shown on the detail screen together with its comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub category: String,
    pub question: String,
    pub content: String,
    pub likes: u32,
    /// Local path or URI of an attached image
    pub attachment: Option<String>,
    pub image_placeholder: bool,
    pub comments: Vec<Comment>,
}

/// Education level offered at the end of registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationLevel {
    pub id: &'static str,
    pub label: &'static str,
}

/// Format a count with K/M suffixes.
///
/// # Arguments
/// * `count` - Count to format
///
/// # Returns
/// * `String` - e.g. "193", "1.5K", "2.5M"
pub fn format_likes(count: u32) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}
