use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - represents a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Assigned by storage on insert; `None` until then.
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload used to create or update a post. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInput {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl PostInput {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }
}

impl Post {
    /// Create a new, not yet stored post.
    pub fn new(input: PostInput) -> Self {
        Self {
            id: None,
            title: input.title,
            content: input.content,
            author: input.author,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Replace the editable fields and stamp `updated_at`.
    ///
    /// `id` and `created_at` are left untouched.
    pub fn apply(&mut self, input: PostInput) {
        self.title = input.title;
        self.content = input.content;
        self.author = input.author;
        self.updated_at = Some(Utc::now());
    }
}
